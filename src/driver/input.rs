//! Parsing player input.

use crate::core::CODE_LENGTH;

/// Read a guess from one line of input.
///
/// Takes leading whitespace-separated integers, stopping at the first token
/// that is not an integer or once [`CODE_LENGTH`] have been read. Anything
/// after the fourth integer is ignored. Returns `None` if fewer than four
/// integers were found. Range and distinctness are not checked here.
#[must_use]
pub fn parse_guess(line: &str) -> Option<Vec<i32>> {
    let values: Vec<i32> = line
        .split_whitespace()
        .map_while(|token| token.parse().ok())
        .take(CODE_LENGTH)
        .collect();

    (values.len() == CODE_LENGTH).then_some(values)
}

/// Interpret a yes/no answer. Only a leading `y` or `Y` counts as yes.
#[must_use]
pub fn is_yes(line: &str) -> bool {
    matches!(line.trim_start().chars().next(), Some('y' | 'Y'))
}
