//! Property tests for scoring and validation.

use std::collections::HashSet;

use bulls_cows::core::{score, Code};
use bulls_cows::engine::{GameEngine, MAX_ATTEMPTS};
use bulls_cows::generator::FixedCodeGenerator;
use proptest::prelude::*;

/// Any valid code: the first four digits of a shuffled 0..=9.
fn valid_code() -> impl Strategy<Value = Code> {
    Just((0u8..10).collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|d| Code::new([d[0], d[1], d[2], d[3]]).unwrap())
}

fn engine_with(secret: Code) -> GameEngine {
    GameEngine::builder()
        .generator(FixedCodeGenerator::from(secret))
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn perfect_guess_wins(code in valid_code()) {
        let mut game = engine_with(code);
        let digits: Vec<i32> = code.digits().iter().map(|&d| d as i32).collect();

        let result = game.process_guess(&digits).unwrap();

        prop_assert_eq!(result.exact, 4);
        prop_assert_eq!(result.partial, 0);
        prop_assert_eq!(result.to_string(), "4A0B");
        prop_assert!(game.has_won());
        prop_assert_eq!(game.remaining_attempts(), MAX_ATTEMPTS - 1);
    }

    #[test]
    fn matches_bounded_by_shared_digits(secret in valid_code(), guess in valid_code()) {
        let result = score(&secret, &guess);

        let a: HashSet<_> = secret.digits().iter().collect();
        let b: HashSet<_> = guess.digits().iter().collect();
        let shared = a.intersection(&b).count();

        prop_assert!(result.total() <= 4);
        prop_assert!(result.total() as usize <= shared);
        // With distinct digits every shared digit is counted exactly once
        prop_assert_eq!(result.total() as usize, shared);
    }

    #[test]
    fn exact_counts_positions(secret in valid_code(), guess in valid_code()) {
        let result = score(&secret, &guess);
        let positional = secret
            .digits()
            .iter()
            .zip(guess.digits())
            .filter(|(s, g)| s == g)
            .count();
        prop_assert_eq!(result.exact as usize, positional);
    }

    #[test]
    fn scoring_is_symmetric(a in valid_code(), b in valid_code()) {
        prop_assert_eq!(score(&a, &b), score(&b, &a));
    }

    #[test]
    fn accepts_every_valid_code(code in valid_code()) {
        let game = engine_with(code);
        let digits: Vec<i32> = code.digits().iter().map(|&d| d as i32).collect();
        prop_assert!(game.is_valid_input(&digits));
    }

    #[test]
    fn rejects_out_of_range(
        code in valid_code(),
        pos in 0usize..4,
        bad in prop_oneof![i32::MIN..0, 10..i32::MAX],
    ) {
        let game = engine_with(code);
        let mut digits: Vec<i32> = code.digits().iter().map(|&d| d as i32).collect();
        digits[pos] = bad;
        prop_assert!(!game.is_valid_input(&digits));
    }

    #[test]
    fn rejects_repeated_digit(code in valid_code(), from in 0usize..4, to in 0usize..4) {
        prop_assume!(from != to);
        let game = engine_with(code);
        let mut digits: Vec<i32> = code.digits().iter().map(|&d| d as i32).collect();
        digits[to] = digits[from];
        prop_assert!(!game.is_valid_input(&digits));
    }

    #[test]
    fn rejects_wrong_length(values in prop::collection::vec(0i32..10, 0..8)) {
        prop_assume!(values.len() != 4);
        let game = engine_with(Code::new([0, 1, 2, 3]).unwrap());
        prop_assert!(!game.is_valid_input(&values));
    }

    #[test]
    fn six_misses_lose(secret in valid_code(), guesses in prop::collection::vec(valid_code(), 6)) {
        prop_assume!(guesses.iter().all(|g| *g != secret));
        let mut game = engine_with(secret);

        for guess in &guesses {
            let digits: Vec<i32> = guess.digits().iter().map(|&d| d as i32).collect();
            game.process_guess(&digits).unwrap();
        }

        prop_assert!(game.has_lost());
        prop_assert!(!game.has_won());
        prop_assert_eq!(game.history().len(), 6);
    }
}
