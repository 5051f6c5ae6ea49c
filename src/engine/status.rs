//! Game status, history entries, and snapshots.

use serde::{Deserialize, Serialize};

use crate::core::{Code, Score};

/// Where the current game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Guesses are still accepted.
    InProgress,
    /// A guess scored four exact matches.
    Won,
    /// The attempt budget ran out without a win.
    Lost,
}

impl GameStatus {
    /// Won or lost.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won => write!(f, "won"),
            GameStatus::Lost => write!(f, "lost"),
        }
    }
}

/// One scored guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub guess: Code,
    pub score: Score,
}

impl HistoryEntry {
    /// The score rendered as `xAyB`.
    #[must_use]
    pub fn result(&self) -> String {
        self.score.to_string()
    }
}

/// Read-only view of a game for display and debugging.
///
/// `secret` is only filled in once the game is over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub remaining_attempts: u32,
    pub history: Vec<HistoryEntry>,
    pub secret: Option<Code>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_terminal() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Lost.is_terminal());
        assert_eq!(GameStatus::Won.to_string(), "won");
    }

    #[test]
    fn test_history_entry_result() {
        let entry = HistoryEntry {
            guess: Code::new([1, 3, 2, 5]).unwrap(),
            score: Score::new(1, 2),
        };
        assert_eq!(entry.result(), "1A2B");
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = GameSnapshot {
            status: GameStatus::InProgress,
            remaining_attempts: 5,
            history: vec![HistoryEntry {
                guess: Code::new([0, 1, 2, 3]).unwrap(),
                score: Score::new(0, 1),
            }],
            secret: None,
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
