//! Game error types.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Why a game operation was rejected.
///
/// Every kind is recoverable by the caller: the registry keeps serving
/// requests after returning any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GameErrorKind {
    /// No game exists with the requested id.
    OutOfRange,
    /// The game already ended in a win or a loss.
    GameOver,
    /// The letter was guessed earlier in this game.
    LetterAlreadyGuessed,
    /// The guess is not a single alphabetic character.
    InvalidInput,
    /// The word source could not supply a usable word.
    WordUnavailable,
}

/// Error returned by registry and game operations, with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", message, file, line)]
pub struct GameError {
    /// What went wrong.
    pub kind: GameErrorKind,
    /// Human-readable description.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: GameErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// The requested game id does not exist.
    #[track_caller]
    pub fn out_of_range(id: i64, count: usize) -> Self {
        Self::new(
            GameErrorKind::OutOfRange,
            format!("Game {} does not exist ({} games open)", id, count),
        )
    }

    /// The game has already finished.
    #[track_caller]
    pub fn game_over(id: usize) -> Self {
        Self::new(
            GameErrorKind::GameOver,
            format!("Game {} is finished, cannot make guess", id),
        )
    }

    /// The letter was played before.
    #[track_caller]
    pub fn already_guessed(letter: char) -> Self {
        Self::new(
            GameErrorKind::LetterAlreadyGuessed,
            format!("Letter '{}' already played, try again", letter),
        )
    }

    /// The guess failed validation.
    #[track_caller]
    pub fn invalid_input(guess: &str) -> Self {
        Self::new(
            GameErrorKind::InvalidInput,
            format!("Guess {:?} is not a single letter", guess),
        )
    }

    /// The word source failed or produced an unusable word.
    #[track_caller]
    pub fn word_unavailable(reason: impl Into<String>) -> Self {
        Self::new(GameErrorKind::WordUnavailable, reason)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> GameErrorKind {
        self.kind
    }
}
