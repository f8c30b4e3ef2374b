//! Core domain types for hangman.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a game, equal to its index in the registry.
pub type GameId = usize;

/// Turn budget every game starts with.
pub const MAX_TURNS: u8 = 8;

/// Mask shown for positions that have not been guessed yet.
pub const PLACEHOLDER: char = '_';

/// Rendered in place of a winner while a game has none.
pub const NO_WINNER: &str = "N/A";

/// Where a game is in its lifecycle.
///
/// `Won` and `Lost` are terminal: no transition leaves them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum GameStatus {
    /// Guesses are accepted.
    Active,
    /// The word was fully revealed by `winner`.
    Won {
        /// Player whose guess completed the word.
        winner: String,
    },
    /// The turn budget ran out.
    Lost,
}

impl GameStatus {
    /// Returns true while the game accepts guesses.
    pub fn is_active(&self) -> bool {
        matches!(self, GameStatus::Active)
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<&str> {
        match self {
            GameStatus::Won { winner } => Some(winner),
            _ => None,
        }
    }
}

/// Read-only copy of a game's public state.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Game id.
    id: GameId,
    /// Winner, if any.
    winner: Option<String>,
    /// Whether guesses are still accepted.
    active: bool,
    /// Turns left before the game is lost.
    remaining_turns: u8,
    /// Masked word, one character per position.
    revealed: String,
}

impl GameSnapshot {
    pub(crate) fn new(
        id: GameId,
        winner: Option<String>,
        active: bool,
        remaining_turns: u8,
        revealed: String,
    ) -> Self {
        Self {
            id,
            winner,
            active,
            remaining_turns,
            revealed,
        }
    }

    /// Column header matching the [`Display`](fmt::Display) row layout.
    pub const TABLE_HEADER: &'static str = "GAME ID | WINNER | PLAYABLE | TURNS | WORD STATE";
}

impl fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = self
            .revealed
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(",");
        write!(
            f,
            "{:>7} | {:>6} | {:>8} | {:>5} | {}",
            self.id,
            self.winner.as_deref().unwrap_or(NO_WINNER),
            self.active,
            self.remaining_turns,
            word
        )
    }
}

/// Renders snapshots as a table, one row per game under a header.
pub fn render_table<I>(snapshots: I) -> String
where
    I: IntoIterator<Item = GameSnapshot>,
{
    let mut table = String::from(GameSnapshot::TABLE_HEADER);
    for snapshot in snapshots {
        table.push('\n');
        table.push_str(&snapshot.to_string());
    }
    table
}

/// Result of an accepted guess.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GuessOutcome {
    /// Game the guess was made on.
    game_id: GameId,
    /// The normalised letter that was played.
    letter: char,
    /// Number of positions this guess revealed.
    hits: usize,
    /// Turns left after the guess.
    remaining_turns: u8,
    /// Whether the game still accepts guesses.
    active: bool,
    /// Winner, once the word is complete.
    winner: Option<String>,
    /// Masked word after the guess.
    revealed: String,
    /// Human-readable result lines.
    detail: Vec<String>,
}

impl GuessOutcome {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        game_id: GameId,
        letter: char,
        hits: usize,
        remaining_turns: u8,
        active: bool,
        winner: Option<String>,
        revealed: String,
        detail: Vec<String>,
    ) -> Self {
        Self {
            game_id,
            letter,
            hits,
            remaining_turns,
            active,
            winner,
            revealed,
            detail,
        }
    }

    /// Returns the game state right after this guess.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(
            self.game_id,
            self.winner.clone(),
            self.active,
            self.remaining_turns,
            self.revealed.clone(),
        )
    }
}
