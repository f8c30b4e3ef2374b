//! Request and response types shared by the REST and MCP interfaces.

use crate::error::{GameError, GameErrorKind};
use crate::games::hangman::GameId;
use derive_new::new;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Player name used when a guess does not give one.
pub const DEFAULT_PLAYER: &str = "guest";

fn default_player() -> String {
    DEFAULT_PLAYER.to_string()
}

/// Request to guess a letter.
#[derive(Debug, Clone, new, Serialize, Deserialize, JsonSchema)]
pub struct GuessRequest {
    /// Game to guess in.
    pub game_id: i64,
    /// A single letter.
    pub letter: String,
    /// Name credited if this guess wins the game.
    #[serde(default = "default_player")]
    pub player: String,
}

impl GuessRequest {
    /// Player to credit, falling back to [`DEFAULT_PLAYER`] when blank.
    pub fn player_name(&self) -> &str {
        match self.player.trim() {
            "" => DEFAULT_PLAYER,
            name => name,
        }
    }
}

/// Response to creating a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGameResponse {
    /// Id of the new game.
    pub game_id: GameId,
    /// Human-readable confirmation.
    pub message: String,
}

impl NewGameResponse {
    /// Builds the response for game `game_id`.
    pub fn created(game_id: GameId) -> Self {
        Self {
            game_id,
            message: format!("Game {} Created", game_id),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok`.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error kind.
    pub error: GameErrorKind,
    /// Human-readable description.
    pub message: String,
}

impl From<&GameError> for ErrorResponse {
    fn from(err: &GameError) -> Self {
        Self {
            error: err.kind,
            message: err.message.clone(),
        }
    }
}
