//! REST interface.
//!
//! Endpoints:
//! - GET  /health      - Health check
//! - POST /newgame     - Start a new game
//! - GET  /games       - List every game
//! - GET  /games/{id}  - Get one game
//! - POST /guess       - Guess a letter

mod handlers;
mod types;

pub use handlers::{get_game, guess, health, list_games, new_game};
pub use types::{ErrorResponse, GuessRequest, HealthResponse, NewGameResponse, DEFAULT_PLAYER};

use crate::registry::GameRegistry;
use axum::{
    Router,
    routing::{get, post},
};

/// Creates the REST router over `registry`.
pub fn create_app(registry: GameRegistry) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/newgame", post(new_game))
        .route("/games", get(list_games))
        .route("/games/{id}", get(get_game))
        .route("/guess", post(guess))
        .with_state(registry)
}
