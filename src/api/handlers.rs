//! REST request handlers.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{Span, field, info, instrument, warn};

use super::types::{ErrorResponse, GuessRequest, HealthResponse, NewGameResponse};
use crate::error::{GameError, GameErrorKind};
use crate::games::hangman::{GameSnapshot, GuessOutcome};
use crate::registry::GameRegistry;

/// Maps an error kind to its HTTP status.
pub fn status_for(kind: GameErrorKind) -> StatusCode {
    match kind {
        GameErrorKind::OutOfRange => StatusCode::NOT_FOUND,
        GameErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        GameErrorKind::GameOver | GameErrorKind::LetterAlreadyGuessed => StatusCode::CONFLICT,
        GameErrorKind::WordUnavailable => StatusCode::SERVICE_UNAVAILABLE,
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        (status_for(self.kind), Json(ErrorResponse::from(&self))).into_response()
    }
}

impl From<JsonRejection> for GameError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        warn!(status = %rejection.status(), "Malformed request body");
        GameError::new(GameErrorKind::InvalidInput, rejection.body_text())
    }
}

impl From<PathRejection> for GameError {
    #[track_caller]
    fn from(rejection: PathRejection) -> Self {
        warn!(status = %rejection.status(), "Malformed request path");
        GameError::new(GameErrorKind::InvalidInput, rejection.body_text())
    }
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Start a new game.
#[instrument(skip(registry))]
pub async fn new_game(
    State(registry): State<GameRegistry>,
) -> Result<(StatusCode, Json<NewGameResponse>), GameError> {
    let game_id = registry.create_game()?;
    info!(game_id, "Game created via REST");
    Ok((StatusCode::CREATED, Json(NewGameResponse::created(game_id))))
}

/// List every game.
#[instrument(skip(registry))]
pub async fn list_games(State(registry): State<GameRegistry>) -> Json<Vec<GameSnapshot>> {
    Json(registry.list_games().collect())
}

/// Get one game.
#[instrument(skip_all, fields(game_id = field::Empty))]
pub async fn get_game(
    State(registry): State<GameRegistry>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<GameSnapshot>, GameError> {
    let Path(id) = id?;
    Span::current().record("game_id", id);
    Ok(Json(registry.snapshot(id)?))
}

/// Guess a letter.
#[instrument(skip_all, fields(game_id = field::Empty, player = field::Empty))]
pub async fn guess(
    State(registry): State<GameRegistry>,
    req: Result<Json<GuessRequest>, JsonRejection>,
) -> Result<Json<GuessOutcome>, GameError> {
    let Json(req) = req?;
    Span::current()
        .record("game_id", req.game_id)
        .record("player", req.player_name());
    let outcome = registry
        .guess(req.game_id, &req.letter, req.player_name())
        .inspect_err(|e| warn!(kind = %e.kind, "Guess rejected"))?;
    Ok(Json(outcome))
}
