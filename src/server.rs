//! MCP server exposing the game registry as JSON-RPC tools.

use crate::api::GuessRequest;
use crate::error::{GameError, GameErrorKind};
use crate::games::hangman::render_table;
use crate::registry::GameRegistry;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, error, info, instrument, warn};

/// Request for a single game's state.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetGameRequest {
    /// Game id.
    pub game_id: i64,
}

/// Outcome of mapping a [`GameError`] onto MCP.
///
/// Rule rejections (finished game, repeated letter) are ordinary tool
/// results flagged as errors; bad arguments are JSON-RPC errors.
fn into_tool_result(err: GameError) -> Result<CallToolResult, McpError> {
    let data = Some(json!({ "kind": err.kind }));
    match err.kind {
        GameErrorKind::GameOver | GameErrorKind::LetterAlreadyGuessed => {
            Ok(CallToolResult::error(vec![Content::text(err.message)]))
        }
        GameErrorKind::OutOfRange | GameErrorKind::InvalidInput => {
            Err(McpError::invalid_params(err.message, data))
        }
        GameErrorKind::WordUnavailable => {
            error!(error = %err, "Game creation failed");
            Err(McpError::internal_error(err.message, data))
        }
    }
}

/// Main server handler.
pub struct GameServer {
    registry: GameRegistry,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl GameServer {
    /// Creates a game server over a shared registry.
    #[instrument(skip(registry))]
    pub fn new(registry: GameRegistry) -> Self {
        info!("Creating game server");
        Self {
            registry,
            tool_router: Self::tool_router(),
        }
    }

    /// Returns the registry this server operates on.
    pub fn registry(&self) -> &GameRegistry {
        &self.registry
    }

    /// Starts a new game.
    #[instrument(skip(self))]
    #[tool(description = "Start a new hangman game. Returns the new game number.")]
    pub async fn new_game(&self) -> Result<CallToolResult, McpError> {
        let game_id = match self.registry.create_game() {
            Ok(id) => id,
            Err(e) => return into_tool_result(e),
        };

        info!(game_id, "Game created via MCP");
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Game {} Created",
            game_id
        ))]))
    }

    /// Lists every game.
    #[instrument(skip(self))]
    #[tool(description = "List every game with its winner, playable flag, turns left and word state")]
    pub async fn list_games(&self) -> Result<CallToolResult, McpError> {
        let games: Vec<_> = self.registry.list_games().collect();
        debug!(count = games.len(), "Listing games");

        if games.is_empty() {
            return Ok(CallToolResult::success(vec![Content::text("No games yet")]));
        }
        Ok(CallToolResult::success(vec![Content::text(render_table(games))]))
    }

    /// Gets one game.
    #[instrument(skip(self, req), fields(game_id = req.game_id))]
    #[tool(description = "Get the state of one game")]
    pub async fn get_game(
        &self,
        Parameters(req): Parameters<GetGameRequest>,
    ) -> Result<CallToolResult, McpError> {
        match self.registry.snapshot(req.game_id) {
            Ok(snapshot) => Ok(CallToolResult::success(vec![Content::text(render_table([
                snapshot,
            ]))])),
            Err(e) => into_tool_result(e),
        }
    }

    /// Guesses a letter.
    #[instrument(skip(self, req), fields(game_id = req.game_id, player = req.player_name()))]
    #[tool(description = "Guess a single letter in a game. The player completing the word wins.")]
    pub async fn guess(
        &self,
        Parameters(req): Parameters<GuessRequest>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = match self.registry.guess(req.game_id, &req.letter, req.player_name()) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(kind = %e.kind, "Guess rejected");
                return into_tool_result(e);
            }
        };

        let mut message = outcome.detail().join("\n");
        message.push_str("\n\n");
        message.push_str(&render_table([outcome.snapshot()]));
        Ok(CallToolResult::success(vec![Content::text(message)]))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for GameServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Multiplayer hangman: new_game, list_games, get_game, guess".into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
