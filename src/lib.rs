//! Strictly Hangman library - concurrent multiplayer hangman
//!
//! Games live in an in-memory [`GameRegistry`] shared by every request
//! handler. Each game is guarded by its own lock, so guesses on different
//! games never wait on each other.
//!
//! # Architecture
//!
//! - **Games**: the hangman state machine ([`Game`])
//! - **Registry**: append-only, concurrently accessible game storage
//! - **Words**: pluggable [`WordSource`] for new games
//! - **API**: REST interface (axum)
//! - **Server**: MCP interface (JSON-RPC tools)
//! - **Client**: HTTP client for the REST interface
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use strictly_hangman::{GameRegistry, ScriptedWords};
//!
//! # fn example() -> Result<(), strictly_hangman::GameError> {
//! let registry = GameRegistry::new(Arc::new(ScriptedWords::new(["cat"])));
//! let id = registry.create_game()? as i64;
//!
//! let outcome = registry.guess(id, "c", "alice")?;
//! assert_eq!(*outcome.hits(), 1);
//! assert_eq!(outcome.revealed(), "c__");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod client;
mod config;
mod error;
mod games;
mod registry;
mod server;
mod words;

pub mod api;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, ServerConfig};

// Crate-level exports - Errors
pub use error::{GameError, GameErrorKind};

// Crate-level exports - Game types
pub use games::hangman::{
    Game, GameId, GameSnapshot, GameStatus, GuessOutcome, MAX_TURNS, NO_WINNER, PLACEHOLDER,
    normalize_word, parse_letter, render_table,
};

// Crate-level exports - Registry
pub use registry::{GameHandle, GameRegistry, GameSnapshots, lock_game};

// Crate-level exports - Word sources
pub use words::{RandomWords, ScriptedWords, WordListError, WordSource};

// Crate-level exports - Transports
pub use api::{DEFAULT_PLAYER, GuessRequest, create_app};
pub use client::HangmanClient;
pub use server::{GameServer, GetGameRequest};
