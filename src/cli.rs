//! Command-line interface for strictly_hangman.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Hangman - multiplayer hangman over REST and MCP
#[derive(Parser, Debug)]
#[command(name = "strictly_hangman")]
#[command(about = "Multiplayer hangman server and client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server (REST routes plus MCP at /mcp)
    Serve {
        /// Path to the configuration file
        #[arg(short, long, default_value = strictly_hangman::DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Port to bind to (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Newline-separated word list (overrides the config file)
        #[arg(long)]
        words: Option<PathBuf>,
    },

    /// Run the MCP server over stdio
    Rpc {
        /// Path to the configuration file
        #[arg(short, long, default_value = strictly_hangman::DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Newline-separated word list (overrides the config file)
        #[arg(long)]
        words: Option<PathBuf>,
    },

    /// Ask the server to start a new game
    #[command(alias = "n")]
    NewGame {
        /// Server URL
        #[arg(long, default_value = "http://localhost:8080")]
        server_url: String,
    },

    /// Print the list of games on the server
    #[command(alias = "l")]
    Games {
        /// Server URL
        #[arg(long, default_value = "http://localhost:8080")]
        server_url: String,
    },

    /// Guess a letter in a game
    #[command(alias = "g")]
    Guess {
        /// Game number
        game: String,

        /// Letter to guess
        letter: String,

        /// Player name credited with a win
        #[arg(default_value = strictly_hangman::DEFAULT_PLAYER)]
        player: String,

        /// Server URL
        #[arg(long, default_value = "http://localhost:8080")]
        server_url: String,
    },
}
