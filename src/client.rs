//! HTTP client for a running hangman server.

use crate::api::{ErrorResponse, GuessRequest, NewGameResponse};
use crate::games::hangman::{GameSnapshot, GuessOutcome, parse_letter};
use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

/// REST client for the hangman server.
#[derive(Debug, Clone)]
pub struct HangmanClient {
    base_url: String,
    client: reqwest::Client,
}

impl HangmanClient {
    /// Creates a client for the server at `base_url`.
    #[instrument]
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Starts a new game.
    #[instrument(skip(self))]
    pub async fn new_game(&self) -> Result<NewGameResponse> {
        info!("Requesting new game");
        let response = self
            .client
            .post(format!("{}/newgame", self.base_url))
            .send()
            .await
            .context("Failed to start new game")?;
        Self::decode(response).await
    }

    /// Lists every game.
    #[instrument(skip(self))]
    pub async fn list_games(&self) -> Result<Vec<GameSnapshot>> {
        debug!("Listing games");
        let response = self
            .client
            .get(format!("{}/games", self.base_url))
            .send()
            .await
            .context("Failed to list games")?;
        Self::decode(response).await
    }

    /// Guesses `letter` in `game` as `player`.
    ///
    /// The guess is validated locally before anything is sent.
    #[instrument(skip(self))]
    pub async fn guess(&self, game: &str, letter: &str, player: &str) -> Result<GuessOutcome> {
        let game_id: i64 = game
            .trim()
            .parse()
            .with_context(|| format!("Invalid param - game no: {:?}", game))?;
        parse_letter(letter).context("Invalid param - guess letter")?;

        let request = GuessRequest::new(game_id, letter.to_string(), player.to_string());
        let response = self
            .client
            .post(format!("{}/guess", self.base_url))
            .json(&request)
            .send()
            .await
            .context("Failed to make guess")?;
        Self::decode(response).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .context("Failed to decode server response");
        }

        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(err) => anyhow::bail!("{} ({})", err.message, err.error),
            Err(_) => anyhow::bail!("Server returned {}: {}", status, body),
        }
    }
}
