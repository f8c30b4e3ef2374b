//! Shared, append-only registry of hangman games.

use crate::error::GameError;
use crate::games::hangman::{Game, GameId, GameSnapshot, GuessOutcome};
use crate::words::WordSource;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use tracing::{debug, info, instrument, warn};

/// Handle to one game slot.
///
/// Handles stay valid for the life of the registry, even while it grows.
pub type GameHandle = Arc<Mutex<Game>>;

/// Locks a game, recovering from poisoning.
///
/// Every mutation of a [`Game`] leaves it consistent, so a panic in another
/// holder never leaves a half-applied guess behind.
pub fn lock_game(handle: &GameHandle) -> MutexGuard<'_, Game> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns every game for the lifetime of the process.
///
/// Cloning is cheap and shares the same games.
#[derive(Clone)]
pub struct GameRegistry {
    games: Arc<RwLock<Vec<GameHandle>>>,
    words: Arc<dyn WordSource>,
}

impl GameRegistry {
    /// Creates an empty registry drawing words from `words`.
    #[instrument(skip(words))]
    pub fn new(words: Arc<dyn WordSource>) -> Self {
        info!("Creating game registry");
        Self {
            games: Arc::new(RwLock::new(Vec::new())),
            words,
        }
    }

    /// Starts a new game and returns its id.
    ///
    /// # Errors
    ///
    /// Returns a `WordUnavailable` error if the word source fails or yields an
    /// unusable word. Nothing is appended in that case.
    #[instrument(skip(self))]
    pub fn create_game(&self) -> Result<GameId, GameError> {
        let word = self.words.next_word().map_err(|e| {
            warn!(error = %e, "Word source failed");
            GameError::word_unavailable(e.message)
        })?;

        let mut games = self.games.write().unwrap_or_else(PoisonError::into_inner);
        let id = games.len();
        let game = Game::new(id, &word)?;
        games.push(Arc::new(Mutex::new(game)));

        info!(game_id = id, open_games = games.len(), "Game created");
        Ok(id)
    }

    /// Returns the handle for game `id`.
    ///
    /// # Errors
    ///
    /// Returns an `OutOfRange` error if `id` is negative or not yet assigned.
    #[instrument(skip(self))]
    pub fn get_game(&self, id: i64) -> Result<GameHandle, GameError> {
        let games = self.games.read().unwrap_or_else(PoisonError::into_inner);
        usize::try_from(id)
            .ok()
            .and_then(|index| games.get(index))
            .cloned()
            .ok_or_else(|| {
                debug!(id, "Game not found");
                GameError::out_of_range(id, games.len())
            })
    }

    /// Returns a snapshot of game `id`.
    ///
    /// # Errors
    ///
    /// Returns an `OutOfRange` error if the game does not exist.
    #[instrument(skip(self))]
    pub fn snapshot(&self, id: i64) -> Result<GameSnapshot, GameError> {
        let handle = self.get_game(id)?;
        let game = lock_game(&handle);
        Ok(game.snapshot())
    }

    /// Makes a guess on game `id` as `player`.
    ///
    /// The game's lock is held for the whole transaction, so guesses on the
    /// same game never interleave. Guesses on other games are not blocked.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for an unknown id, otherwise whatever
    /// [`Game::guess`] rejects the guess with.
    #[instrument(skip(self))]
    pub fn guess(&self, id: i64, letter: &str, player: &str) -> Result<GuessOutcome, GameError> {
        let handle = self.get_game(id)?;
        let mut game = lock_game(&handle);
        game.guess(letter, player)
    }

    /// Lists snapshots of every game in ascending id order.
    ///
    /// The games present at call time are captured; each snapshot is taken
    /// lazily when the iterator reaches it. Clone the iterator to restart.
    #[instrument(skip(self))]
    pub fn list_games(&self) -> GameSnapshots {
        let games = self.games.read().unwrap_or_else(PoisonError::into_inner);
        debug!(count = games.len(), "Listing games");
        GameSnapshots {
            handles: Arc::new(games.clone()),
            next: 0,
        }
    }

    /// Returns the number of games created so far.
    pub fn len(&self) -> usize {
        self.games.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns true if no game has been created.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for GameRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameRegistry")
            .field("games", &self.len())
            .finish_non_exhaustive()
    }
}

/// Lazy iterator over game snapshots.
#[derive(Debug, Clone)]
pub struct GameSnapshots {
    handles: Arc<Vec<GameHandle>>,
    next: usize,
}

impl Iterator for GameSnapshots {
    type Item = GameSnapshot;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.handles.get(self.next)?;
        self.next += 1;
        let game = lock_game(handle);
        Some(game.snapshot())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.handles.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GameSnapshots {}
