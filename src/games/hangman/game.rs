//! Hangman round state machine.
//!
//! A [`Game`] holds a hidden word and the masked rendering players see.
//! All mutation goes through [`Game::guess`], which evaluates one guess as a
//! staged transaction: validate, reject finished games, reject repeated
//! letters, reveal matches, charge a turn on a miss, then check for a win.

use super::types::{
    GameId, GameSnapshot, GameStatus, GuessOutcome, MAX_TURNS, PLACEHOLDER,
};
use crate::error::GameError;
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, warn};

/// A single hangman round.
#[derive(Debug, Clone)]
pub struct Game {
    id: GameId,
    target: Vec<char>,
    revealed: Vec<char>,
    guessed: BTreeSet<char>,
    remaining_turns: u8,
    status: GameStatus,
}

/// Normalises a raw guess to a single lowercase letter.
///
/// # Errors
///
/// Returns an `InvalidInput` error unless `guess` is exactly one alphabetic
/// character.
pub fn parse_letter(guess: &str) -> Result<char, GameError> {
    let mut chars = guess.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(GameError::invalid_input(guess));
    };
    if !c.is_alphabetic() {
        return Err(GameError::invalid_input(guess));
    }

    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => Ok(l),
        _ => Err(GameError::invalid_input(guess)),
    }
}

/// Folds `word` to the form games are played on.
///
/// Each character is lower-cased on its own, the same way [`parse_letter`]
/// folds a guess, so every letter of the result can be guessed. Returns
/// `None` if the result is empty or contains anything but letters.
pub fn normalize_word(word: &str) -> Option<String> {
    let folded: String = word.trim().chars().flat_map(char::to_lowercase).collect();
    if folded.is_empty() || !folded.chars().all(char::is_alphabetic) {
        return None;
    }
    Some(folded)
}

impl Game {
    /// Creates a new active game for `word`.
    ///
    /// The word is normalised with [`normalize_word`]; every position starts
    /// masked.
    ///
    /// # Errors
    ///
    /// Returns a `WordUnavailable` error if [`normalize_word`] rejects the
    /// word.
    #[instrument(skip(word))]
    pub fn new(id: GameId, word: &str) -> Result<Self, GameError> {
        let target: Vec<char> = normalize_word(word)
            .ok_or_else(|| {
                GameError::word_unavailable(format!(
                    "Word source returned unusable word {:?}",
                    word
                ))
            })?
            .chars()
            .collect();

        debug!(id, length = target.len(), "Creating game");
        Ok(Self {
            id,
            revealed: vec![PLACEHOLDER; target.len()],
            target,
            guessed: BTreeSet::new(),
            remaining_turns: MAX_TURNS,
            status: GameStatus::Active,
        })
    }

    /// Evaluates one guess by `player`.
    ///
    /// On rejection nothing about the game changes.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `letter` is not a single alphabetic character
    /// - `GameOver` if the game already ended
    /// - `LetterAlreadyGuessed` if the letter was played before
    #[instrument(skip(self), fields(game_id = self.id))]
    pub fn guess(&mut self, letter: &str, player: &str) -> Result<GuessOutcome, GameError> {
        let letter = parse_letter(letter)?;

        if !self.status.is_active() {
            warn!(%letter, "Guess on finished game");
            return Err(GameError::game_over(self.id));
        }

        if !self.guessed.insert(letter) {
            warn!(%letter, "Letter already guessed");
            return Err(GameError::already_guessed(letter));
        }

        let mut hits = 0;
        for (slot, target) in self.revealed.iter_mut().zip(&self.target) {
            if *target == letter {
                *slot = letter;
                hits += 1;
            }
        }

        let mut detail = vec![format!("{} correct letters found", hits)];

        if hits == 0 {
            self.remaining_turns = self.remaining_turns.saturating_sub(1);
            if self.remaining_turns == 0 {
                self.status = GameStatus::Lost;
                info!(game_id = self.id, "Game lost");
                detail.push(format!("You lose, Game {} over!", self.id));
            }
        }

        if self.status.is_active() && self.is_solved() {
            self.status = GameStatus::Won {
                winner: player.to_string(),
            };
            info!(game_id = self.id, winner = player, "Game won");
            detail.push(format!("{} is the winner of Game {}!", player, self.id));
        }

        debug!(
            %letter,
            hits,
            remaining_turns = self.remaining_turns,
            status = ?self.status,
            "Guess evaluated"
        );

        Ok(GuessOutcome::new(
            self.id,
            letter,
            hits,
            self.remaining_turns,
            self.status.is_active(),
            self.status.winner().map(str::to_string),
            self.revealed_word(),
            detail,
        ))
    }

    /// Returns a read-only copy of the public state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(
            self.id,
            self.status.winner().map(str::to_string),
            self.status.is_active(),
            self.remaining_turns,
            self.revealed_word(),
        )
    }

    /// Returns the game id.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Returns the lifecycle status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns true while guesses are accepted.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<&str> {
        self.status.winner()
    }

    /// Returns the turns left.
    pub fn remaining_turns(&self) -> u8 {
        self.remaining_turns
    }

    /// Returns the letters played so far, in alphabetical order.
    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// Returns the masked word as a string.
    pub fn revealed_word(&self) -> String {
        self.revealed.iter().collect()
    }

    /// Returns the number of letters in the hidden word.
    pub fn word_len(&self) -> usize {
        self.target.len()
    }

    /// Returns true once every position has been revealed.
    pub fn is_solved(&self) -> bool {
        self.revealed == self.target
    }
}
