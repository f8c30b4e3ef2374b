//! Word sources for new games.

use crate::games::hangman::normalize_word;
use derive_more::{Display, Error};
use rand::seq::SliceRandom;
use std::path::Path;
use std::sync::Mutex;
use std::sync::PoisonError;
use tracing::{debug, info, instrument};

/// Supplies target words for new games.
pub trait WordSource: Send + Sync {
    /// Returns the next word.
    ///
    /// # Errors
    ///
    /// Returns a [`WordListError`] if no word can be produced.
    fn next_word(&self) -> Result<String, WordListError>;
}

/// Words used when no list is configured.
const DEFAULT_WORDS: &[&str] = &[
    "abruptly", "absurd", "abyss", "affix", "askew", "avenue", "awkward", "axiom", "bagpipes",
    "bandwagon", "banjo", "beekeeper", "blizzard", "boggle", "bookworm", "boxcar", "buffalo",
    "buzzard", "cobweb", "crypt", "curacao", "cycle", "dizzying", "duplex", "dwarves", "embezzle",
    "equip", "espionage", "exodus", "faking", "fishhook", "fjord", "flapjack", "fluffiness",
    "frazzled", "funny", "galaxy", "gazebo", "glowworm", "gossip", "grogginess", "haiku",
    "haphazard", "hyphen", "icebox", "injury", "ivory", "jackpot", "jawbreaker", "jigsaw",
    "jinx", "jovial", "joyful", "jukebox", "jumbo", "kayak", "keyhole", "kiwifruit", "knapsack",
    "larynx", "lengths", "lucky", "luxury", "marquee", "matrix", "megahertz", "microwave",
    "mystify", "nightclub", "nowadays", "oxygen", "pajama", "peekaboo", "pixel", "pneumonia",
    "puzzling", "quartz", "queue", "quiz", "rhythm", "rickshaw", "scratch", "shiv", "sphinx",
    "squawk", "strength", "stronghold", "subway", "swivel", "syndrome", "thumbscrew", "topaz",
    "transcript", "twelfth", "unknown", "unzip", "vaporize", "vodka", "voodoo", "vortex",
    "walkway", "waltz", "wave", "wavy", "whiskey", "whizzing", "witchcraft", "wizard", "woozy",
    "wristwatch", "yachtsman", "yippee", "youthful", "zephyr", "zigzag", "zipper", "zodiac",
    "zombie",
];

/// Picks words uniformly at random from a list.
#[derive(Debug, Clone)]
pub struct RandomWords {
    words: Vec<String>,
}

impl RandomWords {
    /// Creates a source over the built-in list.
    #[instrument]
    pub fn builtin() -> Self {
        debug!(count = DEFAULT_WORDS.len(), "Using built-in word list");
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Creates a source over `words`.
    ///
    /// # Errors
    ///
    /// Returns a [`WordListError`] if the list is empty or any entry is not
    /// a playable word once normalised.
    #[instrument(skip(words))]
    pub fn new(words: Vec<String>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::new("Word list is empty"));
        }

        let words = words
            .into_iter()
            .map(|w| {
                normalize_word(&w)
                    .ok_or_else(|| WordListError::new(format!("Invalid word in list: {:?}", w)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { words })
    }

    /// Loads a newline-separated list from `path`.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    ///
    /// Returns a [`WordListError`] if the file cannot be read or the list is
    /// invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| WordListError::new(format!("Failed to read word list: {}", e)))?;

        let words: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        let source = Self::new(words)?;
        info!(count = source.len(), "Word list loaded");
        Ok(source)
    }

    /// Returns the number of candidate words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if there are no candidate words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for RandomWords {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WordSource for RandomWords {
    fn next_word(&self) -> Result<String, WordListError> {
        self.words
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| WordListError::new("Word list is empty"))
    }
}

/// Returns words from a fixed sequence, cycling when exhausted.
///
/// Useful wherever game creation must be reproducible.
#[derive(Debug)]
pub struct ScriptedWords {
    words: Vec<String>,
    next: Mutex<usize>,
}

impl ScriptedWords {
    /// Creates a source that yields `words` in order.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            next: Mutex::new(0),
        }
    }
}

impl WordSource for ScriptedWords {
    fn next_word(&self) -> Result<String, WordListError> {
        if self.words.is_empty() {
            return Err(WordListError::new("Scripted word list is empty"));
        }
        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
        let word = self.words[*next % self.words.len()].clone();
        *next += 1;
        Ok(word)
    }
}

/// Word source error.
#[derive(Debug, Clone, Display, Error)]
#[display("Word list error: {} at {}:{}", message, file, line)]
pub struct WordListError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WordListError {
    /// Creates a new word list error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
