mod game;
mod types;

pub use game::{Game, normalize_word, parse_letter};
pub use types::{
    GameId, GameSnapshot, GameStatus, GuessOutcome, MAX_TURNS, NO_WINNER, PLACEHOLDER,
    render_table,
};
