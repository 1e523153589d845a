pub mod cards;
pub mod log;
pub mod player;
pub mod state;

pub use cards::{card, deck, hand, score};

use cards::deck::DeckError;
use cards::score::ScoreError;

pub const NUM_PLAYERS: usize = 2;
pub type Currency = i32;
pub type SeatIdx = usize;

#[derive(Debug, derive_more::Display)]
pub enum GameError {
    DeckError(DeckError),
    ScoreError(ScoreError),
    HoleCardsAlreadyDealt,
    HoleCardsNotDealt,
    StreetOutOfOrder,
}

impl std::error::Error for GameError {}

impl From<DeckError> for GameError {
    fn from(d: DeckError) -> Self {
        GameError::DeckError(d)
    }
}

impl From<ScoreError> for GameError {
    fn from(d: ScoreError) -> Self {
        GameError::ScoreError(d)
    }
}
