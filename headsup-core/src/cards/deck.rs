use super::card::{Card, ALL_RANKS, ALL_SUITS};
use base64ct::{Base64, Encoding};
use rand::prelude::*;
use rand_chacha::ChaChaRng;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

const DECK_LEN: usize = ALL_SUITS.len() * ALL_RANKS.len();
const SEED_LEN: usize = 32;
const ENCODED_SEED_LEN: usize = 4 * ((SEED_LEN + 3 - 1) / 3); // 4 * ceil(SEED_LEN / 3)

#[derive(PartialEq, Debug)]
pub enum DeckError {
    Empty,
    SeedDecode(base64ct::Error),
}

impl Error for DeckError {}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Empty => write!(f, "No more cards in deck"),
            DeckError::SeedDecode(e) => write!(f, "{}", e),
        }
    }
}

impl From<base64ct::Error> for DeckError {
    fn from(e: base64ct::Error) -> Self {
        Self::SeedDecode(e)
    }
}

#[derive(Debug, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A full deck of 52 distinct cards in a fixed, unshuffled order.
    pub fn new() -> Self {
        use itertools::Itertools;
        let cards: Vec<Card> = ALL_SUITS
            .iter()
            .cartesian_product(ALL_RANKS.iter())
            .map(|x| Card::new(*x.1, *x.0))
            .collect();
        assert_eq!(cards.len(), DECK_LEN);
        Deck { cards }
    }

    /// A full deck already shuffled with the given seed.
    pub fn shuffled(seed: &DeckSeed) -> Self {
        let mut d = Self::new();
        d.seeded_shuffle(seed);
        d
    }

    /// Shuffle the deck in-place with a fresh random seed.
    pub fn shuffle(&mut self) {
        self.seeded_shuffle(&DeckSeed::default());
    }

    pub fn seeded_shuffle(&mut self, seed: &DeckSeed) {
        let mut rng = ChaChaRng::from_seed(seed.0);
        // For determinism given the same seed, the cards need to be in a known order before shuffling.
        self.cards.sort_unstable();
        self.cards.shuffle(&mut rng)
    }

    /// Remove the topmost card and return it, or an error if the deck has run out.
    pub fn deal_one(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckSeed([u8; SEED_LEN]);

impl DeckSeed {
    pub fn new(b: [u8; SEED_LEN]) -> Self {
        Self(b)
    }
}

impl Default for DeckSeed {
    fn default() -> Self {
        Self(super::fill_random())
    }
}

impl fmt::Display for DeckSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut b = [0u8; ENCODED_SEED_LEN];
        Base64::encode(&self.0, &mut b).unwrap();
        write!(f, "{}", String::from_utf8_lossy(&b))
    }
}

impl FromStr for DeckSeed {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut b: [u8; SEED_LEN] = [0; SEED_LEN];
        Base64::decode(s, &mut b)?;
        Ok(DeckSeed(b))
    }
}
