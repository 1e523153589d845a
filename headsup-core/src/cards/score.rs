use super::card::Card;
use super::hand::HandCategory;
use itertools::Itertools;
use std::error::Error;
use std::fmt;

pub const HAND_SIZE: usize = 5;
const KICKER_BASE: f64 = 100.0;

#[derive(PartialEq, Debug)]
pub enum ScoreError {
    InsufficientCards(usize),
}

impl Error for ScoreError {}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::InsufficientCards(n) => write!(
                f,
                "Scoring needs at least {} cards, but {} were given",
                HAND_SIZE, n
            ),
        }
    }
}

/// The strength of a hand as a single comparable number.
///
/// The integer part is the category (0 for high card up to 8 for a straight
/// flush) and the fraction packs the five ranks, highest first, two decimal
/// digits per card. Rank values never exceed 14, so no position can bleed
/// into its neighbor and the whole fraction stays below 1. Comparing two
/// scores is exactly comparing two hands.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn category(self) -> HandCategory {
        match self.0 as u8 {
            0 => HandCategory::HighCard,
            1 => HandCategory::Pair,
            2 => HandCategory::TwoPair,
            3 => HandCategory::ThreeOfAKind,
            4 => HandCategory::Straight,
            5 => HandCategory::Flush,
            6 => HandCategory::FullHouse,
            7 => HandCategory::FourOfAKind,
            _ => HandCategory::StraightFlush,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Score exactly five cards, in any order.
pub fn score_five(cards: [Card; HAND_SIZE]) -> Score {
    let mut cards = cards;
    cards.sort_unstable();
    cards.reverse();
    let mut score = f64::from(HandCategory::which(&cards).strength());
    let mut place = 1.0;
    for c in &cards {
        place *= KICKER_BASE;
        score += f64::from(c.rank.value()) / place;
    }
    Score(score)
}

/// The best score any five of the given cards can make. Checks every five
/// card combination, so the input order never matters.
pub fn best_score(cards: &[Card]) -> Result<Score, ScoreError> {
    if cards.len() < HAND_SIZE {
        return Err(ScoreError::InsufficientCards(cards.len()));
    }
    let best = cards
        .iter()
        .copied()
        .combinations(HAND_SIZE)
        .map(|c| score_five([c[0], c[1], c[2], c[3], c[4]]).value())
        .fold(f64::NEG_INFINITY, f64::max);
    Ok(Score(best))
}

/// Score the best hand a player can make from their pocket plus whatever
/// community cards are out. Fails before the flop, when only five total
/// cards exist at the earliest.
pub fn score_best_hand(pocket: &[Card; 2], community: &[Card]) -> Result<Score, ScoreError> {
    let mut cards = Vec::with_capacity(pocket.len() + community.len());
    cards.extend_from_slice(pocket);
    cards.extend_from_slice(community);
    best_score(&cards)
}
