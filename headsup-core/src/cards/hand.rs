use super::card::{Card, Rank};
use enum_map::EnumMap;
use serde::{Deserialize, Serialize};

/// The nine kinds of five card hand, declared weakest to strongest so the
/// derived order is the poker order.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl std::fmt::Display for HandCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HighCard => write!(f, "high card"),
            Self::Pair => write!(f, "a pair"),
            Self::TwoPair => write!(f, "two pair"),
            Self::ThreeOfAKind => write!(f, "three of a kind"),
            Self::Straight => write!(f, "a straight"),
            Self::Flush => write!(f, "a flush"),
            Self::FullHouse => write!(f, "a full house"),
            Self::FourOfAKind => write!(f, "four of a kind"),
            Self::StraightFlush => write!(f, "a straight flush"),
        }
    }
}

impl HandCategory {
    pub const fn strength(self) -> u8 {
        self as u8
    }

    /// Classify five cards that are already sorted descending by rank.
    ///
    /// It's important that the order of these checks is maintained from
    /// best hand to worst hand. Each check only verifies the hand can be
    /// considered that category, not that the category is the best fit.
    /// For example is_straight() doesn't check whether the hand is also a
    /// flush, so is_straight_flush() must come first.
    pub fn which(cards: &[Card; 5]) -> Self {
        debug_assert!(cards.windows(2).all(|w| w[0].rank >= w[1].rank));
        if is_straight_flush(cards) {
            Self::StraightFlush
        } else if is_four_of_a_kind(cards) {
            Self::FourOfAKind
        } else if is_full_house(cards) {
            Self::FullHouse
        } else if is_flush(cards) {
            Self::Flush
        } else if is_straight(cards) {
            Self::Straight
        } else if is_three_of_a_kind(cards) {
            Self::ThreeOfAKind
        } else if is_two_pair(cards) {
            Self::TwoPair
        } else if is_pair(cards) {
            Self::Pair
        } else {
            Self::HighCard
        }
    }
}

/// How many times each rank appears in the hand.
fn rank_counts(cards: &[Card; 5]) -> EnumMap<Rank, usize> {
    let mut counts: EnumMap<Rank, usize> = EnumMap::from_array([0usize; 13]);
    for c in cards {
        counts[c.rank] += 1;
    }
    counts
}

/// Five cards of consecutive rank, highest first. Aces never play low:
/// A5432 is not a straight.
pub fn is_straight(cards: &[Card; 5]) -> bool {
    cards
        .windows(2)
        .all(|w| w[0].rank.value() == w[1].rank.value() + 1)
}

pub fn is_flush(cards: &[Card; 5]) -> bool {
    cards.iter().all(|c| c.suit == cards[0].suit)
}

pub fn is_straight_flush(cards: &[Card; 5]) -> bool {
    is_straight(cards) && is_flush(cards)
}

pub fn is_four_of_a_kind(cards: &[Card; 5]) -> bool {
    rank_counts(cards).into_iter().any(|(_, n)| n == 4)
}

/// Two distinct ranks where one of them appears three times. The other
/// necessarily appears twice.
pub fn is_full_house(cards: &[Card; 5]) -> bool {
    let mut distinct = 0;
    let mut trips = false;
    for (_, n) in rank_counts(cards) {
        if n > 0 {
            distinct += 1;
        }
        if n == 3 {
            trips = true;
        }
    }
    distinct == 2 && trips
}

pub fn is_three_of_a_kind(cards: &[Card; 5]) -> bool {
    rank_counts(cards).into_iter().any(|(_, n)| n == 3)
}

pub fn is_two_pair(cards: &[Card; 5]) -> bool {
    rank_counts(cards)
        .into_iter()
        .filter(|(_, n)| *n == 2)
        .count()
        == 2
}

pub fn is_pair(cards: &[Card; 5]) -> bool {
    rank_counts(cards).into_iter().any(|(_, n)| n == 2)
}
