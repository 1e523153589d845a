use enum_map::Enum;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::str::FromStr;

pub const SPADE: char = 's';
pub const HEART: char = 'h';
pub const DIAMOND: char = 'd';
pub const CLUB: char = 'c';
pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

#[derive(PartialEq, Debug)]
pub enum CardError {
    InvalidRank(char),
    InvalidSuit(char),
    NotTwoChars(usize),
}

impl Error for CardError {}

impl std::fmt::Display for CardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRank(c) => write!(f, "'{}' is not a rank", c),
            Self::InvalidSuit(c) => write!(f, "'{}' is not a suit", c),
            Self::NotTwoChars(n) => write!(f, "A card is two characters, but {} were given", n),
        }
    }
}

#[derive(
    Hash, Enum, Clone, Copy, Debug, PartialEq, PartialOrd, Eq, Ord, Serialize, Deserialize,
)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Aces are always high. There is no context in which this returns 1.
    pub fn value(&self) -> u8 {
        use Rank::*;
        match *self {
            Two => 2,
            Three => 3,
            Four => 4,
            Five => 5,
            Six => 6,
            Seven => 7,
            Eight => 8,
            Nine => 9,
            Ten => 10,
            Jack => 11,
            Queen => 12,
            King => 13,
            Ace => 14,
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Two => write!(f, "2"),
            Self::Three => write!(f, "3"),
            Self::Four => write!(f, "4"),
            Self::Five => write!(f, "5"),
            Self::Six => write!(f, "6"),
            Self::Seven => write!(f, "7"),
            Self::Eight => write!(f, "8"),
            Self::Nine => write!(f, "9"),
            Self::Ten => write!(f, "T"),
            Self::Jack => write!(f, "J"),
            Self::Queen => write!(f, "Q"),
            Self::King => write!(f, "K"),
            Self::Ace => write!(f, "A"),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(CardError::InvalidRank(c)),
        }
    }
}

#[derive(
    Hash, Enum, Clone, Copy, Debug, PartialEq, PartialOrd, Eq, Ord, Serialize, Deserialize,
)]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Club => write!(f, "{}", CLUB),
            Self::Diamond => write!(f, "{}", DIAMOND),
            Self::Heart => write!(f, "{}", HEART),
            Self::Spade => write!(f, "{}", SPADE),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            CLUB => Ok(Self::Club),
            DIAMOND => Ok(Self::Diamond),
            HEART => Ok(Self::Heart),
            SPADE => Ok(Self::Spade),
            _ => Err(CardError::InvalidSuit(c)),
        }
    }
}

/// Rank is declared first so the derived order considers it before suit.
/// Suit only ever breaks ties between cards that play identically.
#[derive(Hash, Clone, Copy, Debug, PartialEq, PartialOrd, Eq, Ord, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut i = s.chars();
        match (i.next(), i.next(), i.next()) {
            (Some(r), Some(su), None) => Ok(Card::new(r.try_into()?, su.try_into()?)),
            _ => Err(CardError::NotTwoChars(s.chars().count())),
        }
    }
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }
}

#[cfg(test)]
pub(crate) fn cards_from_str(s: &str) -> Vec<Card> {
    let mut v = vec![];
    let mut i = s.chars();
    while let Some(r) = i.next() {
        let su = i.next().expect("need an even number of chars");
        v.push(Card::new(
            r.try_into().expect("bad rank char"),
            su.try_into().expect("bad suit char"),
        ));
    }
    v
}
