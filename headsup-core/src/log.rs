use crate::cards::Card;
use crate::state::State;
use crate::SeatIdx;
use serde::{Deserialize, Serialize};

/// Everything notable that happens during a hand, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandEvent {
    NewDeckSeed(String),
    StateChange(State, State),
    PocketDealt(SeatIdx, [Card; 2]),
    Flop(Card, Card, Card),
    Turn(Card),
    River(Card),
    Showdown { winner: Option<SeatIdx> },
}

impl std::fmt::Display for HandEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandEvent::NewDeckSeed(s) => write!(f, "Deck seeded with {s}"),
            HandEvent::StateChange(old, new) => write!(f, "State changed from {old} to {new}"),
            HandEvent::PocketDealt(seat, pocket) => {
                write!(f, "Seat {seat} dealt {}{}", pocket[0], pocket[1])
            }
            HandEvent::Flop(c1, c2, c3) => write!(f, "Flop: {c1} {c2} {c3}"),
            HandEvent::Turn(c) => write!(f, "Turn: {c}"),
            HandEvent::River(c) => write!(f, "River: {c}"),
            HandEvent::Showdown { winner } => match winner {
                None => write!(f, "Showdown: hands are tied"),
                Some(seat) => write!(f, "Showdown: seat {seat} wins"),
            },
        }
    }
}
