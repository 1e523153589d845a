use crate::cards::Card;
use crate::Currency;
use serde::{Deserialize, Serialize};

pub const POCKET_SIZE: usize = 2;

/// A player in the hand. The stack is carried along for whoever is running
/// the game to spend; nothing in here ever touches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub stack: Currency,
    pub pocket: Option<[Card; POCKET_SIZE]>,
}

impl Player {
    pub fn new(name: &str, stack: Currency) -> Self {
        Self {
            name: name.to_string(),
            stack,
            pocket: None,
        }
    }
}
