use rand::Fill;

pub mod card;
pub mod deck;
pub mod hand;
pub mod score;

pub use card::Card;
pub use deck::{Deck, DeckSeed};
pub use hand::HandCategory;
pub use score::{best_score, score_best_hand, Score};

fn fill_random<const L: usize>() -> [u8; L] {
    let mut r = rand::thread_rng();
    let mut s: [u8; L] = [0; L];
    s.try_fill(&mut r)
        .expect("Failed to generate random numbers");
    s
}
