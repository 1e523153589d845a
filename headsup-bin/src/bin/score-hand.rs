use std::error::Error;

use headsup_core::cards::Card;
use headsup_core::score::score_best_hand;
use itertools::Itertools;
use structopt::StructOpt;

#[derive(StructOpt)]
struct Opt {
    #[structopt(help = "Two pocket cards, e.g. AsKd")]
    pocket: String,
    #[structopt(help = "Three to five community cards, e.g. QsJsTs")]
    board: String,
}

/// Turn a string like "AsKd" into cards, two characters per card.
fn parse_cards(s: &str) -> Result<Vec<Card>, Box<dyn Error>> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(format!("Can't split '{}' into two-character cards", s).into());
    }
    let mut cards = Vec::with_capacity(chars.len() / 2);
    for pair in chars.chunks(2) {
        cards.push(Card::new(pair[0].try_into()?, pair[1].try_into()?));
    }
    Ok(cards)
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    let pocket = parse_cards(&opt.pocket)?;
    if pocket.len() != 2 {
        return Err(format!("Expected 2 pocket cards, got {}", pocket.len()).into());
    }
    let board = parse_cards(&opt.board)?;
    if board.len() > 5 {
        return Err(format!("Expected at most 5 community cards, got {}", board.len()).into());
    }
    let score = score_best_hand(&[pocket[0], pocket[1]], &board)?;
    println!(
        "{}{} + {} makes {}",
        pocket[0],
        pocket[1],
        board.iter().join(""),
        score.category()
    );
    println!("Score: {}", score);
    Ok(())
}
