use std::error::Error;

use headsup_core::{deck::DeckSeed, player::Player, state::HandState, Currency, NUM_PLAYERS};
use itertools::Itertools;
use structopt::StructOpt;

#[derive(StructOpt)]
struct Opt {
    #[structopt(long, default_value)]
    seed: DeckSeed,
    #[structopt(long, default_value = "1", help = "How many hands to deal")]
    hands: usize,
    #[structopt(long, default_value = "1000")]
    start_stack: Currency,
    #[structopt(long, help = "Dump the hand's full event log after the showdown")]
    show_log: bool,
}

/// Run a single hand from shuffle to showdown, narrating it to stdout.
fn single_hand(
    seed: &DeckSeed,
    start_stack: Currency,
    hand_num: usize,
    show_log: bool,
) -> Result<(), Box<dyn Error>> {
    let players = [
        Player::new("Player 1", start_stack),
        Player::new("Player 2", start_stack),
    ];
    let mut hand = HandState::with_seed(players, seed);
    println!("--- Begin hand {:2} ---", hand_num);
    println!("DeckSeed: {}", seed);
    hand.deal_hole_cards()?;
    for p in &hand.players {
        let pocket = match p.pocket {
            None => unreachable!(),
            Some(p) => p,
        };
        println!("{} hand: {}, {}", p.name, pocket[0], pocket[1]);
    }
    hand.deal_flop()?;
    println!(
        "The table after the flop is: {}",
        hand.community_cards().join(", ")
    );
    hand.deal_turn()?;
    println!(
        "The table after the turn is: {}",
        hand.community_cards().join(", ")
    );
    hand.deal_river()?;
    println!(
        "The table after the river is: {}",
        hand.community_cards().join(", ")
    );
    let result = hand.showdown()?;
    match result.winner {
        Some(seat) => {
            println!("{} wins!", hand.players[seat].name);
            println!(
                "Score: {} vs. {}",
                result.scores[seat],
                result.scores[1 - seat]
            );
        }
        None => {
            println!("It's a tie!");
            println!("Score: {} vs. {}", result.scores[0], result.scores[1]);
        }
    }
    if show_log {
        for event in hand.events() {
            println!("  {}", event);
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    println!(
        "{} players seated with {} each",
        NUM_PLAYERS, opt.start_stack
    );
    for n in 1..opt.hands + 1 {
        // Only the first hand takes the given seed, else every hand would
        // come out identical.
        let seed = if n == 1 { opt.seed } else { DeckSeed::default() };
        single_hand(&seed, opt.start_stack, n, opt.show_log)?;
    }
    Ok(())
}
