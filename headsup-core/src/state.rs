use crate::cards::{score_best_hand, Card, Deck, DeckSeed, Score};
use crate::log::HandEvent;
use crate::player::Player;
use crate::{GameError, SeatIdx, NUM_PLAYERS};
use core::cmp::Ordering;
use serde::{Deserialize, Serialize};

const COMMUNITY_SIZE: usize = 5;

/// States a hand can be in, from freshly shuffled to scored and over.
#[derive(Debug, PartialEq, Eq, Clone, Copy, derive_more::Display, Serialize, Deserialize)]
pub enum State {
    NotStarted,
    Street(Street),
    Complete,
}

impl Default for State {
    fn default() -> Self {
        Self::NotStarted
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, derive_more::Display, Serialize, Deserialize)]
pub enum Street {
    PreFlop,
    Flop,
    Turn,
    River,
}

/// What came out of a showdown: each seat's score, and who won. No winner
/// means the scores were exactly equal and the pot splits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowdownResult {
    pub scores: [Score; NUM_PLAYERS],
    pub winner: Option<SeatIdx>,
}

/// All the state for one hand, from shuffled deck to showdown. Build one
/// per hand and drop it when the hand is over; nothing is shared between
/// hands except whatever the caller keeps.
#[derive(Debug)]
pub struct HandState {
    /// The street we're on, or not started, or all over. Only change via change_state()
    __state_dont_change_directly: State,
    /// Both players, seat 0 and seat 1
    pub players: [Player; NUM_PLAYERS],
    /// The community cards
    pub community: [Option<Card>; COMMUNITY_SIZE],
    deck: Deck,
    events: Vec<HandEvent>,
}

impl HandState {
    pub fn new(players: [Player; NUM_PLAYERS]) -> Self {
        Self::with_seed(players, &DeckSeed::default())
    }

    pub fn with_seed(players: [Player; NUM_PLAYERS], seed: &DeckSeed) -> Self {
        Self {
            __state_dont_change_directly: State::default(),
            players,
            community: [None; COMMUNITY_SIZE],
            deck: Deck::shuffled(seed),
            events: vec![HandEvent::NewDeckSeed(seed.to_string())],
        }
    }

    pub const fn state(&self) -> State {
        self.__state_dont_change_directly
    }

    pub fn events(&self) -> &[HandEvent] {
        &self.events
    }

    /// The community cards dealt so far, in deal order.
    pub fn community_cards(&self) -> impl Iterator<Item = Card> {
        self.community.into_iter().flatten()
    }

    fn change_state(&mut self, new: State) {
        self.events.push(HandEvent::StateChange(self.state(), new));
        // this is the only place the state should ever be changed directly
        self.__state_dont_change_directly = new;
    }

    /// Deal two cards to each seat, both to seat 0 first, then both to
    /// seat 1.
    pub fn deal_hole_cards(&mut self) -> Result<(), GameError> {
        if self.state() != State::NotStarted {
            return Err(GameError::HoleCardsAlreadyDealt);
        }
        for seat in 0..NUM_PLAYERS {
            let pocket = [self.deck.deal_one()?, self.deck.deal_one()?];
            self.players[seat].pocket = Some(pocket);
            self.events.push(HandEvent::PocketDealt(seat, pocket));
        }
        self.change_state(State::Street(Street::PreFlop));
        Ok(())
    }

    /// Deal the first three community cards. No card is burned first.
    pub fn deal_flop(&mut self) -> Result<[Card; 3], GameError> {
        if self.state() != State::Street(Street::PreFlop) {
            return Err(GameError::StreetOutOfOrder);
        }
        let c1 = self.deck.deal_one()?;
        let c2 = self.deck.deal_one()?;
        let c3 = self.deck.deal_one()?;
        self.community[0] = Some(c1);
        self.community[1] = Some(c2);
        self.community[2] = Some(c3);
        self.events.push(HandEvent::Flop(c1, c2, c3));
        self.change_state(State::Street(Street::Flop));
        Ok([c1, c2, c3])
    }

    pub fn deal_turn(&mut self) -> Result<Card, GameError> {
        if self.state() != State::Street(Street::Flop) {
            return Err(GameError::StreetOutOfOrder);
        }
        let c = self.deck.deal_one()?;
        self.community[3] = Some(c);
        self.events.push(HandEvent::Turn(c));
        self.change_state(State::Street(Street::Turn));
        Ok(c)
    }

    pub fn deal_river(&mut self) -> Result<Card, GameError> {
        if self.state() != State::Street(Street::Turn) {
            return Err(GameError::StreetOutOfOrder);
        }
        let c = self.deck.deal_one()?;
        self.community[4] = Some(c);
        self.events.push(HandEvent::River(c));
        self.change_state(State::Street(Street::River));
        Ok(c)
    }

    /// Score both seats' best five card hands against the full board and
    /// declare a winner, or a tie if the scores are exactly equal.
    pub fn showdown(&mut self) -> Result<ShowdownResult, GameError> {
        if self.state() != State::Street(Street::River) {
            return Err(GameError::StreetOutOfOrder);
        }
        let board: Vec<Card> = self.community_cards().collect();
        let p0 = self.players[0].pocket.ok_or(GameError::HoleCardsNotDealt)?;
        let p1 = self.players[1].pocket.ok_or(GameError::HoleCardsNotDealt)?;
        let scores = [
            score_best_hand(&p0, &board)?,
            score_best_hand(&p1, &board)?,
        ];
        let winner = match scores[0].partial_cmp(&scores[1]) {
            Some(Ordering::Greater) => Some(0),
            Some(Ordering::Less) => Some(1),
            _ => None,
        };
        self.events.push(HandEvent::Showdown { winner });
        self.change_state(State::Complete);
        Ok(ShowdownResult { scores, winner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn test_players() -> [Player; NUM_PLAYERS] {
        [Player::new("Player 1", 1000), Player::new("Player 2", 1000)]
    }

    #[test]
    fn full_hand_runs_clean() {
        let seed = DeckSeed::new([7; 32]);
        let mut hand = HandState::with_seed(test_players(), &seed);
        assert_eq!(hand.state(), State::NotStarted);
        hand.deal_hole_cards().unwrap();
        assert_eq!(hand.state(), State::Street(Street::PreFlop));
        for p in &hand.players {
            assert!(p.pocket.is_some());
        }
        let flop = hand.deal_flop().unwrap();
        assert_eq!(hand.state(), State::Street(Street::Flop));
        assert_eq!(hand.community_cards().count(), 3);
        let turn = hand.deal_turn().unwrap();
        assert_eq!(hand.community_cards().count(), 4);
        let river = hand.deal_river().unwrap();
        assert_eq!(hand.community_cards().count(), 5);
        assert_eq!(hand.state(), State::Street(Street::River));
        let board: Vec<Card> = hand.community_cards().collect();
        assert_eq!(board[0], flop[0]);
        assert_eq!(board[1], flop[1]);
        assert_eq!(board[2], flop[2]);
        assert_eq!(board[3], turn);
        assert_eq!(board[4], river);
        // no card shows up twice anywhere in the hand
        let mut seen = HashSet::new();
        for c in hand
            .players
            .iter()
            .flat_map(|p| p.pocket.unwrap())
            .chain(hand.community_cards())
        {
            assert!(seen.insert(c));
        }
        assert_eq!(seen.len(), 9);
        let result = hand.showdown().unwrap();
        assert_eq!(hand.state(), State::Complete);
        // the result agrees with scoring the pockets by hand
        let s0 = score_best_hand(&hand.players[0].pocket.unwrap(), &board).unwrap();
        let s1 = score_best_hand(&hand.players[1].pocket.unwrap(), &board).unwrap();
        assert_eq!(result.scores[0], s0);
        assert_eq!(result.scores[1], s1);
        match result.winner {
            Some(0) => assert!(s0 > s1),
            Some(1) => assert!(s1 > s0),
            None => assert_eq!(s0, s1),
            Some(_) => unreachable!(),
        }
    }

    #[test]
    fn same_seed_same_hand() {
        let seed = DeckSeed::new([42; 32]);
        let mut h1 = HandState::with_seed(test_players(), &seed);
        let mut h2 = HandState::with_seed(test_players(), &seed);
        for h in [&mut h1, &mut h2] {
            h.deal_hole_cards().unwrap();
            h.deal_flop().unwrap();
            h.deal_turn().unwrap();
            h.deal_river().unwrap();
        }
        assert_eq!(h1.players[0].pocket, h2.players[0].pocket);
        assert_eq!(h1.players[1].pocket, h2.players[1].pocket);
        assert_eq!(h1.community, h2.community);
    }

    #[test]
    fn streets_must_come_in_order() {
        let mut hand = HandState::new(test_players());
        assert!(matches!(hand.deal_flop(), Err(GameError::StreetOutOfOrder)));
        assert!(matches!(hand.deal_turn(), Err(GameError::StreetOutOfOrder)));
        assert!(matches!(
            hand.deal_river(),
            Err(GameError::StreetOutOfOrder)
        ));
        assert!(matches!(hand.showdown(), Err(GameError::StreetOutOfOrder)));
        assert_eq!(hand.state(), State::NotStarted);
        hand.deal_hole_cards().unwrap();
        assert!(matches!(
            hand.deal_hole_cards(),
            Err(GameError::HoleCardsAlreadyDealt)
        ));
        assert!(matches!(hand.deal_turn(), Err(GameError::StreetOutOfOrder)));
        assert!(matches!(hand.showdown(), Err(GameError::StreetOutOfOrder)));
        hand.deal_flop().unwrap();
        assert!(matches!(hand.deal_flop(), Err(GameError::StreetOutOfOrder)));
        hand.deal_turn().unwrap();
        hand.deal_river().unwrap();
        assert!(hand.showdown().is_ok());
        // the hand is over; nothing more can happen to it
        assert!(matches!(hand.deal_flop(), Err(GameError::StreetOutOfOrder)));
        assert!(matches!(hand.showdown(), Err(GameError::StreetOutOfOrder)));
        assert!(matches!(
            hand.deal_hole_cards(),
            Err(GameError::HoleCardsAlreadyDealt)
        ));
        assert_eq!(hand.state(), State::Complete);
    }

    #[test]
    fn events_tell_the_hand_story() {
        let mut hand = HandState::new(test_players());
        assert!(matches!(hand.events()[0], HandEvent::NewDeckSeed(_)));
        hand.deal_hole_cards().unwrap();
        hand.deal_flop().unwrap();
        hand.deal_turn().unwrap();
        hand.deal_river().unwrap();
        let result = hand.showdown().unwrap();
        let events = hand.events();
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, HandEvent::PocketDealt(_, _)))
                .count(),
            NUM_PLAYERS
        );
        assert!(events.iter().any(|e| matches!(e, HandEvent::Flop(_, _, _))));
        assert!(events.iter().any(|e| matches!(e, HandEvent::Turn(_))));
        assert!(events.iter().any(|e| matches!(e, HandEvent::River(_))));
        assert!(events
            .iter()
            .any(|e| matches!(e, HandEvent::Showdown { winner } if *winner == result.winner)));
        assert!(matches!(
            events.last(),
            Some(HandEvent::StateChange(
                State::Street(Street::River),
                State::Complete
            ))
        ));
    }
}
