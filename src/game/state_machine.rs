//! The hand-progression state machine.
//!
//! A [`NoLimitHoldem`] hand walks a strictly linear sequence of streets:
//! hole cards, flop, turn, river. Every transition is only legal from
//! its exact predecessor; out-of-order or repeated calls fail with
//! [`HandError::InvalidAction`] and leave the hand untouched.

use log::debug;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

use super::constants::{
    BOARD_SIZE, FLOP_SIZE, HOLE_CARDS_PER_PLAYER, MAX_PLAYERS, MIN_PLAYERS,
};
use super::entities::{Card, Deck, HandValue, Player};
use super::errors::HandError;
use super::functional;

/// The streets of a hand, in play order.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Street {
    NotDealt,
    Preflop,
    Flop,
    Turn,
    River,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::NotDealt => "predeal",
            Self::Preflop => "preflop",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::River => "river",
        };
        write!(f, "{repr}")
    }
}

/// Type alias for seat positions during the hand.
pub type SeatIndex = usize;

/// A single hand of no-limit Texas hold'em.
///
/// Owns its players, a shuffled deck, and the board. Progress the hand
/// with [`deal`](Self::deal), [`flop`](Self::flop), [`turn`](Self::turn),
/// and [`river`](Self::river); once the river is out,
/// [`winners`](Self::winners) is a pure query over the final state.
#[derive(Debug)]
pub struct NoLimitHoldem {
    deck: Deck,
    players: Vec<Player>,
    board: Vec<Card>,
    street: Street,
}

impl NoLimitHoldem {
    /// Start a hand with the given seats. Between 2 and 10 players fit
    /// at the table; anything else fails with
    /// [`HandError::InvalidHandSize`].
    pub fn new(players: Vec<Player>) -> Result<Self, HandError> {
        let got = players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&got) {
            return Err(HandError::InvalidHandSize { got });
        }
        let mut deck = Deck::default();
        deck.shuffle();
        Ok(Self {
            deck,
            players,
            board: Vec::with_capacity(BOARD_SIZE),
            street: Street::NotDealt,
        })
    }

    fn expect_street(&self, action: &'static str, expected: Street) -> Result<(), HandError> {
        if self.street == expected {
            Ok(())
        } else {
            Err(HandError::InvalidAction {
                action,
                street: self.street,
            })
        }
    }

    /// Deal 2 hole cards to every player: one card to each seat in
    /// order, then one more, matching live dealing order.
    pub fn deal(&mut self) -> Result<(), HandError> {
        self.expect_street("deal", Street::NotDealt)?;
        for _ in 0..HOLE_CARDS_PER_PLAYER {
            for player in &mut self.players {
                let card = self.deck.draw()?;
                player.receive(card);
            }
        }
        self.street = Street::Preflop;
        debug!("dealt hole cards to {} players", self.players.len());
        Ok(())
    }

    /// Deal the first 3 community cards.
    pub fn flop(&mut self) -> Result<(), HandError> {
        self.expect_street("flop", Street::Preflop)?;
        for _ in 0..FLOP_SIZE {
            let card = self.deck.draw()?;
            self.board.push(card);
        }
        self.street = Street::Flop;
        debug!("flop: {}", self.board_repr());
        Ok(())
    }

    /// Deal the 4th community card.
    pub fn turn(&mut self) -> Result<(), HandError> {
        self.expect_street("turn", Street::Flop)?;
        let card = self.deck.draw()?;
        self.board.push(card);
        self.street = Street::Turn;
        debug!("turn: {}", self.board_repr());
        Ok(())
    }

    /// Deal the 5th and final community card.
    pub fn river(&mut self) -> Result<(), HandError> {
        self.expect_street("river", Street::Turn)?;
        let card = self.deck.draw()?;
        self.board.push(card);
        self.street = Street::River;
        debug!("river: {}", self.board_repr());
        Ok(())
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Community cards dealt so far, in deal order.
    #[must_use]
    pub fn community_cards(&self) -> &[Card] {
        &self.board
    }

    #[must_use]
    pub fn street(&self) -> Street {
        self.street
    }

    /// Every player whose best 5-card hand ties the table maximum,
    /// keyed by original seating index. More than one entry means a
    /// split pot. Fails with [`HandError::InvalidAction`] until all 5
    /// community cards are out.
    pub fn winners(&self) -> Result<BTreeMap<SeatIndex, Player>, HandError> {
        if self.board.len() != BOARD_SIZE {
            return Err(HandError::InvalidAction {
                action: "pick winners",
                street: self.street,
            });
        }
        let values: Vec<HandValue> = self
            .players
            .iter()
            .map(|player| {
                let mut cards = player.hole_cards().to_vec();
                cards.extend_from_slice(&self.board);
                functional::eval(&cards)
            })
            .collect();
        let winners = functional::argmax(&values)
            .into_iter()
            .map(|seat_idx| (seat_idx, self.players[seat_idx].clone()))
            .collect();
        Ok(winners)
    }

    fn board_repr(&self) -> String {
        self.board
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
impl NoLimitHoldem {
    /// Test-only fixture that injects the board and per-player hole
    /// cards directly, bypassing the deck, so showdowns are
    /// reproducible. Cards use the short form (`"Ah"`, `"Tc"`).
    fn fixture(board: &[&str], hole_cards: &[[&str; 2]]) -> Self {
        let players = hole_cards
            .iter()
            .map(|cards| {
                let mut player = Player::new();
                for card in cards {
                    player.receive(card.parse().unwrap());
                }
                player
            })
            .collect();
        let board: Vec<Card> = board.iter().map(|card| card.parse().unwrap()).collect();
        let street = match board.len() {
            0 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        };
        Self {
            deck: Deck::default(),
            players,
            board,
            street,
        }
    }
}
