//! # Holdem
//!
//! A single-hand no-limit Texas hold'em engine.
//!
//! This library deals a hand through its streets and decides the winner(s)
//! at showdown. The hand is a strictly linear state machine - hole cards,
//! flop, turn, river - and every out-of-order action fails with a
//! distinguishable error. Hand strength is evaluated by ranking the best
//! 5-card combination out of each player's 7 available cards, with full
//! kicker comparison and split-pot detection.
//!
//! ## Core Modules
//!
//! - [`game::entities`]: cards, the deck, players, and hand strength values
//! - [`game::functional`]: pure hand-evaluation functions
//! - [`game::state_machine`]: the [`NoLimitHoldem`] hand itself
//!
//! ## Example
//!
//! ```
//! use holdem::{NoLimitHoldem, Player};
//!
//! let players = (0..4).map(|_| Player::new()).collect();
//! let mut hand = NoLimitHoldem::new(players)?;
//! hand.deal()?;
//! hand.flop()?;
//! hand.turn()?;
//! hand.river()?;
//! let winners = hand.winners()?;
//! assert!(!winners.is_empty());
//! # Ok::<(), holdem::HandError>(())
//! ```

/// Core hand logic, entities, and state machine.
pub mod game;
pub use game::{
    HandError, NoLimitHoldem, SeatIndex, Street,
    constants::{self, BOARD_SIZE, MAX_PLAYERS, MIN_PLAYERS},
    entities::{self, Card, Deck, HandValue, Player, Rank, Suit, Value},
    functional,
};
