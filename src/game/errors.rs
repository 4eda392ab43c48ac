//! Errors surfaced by the hand engine.

use thiserror::Error;

use super::constants::{MAX_PLAYERS, MIN_PLAYERS};
use super::state_machine::Street;

/// Errors that can occur while constructing or progressing a hand.
///
/// Every precondition violation fails fast with its own variant so callers
/// can branch on cause. A rejected operation leaves the hand untouched.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HandError {
    #[error("a hand requires {MIN_PLAYERS} to {MAX_PLAYERS} players, got {got}")]
    InvalidHandSize { got: usize },
    #[error("can't {action} on the {street}")]
    InvalidAction {
        action: &'static str,
        street: Street,
    },
    #[error("the deck has no cards left")]
    DeckExhausted,
    #[error("invalid card format: {0:?}")]
    InvalidCardFormat(String),
}
