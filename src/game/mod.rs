//! Hold'em hand engine - street progression and showdown logic.
//!
//! This module provides the core hand implementation including:
//! - Card, deck, and player value types
//! - The linear street state machine (deal, flop, turn, river)
//! - Pure best-hand evaluation over all 5-card subsets
//! - Winner resolution with split-pot support

// Submodules
pub mod constants;
pub mod entities;
pub mod errors;
pub mod functional;
pub mod state_machine;

pub use errors::HandError;
pub use state_machine::{NoLimitHoldem, SeatIndex, Street};
