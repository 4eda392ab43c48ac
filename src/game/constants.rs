//! Table-size and card-count constants for no-limit hold'em.

/// Fewest players a hand can be dealt with.
pub const MIN_PLAYERS: usize = 2;
/// A full ring.
pub const MAX_PLAYERS: usize = 10;

/// Hole cards per player in this game variant.
pub const HOLE_CARDS_PER_PLAYER: usize = 2;
/// Community cards on a complete board.
pub const BOARD_SIZE: usize = 5;
/// Community cards dealt on the flop.
pub const FLOP_SIZE: usize = 3;

/// Cards in a standard deck.
pub const DECK_SIZE: usize = 52;
/// Cards in an evaluated poker hand.
pub const HAND_SIZE: usize = 5;
