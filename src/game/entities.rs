use rand::{rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::constants::DECK_SIZE;
use super::errors::HandError;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Suit {
    Club,
    Spade,
    Diamond,
    Heart,
}

impl Suit {
    pub const ALL: [Self; 4] = [Self::Club, Self::Spade, Self::Diamond, Self::Heart];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Club => "♣",
            Self::Spade => "♠",
            Self::Diamond => "♦",
            Self::Heart => "♥",
        };
        write!(f, "{repr}")
    }
}

/// Placeholder for card values.
pub type Value = u8;

/// Lowest card value, the deuce.
pub const MIN_VALUE: Value = 2;
/// Highest card value, the ace. Aces only count low inside a wheel
/// straight, which the evaluator handles on its own.
pub const MAX_VALUE: Value = 14;

/// A card is a tuple of a uInt8 value (deuce=2u8 ... ace=14u8)
/// and a suit.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Card(pub Value, pub Suit);

impl Card {
    #[must_use]
    pub fn value(&self) -> Value {
        self.0
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.1
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = match self.0 {
            14 => "A",
            13 => "K",
            12 => "Q",
            11 => "J",
            10 => "T",
            v => &v.to_string(),
        };
        write!(f, "{value}{}", self.1)
    }
}

/// Cards parse from the conventional short form: a value character
/// (`2`-`9`, `T`, `J`, `Q`, `K`, `A`) followed by a suit character
/// (`c`, `s`, `d`, `h`). `"Ah"` is the ace of hearts, `"Tc"` the
/// ten of clubs.
impl FromStr for Card {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || HandError::InvalidCardFormat(s.to_string());
        let mut chars = s.chars();
        let (value_char, suit_char) = match (chars.next(), chars.next(), chars.next()) {
            (Some(value), Some(suit), None) => (value, suit),
            _ => return Err(malformed()),
        };
        let value = match value_char {
            'A' => 14,
            'K' => 13,
            'Q' => 12,
            'J' => 11,
            'T' => 10,
            '2'..='9' => value_char as Value - b'0',
            _ => return Err(malformed()),
        };
        let suit = match suit_char {
            'c' => Suit::Club,
            's' => Suit::Spade,
            'd' => Suit::Diamond,
            'h' => Suit::Heart,
            _ => return Err(malformed()),
        };
        Ok(Self(value, suit))
    }
}

/// A standard 52-card deck. Drawn cards stay in the array; `deck_idx`
/// marks how far into the current shuffle we've drawn, so no card can
/// come out twice between shuffles.
#[derive(Debug)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    deck_idx: usize,
}

impl Deck {
    /// Remove and return the next card, failing once the deck runs dry.
    pub fn draw(&mut self) -> Result<Card, HandError> {
        if self.deck_idx >= DECK_SIZE {
            return Err(HandError::DeckExhausted);
        }
        let card = self.cards[self.deck_idx];
        self.deck_idx += 1;
        Ok(card)
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        DECK_SIZE - self.deck_idx
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut rng());
        self.deck_idx = 0;
    }
}

impl Default for Deck {
    fn default() -> Self {
        let mut cards = [Card(MIN_VALUE, Suit::Club); DECK_SIZE];
        for (i, value) in (MIN_VALUE..=MAX_VALUE).enumerate() {
            for (j, suit) in Suit::ALL.into_iter().enumerate() {
                cards[4 * i + j] = Card(value, suit);
            }
        }
        Self { cards, deck_idx: 0 }
    }
}

/// A seat at the table. Holds no hole cards until the hand is dealt,
/// exactly two afterwards; only the deal step hands out cards.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Player {
    cards: Vec<Card>,
}

impl Player {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(2),
        }
    }

    #[must_use]
    pub fn hole_cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn hole_card_count(&self) -> usize {
        self.cards.len()
    }

    pub(crate) fn receive(&mut self, card: Card) {
        self.cards.push(card);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .cards
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "[{repr}]")
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Rank {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::HighCard => "high card",
            Self::OnePair => "one pair",
            Self::TwoPair => "two pair",
            Self::ThreeOfAKind => "three of a kind",
            Self::Straight => "straight",
            Self::Flush => "flush",
            Self::FullHouse => "full house",
            Self::FourOfAKind => "four of a kind",
            Self::StraightFlush => "straight flush",
        };
        write!(f, "{repr}")
    }
}

/// The strength of a best 5-card combination: a category, then the run
/// of card values that breaks ties within the category (the pair's
/// value and then kickers descending, all 5 values for flushes and
/// high cards, just the high card for straights).
///
/// The derived `Ord` compares category first and the tie-break run
/// lexicographically second, which is exactly showdown order. Hands of
/// the same category always carry tie-break runs of the same length.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct HandValue {
    pub rank: Rank,
    pub tiebreak: Vec<Value>,
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self
            .tiebreak
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{} ({values})", self.rank)
    }
}
