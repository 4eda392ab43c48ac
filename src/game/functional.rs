//! Pure functions for ranking poker hands.
//!
//! Evaluation is deterministic and order-independent: the same cards
//! always produce the same [`HandValue`], whatever order they arrive in.

use super::constants::HAND_SIZE;
use super::entities::{Card, HandValue, Rank, Value};

/// Classify exactly 5 cards into a [`HandValue`].
///
/// Works from the value-frequency groups (pairs, trips, quads), a suit
/// check for flushes, and straight detection over the sorted distinct
/// values, counting the ace low in the wheel (A-2-3-4-5 is a 5-high
/// straight, not ace-high).
#[must_use]
pub fn eval_five(cards: &[Card]) -> HandValue {
    debug_assert_eq!(cards.len(), HAND_SIZE);

    let mut values: Vec<Value> = cards.iter().map(Card::value).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    // Multiplicity groups, ordered by count and then value descending,
    // so groups[0] is always the decisive group of the hand.
    let mut groups: Vec<(u8, Value)> = Vec::with_capacity(HAND_SIZE);
    for &value in &values {
        match groups.iter_mut().find(|(_, v)| *v == value) {
            Some((count, _)) => *count += 1,
            None => groups.push((1, value)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|card| card.suit() == cards[0].suit());
    let straight = straight_high(&values, groups.len());

    let (rank, tiebreak) = match (straight, flush, groups.as_slice()) {
        (Some(high), true, _) => (Rank::StraightFlush, vec![high]),
        (_, _, [(4, quad), (1, kicker)]) => (Rank::FourOfAKind, vec![*quad, *kicker]),
        (_, _, [(3, trip), (2, pair)]) => (Rank::FullHouse, vec![*trip, *pair]),
        (None, true, _) => (Rank::Flush, values),
        (Some(high), false, _) => (Rank::Straight, vec![high]),
        (_, _, [(3, trip), (1, k1), (1, k2)]) => (Rank::ThreeOfAKind, vec![*trip, *k1, *k2]),
        (_, _, [(2, high), (2, low), (1, kicker)]) => (Rank::TwoPair, vec![*high, *low, *kicker]),
        (_, _, [(2, pair), (1, k1), (1, k2), (1, k3)]) => {
            (Rank::OnePair, vec![*pair, *k1, *k2, *k3])
        }
        _ => (Rank::HighCard, values),
    };
    HandValue { rank, tiebreak }
}

/// The high card of a straight formed by `values` (sorted descending),
/// or `None` if they don't form one. The wheel comes back as 5.
fn straight_high(values: &[Value], distinct: usize) -> Option<Value> {
    if distinct != HAND_SIZE {
        return None;
    }
    if values[0] - values[4] == 4 {
        return Some(values[0]);
    }
    if values == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

/// Evaluate the best 5-card hand achievable from `cards` by checking
/// every 5-card subset (21 of them for the 7 cards of a showdown).
///
/// # Panics
///
/// Debug builds assert that at least 5 cards are supplied.
#[must_use]
pub fn eval(cards: &[Card]) -> HandValue {
    debug_assert!(cards.len() >= HAND_SIZE);

    let n = cards.len();
    let mut best = eval_five(&cards[..HAND_SIZE]);
    for a in 0..n - 4 {
        for b in (a + 1)..n - 3 {
            for c in (b + 1)..n - 2 {
                for d in (c + 1)..n - 1 {
                    for e in (d + 1)..n {
                        let combo = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let value = eval_five(&combo);
                        if value > best {
                            best = value;
                        }
                    }
                }
            }
        }
    }
    best
}

/// Indices of every hand tied at the maximum, in ascending order.
/// Multiple indices mean a split pot.
#[must_use]
pub fn argmax(values: &[HandValue]) -> Vec<usize> {
    let Some(max) = values.iter().max() else {
        return Vec::new();
    };
    values
        .iter()
        .enumerate()
        .filter(|(_, value)| *value == max)
        .map(|(idx, _)| idx)
        .collect()
}
