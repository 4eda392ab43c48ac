/// Property-based tests for hand evaluation using proptest
///
/// These tests verify that the hand evaluation logic is correct
/// across a wide range of randomly generated card combinations.
use holdem::{
    Card, HandValue, Rank, Suit,
    functional::{argmax, eval, eval_five},
};
use proptest::prelude::*;
use std::collections::BTreeSet;

// Strategy to generate a valid card (values 2-14, aces are value 14)
fn card_strategy() -> impl Strategy<Value = Card> {
    (2u8..=14, 0usize..4).prop_map(|(value, suit_idx)| Card(value, Suit::ALL[suit_idx]))
}

// Strategy to generate a vec of unique cards (no duplicates)
fn unique_cards_strategy(count: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card_strategy(), count..=count).prop_filter(
        "Cards must be unique",
        |cards| {
            let set: BTreeSet<_> = cards.iter().collect();
            set.len() == cards.len()
        },
    )
}

// Strategy to generate 7 unique cards alongside a permutation of them
fn permuted_seven_strategy() -> impl Strategy<Value = (Vec<Card>, Vec<Card>)> {
    unique_cards_strategy(7)
        .prop_flat_map(|cards| (Just(cards.clone()), Just(cards).prop_shuffle()))
}

// Tie-break run lengths are fixed per category, which is what makes
// the derived lexicographic ordering sound.
fn expected_tiebreak_len(rank: Rank) -> usize {
    match rank {
        Rank::HighCard | Rank::Flush => 5,
        Rank::OnePair => 4,
        Rank::TwoPair | Rank::ThreeOfAKind => 3,
        Rank::FullHouse | Rank::FourOfAKind => 2,
        Rank::Straight | Rank::StraightFlush => 1,
    }
}

proptest! {
    #[test]
    fn eval_is_deterministic(cards in unique_cards_strategy(7)) {
        prop_assert_eq!(eval(&cards), eval(&cards));
    }

    #[test]
    fn eval_is_permutation_invariant((cards, permuted) in permuted_seven_strategy()) {
        prop_assert_eq!(eval(&permuted), eval(&cards));
    }

    #[test]
    fn eval_never_ranks_below_any_five_card_subset(cards in unique_cards_strategy(7)) {
        let best = eval(&cards);
        prop_assert!(best >= eval_five(&cards[..5]));
        prop_assert!(best >= eval_five(&cards[2..]));
    }

    #[test]
    fn an_extra_card_never_weakens_a_hand(cards in unique_cards_strategy(7)) {
        prop_assert!(eval(&cards) >= eval(&cards[..6]));
        prop_assert!(eval(&cards[..6]) >= eval(&cards[..5]));
    }

    #[test]
    fn tiebreak_run_length_is_fixed_per_category(cards in unique_cards_strategy(7)) {
        let HandValue { rank, tiebreak } = eval(&cards);
        prop_assert_eq!(tiebreak.len(), expected_tiebreak_len(rank));
    }

    #[test]
    fn argmax_single_hand_returns_zero(cards in unique_cards_strategy(7)) {
        let value = eval(&cards);
        prop_assert_eq!(argmax(&[value]), vec![0]);
    }

    #[test]
    fn argmax_identical_hands_all_win(cards in unique_cards_strategy(7)) {
        let value = eval(&cards);
        let winners = argmax(&[value.clone(), value.clone(), value]);
        prop_assert_eq!(winners, vec![0, 1, 2]);
    }

    #[test]
    fn argmax_returns_valid_sorted_indices(
        hands in prop::collection::vec(unique_cards_strategy(7), 2..=10)
    ) {
        let evaluated: Vec<_> = hands.iter().map(|cards| eval(cards)).collect();
        let winners = argmax(&evaluated);

        prop_assert!(!winners.is_empty(), "argmax should return at least one winner");
        for &winner_idx in &winners {
            prop_assert!(winner_idx < evaluated.len(), "winner index should be valid");
        }

        let mut sorted_winners = winners.clone();
        sorted_winners.sort_unstable();
        sorted_winners.dedup();
        prop_assert_eq!(&winners, &sorted_winners, "winners should be sorted and unique");

        // Everyone the argmax names really does tie the maximum.
        let max = evaluated.iter().max().unwrap();
        for (idx, value) in evaluated.iter().enumerate() {
            prop_assert_eq!(winners.contains(&idx), value == max);
        }
    }
}
