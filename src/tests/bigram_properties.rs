use crate::bigram::{count_bigrams, most_frequent_pair};
use crate::symbol::{Pair, Symbol};
use proptest::prelude::*;

fn to_symbols(input: &[u8]) -> Vec<Symbol> {
    input.iter().map(|&b| Symbol::new(b as u32)).collect()
}

proptest! {
    /// Counts sum to one per adjacent position.
    #[test]
    fn prop_total_is_len_minus_one(input: Vec<u8>) {
        let sequence = to_symbols(&input);
        let counts = count_bigrams(&sequence);
        prop_assert_eq!(counts.total(), input.len().saturating_sub(1));
    }

    /// A pair is selected exactly when one exists.
    #[test]
    fn prop_pair_exists_iff_two_symbols(input in prop::collection::vec(0u8..4, 0..20)) {
        let sequence = to_symbols(&input);
        prop_assert_eq!(most_frequent_pair(&sequence).is_some(), input.len() >= 2);
    }

    /// The selected pair has the maximum count, and no pair with the same
    /// count appears earlier in the sequence.
    #[test]
    fn prop_selection_is_max_then_earliest(input in prop::collection::vec(0u8..4, 2..60)) {
        let sequence = to_symbols(&input);
        let counts = count_bigrams(&sequence);
        let (best, best_count) = counts.most_frequent().unwrap();

        let max = counts.iter().map(|(_, c)| c).max().unwrap();
        prop_assert_eq!(best_count, max);

        let first_seen = |pair: Pair| {
            sequence
                .windows(2)
                .position(|w| w[0] == pair.left && w[1] == pair.right)
                .unwrap()
        };
        let best_pos = first_seen(best);
        for (pair, count) in counts.iter() {
            if count == max {
                prop_assert!(first_seen(pair) >= best_pos);
            }
        }
    }
}
