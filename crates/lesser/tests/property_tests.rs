//! Property-based tests for built predicates.
//!
//! Random collections are sorted with a predicate built by `lesser::of` and
//! checked against the standard library's ordering of equivalent values.

#![allow(
    clippy::unwrap_used,
    clippy::float_cmp,
    clippy::used_underscore_binding
)]

mod common;

use lesser::{Describe, Sequence};
use proptest::prelude::*;

#[derive(Describe, Clone, Debug)]
struct Entry {
    key: u8,
    _seq: usize,
}

fn build_and_sort<T: Describe>(values: &mut Vec<T>) {
    common::init_tracing();
    lesser::of(&*values).unwrap().sort(values);
}

proptest! {
    #[test]
    fn records_match_tuple_ord(mut values in prop::collection::vec((any::<i16>(), "[a-c]{0,3}"), 0..64)) {
        let mut expected = values.clone();
        expected.sort();
        build_and_sort(&mut values);
        prop_assert_eq!(values, expected);
    }

    #[test]
    fn arrays_match_lexicographic_ord(mut values in prop::collection::vec(any::<[u8; 3]>(), 0..64)) {
        let mut expected = values.clone();
        expected.sort_unstable();
        build_and_sort(&mut values);
        prop_assert_eq!(values, expected);
    }

    #[test]
    fn floats_put_nan_first_then_ascend(
        mut values in prop::collection::vec(prop_oneof![Just(f64::NAN), -1e6..1e6_f64], 0..64)
    ) {
        let nans = values.iter().filter(|v| v.is_nan()).count();
        build_and_sort(&mut values);

        prop_assert!(values[..nans].iter().all(|v| v.is_nan()));
        prop_assert!(values[nans..].windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn sorting_is_idempotent(mut values in prop::collection::vec((any::<bool>(), any::<char>()), 0..64)) {
        build_and_sort(&mut values);
        let once = values.clone();
        build_and_sort(&mut values);
        prop_assert_eq!(values, once);
    }

    #[test]
    fn stable_sort_keeps_discarded_order(keys in prop::collection::vec(0_u8..4, 0..128)) {
        let mut entries: Vec<Entry> = keys
            .iter()
            .enumerate()
            .map(|(seq, &key)| Entry { key, _seq: seq })
            .collect();
        lesser::sort_stable(&mut entries).unwrap();

        prop_assert_eq!(entries.len(), keys.len());
        for pair in entries.windows(2) {
            prop_assert!(pair[0].key <= pair[1].key);
            if pair[0].key == pair[1].key {
                prop_assert!(pair[0]._seq < pair[1]._seq);
            }
        }
    }

    #[test]
    fn compare_agrees_with_ord(a in any::<(i8, bool, [u8; 2])>(), b in any::<(i8, bool, [u8; 2])>()) {
        let chain = lesser::chain::<(i8, bool, [u8; 2])>().unwrap();
        prop_assert_eq!(chain.compare(&a, &b), a.cmp(&b));
        prop_assert!(!(chain.less(&a, &b) && chain.less(&b, &a)));
    }

    #[test]
    fn sorted_output_reports_sorted(mut values in prop::collection::vec(any::<u32>(), 1..64)) {
        let less = lesser::of(&values).unwrap();
        less.sort(&mut values);
        prop_assert!(less.is_sorted(&values));
        prop_assert!(!values.is_empty());
        prop_assert_eq!(Sequence::len(&values), values.len());
    }
}
