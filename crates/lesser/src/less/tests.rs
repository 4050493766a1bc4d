#![allow(clippy::unwrap_used, clippy::used_underscore_binding)]

use std::any::{type_name, Any};
use std::collections::VecDeque;
use std::mem::offset_of;

use pretty_assertions::assert_eq;

use super::*;
use crate::{Field, Kind, Shape};

/// `A`, a placeholder, then `B`.
struct Padded {
    a: i32,
    _blank: i32,
    b: i32,
}

impl Describe for Padded {
    fn shape() -> Shape<Self> {
        Shape::record(vec![
            Field::new::<i32, _>("a", offset_of!(Padded, a), |v: &Padded| &v.a),
            Field::new::<i32, _>("_blank", offset_of!(Padded, _blank), |v: &Padded| &v._blank),
            Field::new::<i32, _>("b", offset_of!(Padded, b), |v: &Padded| &v.b),
        ])
    }
}

// === Chain ===

#[test]
fn scalar_chain_orders_and_compares() {
    let chain = chain::<i32>().unwrap();
    assert!(chain.less(&1, &2));
    assert!(!chain.less(&2, &1));
    assert!(!chain.less(&2, &2));
    assert_eq!(chain.compare(&1, &2), Ordering::Less);
    assert_eq!(chain.compare(&3, &2), Ordering::Greater);
    assert_eq!(chain.compare(&2, &2), Ordering::Equal);
    assert_eq!(chain.type_name(), "i32");
}

#[test]
fn chain_leaves_follow_declaration_order() {
    let chain = chain::<(u8, [bool; 2])>().unwrap();
    let paths: Vec<_> = chain.leaves().iter().map(LeafPath::path).collect();
    assert_eq!(paths, ["0", "1[0]", "1[1]"]);
}

#[test]
fn array_elements_compare_in_index_order() {
    let chain = chain::<[u8; 3]>().unwrap();
    assert!(chain.less(&[1, 9, 9], &[2, 0, 0]));
    assert!(chain.less(&[1, 2, 9], &[1, 3, 0]));
    assert!(chain.less(&[1, 2, 3], &[1, 2, 4]));
    assert!(!chain.less(&[1, 2, 3], &[1, 2, 3]));
}

#[test]
fn empty_record_is_never_less() {
    let chain = chain::<()>().unwrap();
    assert!(chain.leaves().is_empty());
    assert!(!chain.less(&(), &()));
}

// === Tie-breaking ===

#[test]
fn later_field_breaks_tie() {
    let rows = vec![("x".to_owned(), 2), ("x".to_owned(), 1)];
    let less = of(&rows).unwrap();
    assert!(less.less(&rows, 1, 0));
    assert!(!less.less(&rows, 0, 1));
}

#[test]
fn discard_field_is_ignored() {
    let rows = vec![
        Padded { a: 1, _blank: 0, b: 2 },
        Padded { a: 1, _blank: 99, b: 2 },
    ];
    let less = of(&rows).unwrap();
    assert!(!less.less(&rows, 0, 1));
    assert!(!less.less(&rows, 1, 0));
    assert_eq!(less.leaves().len(), 2);
}

#[test]
fn discard_field_does_not_break_linkage() {
    let rows = vec![
        Padded { a: 1, _blank: 0, b: 3 },
        Padded { a: 1, _blank: 5, b: 2 },
    ];
    let less = of(&rows).unwrap();
    assert!(less.less(&rows, 1, 0));
}

#[test]
fn nan_tie_defers_to_next_field() {
    let rows = vec![(f64::NAN, 2), (f64::NAN, 1), (0.5, 0)];
    let less = of(&rows).unwrap();
    assert!(less.less(&rows, 1, 0));
    assert!(!less.less(&rows, 0, 1));
    assert!(less.less(&rows, 0, 2));
    assert!(!less.less(&rows, 2, 0));
}

// === Builder ===

#[test]
fn non_sequence_is_invalid_argument() {
    assert_eq!(
        of(&5_i32).unwrap_err(),
        LesserError::InvalidArgument {
            ty: "i32",
            kind: Kind::Int32,
        }
    );
}

#[test]
fn fixed_array_is_invalid_argument() {
    let err = of(&[3, 1, 2]).unwrap_err();
    assert_eq!(err.kind(), Kind::Array);
    assert!(matches!(err, LesserError::InvalidArgument { .. }));
}

#[test]
fn empty_fixed_array_is_still_invalid_argument() {
    let empty: [u8; 0] = [];
    assert!(matches!(
        of(&empty),
        Err(LesserError::InvalidArgument { .. })
    ));
}

#[test]
fn open_elements_are_unsupported() {
    let values: Vec<Box<dyn Any>> = vec![Box::new(1), Box::new("a")];
    assert_eq!(
        of(&values).unwrap_err(),
        LesserError::UnsupportedType {
            ty: type_name::<Box<dyn Any>>(),
            kind: Kind::Interface,
        }
    );
}

#[test]
fn nested_sequence_elements_are_unsupported() {
    let values = vec![vec![1], vec![0]];
    assert_eq!(of(&values).unwrap_err().kind(), Kind::Slice);
}

#[test]
fn empty_input_skips_validation() {
    let values: Vec<Box<dyn Any>> = Vec::new();
    let less = of(&values).unwrap();
    assert!(less.is_noop());
    assert!(less.leaves().is_empty());
    assert!(!less.less(&values, 0, 1));
    assert_eq!(less.elem_type(), type_name::<Box<dyn Any>>());
}

#[test]
fn bound_predicate_uses_two_indices() {
    let values = vec![3, 1, 2];
    let less = of(&values).unwrap();
    let bound = less.bind(&values);
    assert!(bound(1, 2));
    assert!(!bound(0, 2));
}

#[test]
fn predicate_is_reusable_across_collections() {
    let first = vec!["b", "a"];
    let less = of(&first).unwrap();
    let second = vec!["c", "d", "a"];
    assert!(less.less(&second, 2, 0));
    assert!(!less.less(&second, 1, 0));
}

// === Sorting ===

#[test]
fn less_sorts_vec_and_deque() {
    let mut values = vec![5_u64, 3, 9, 1];
    let less = of(&values).unwrap();
    less.sort(&mut values);
    assert_eq!(values, [1, 3, 5, 9]);
    assert!(less.is_sorted(&values));

    let mut deque: VecDeque<char> = "dcab".chars().collect();
    let less = of(&deque).unwrap();
    less.sort_stable(&mut deque);
    assert_eq!(deque.iter().collect::<String>(), "abcd");
}

#[test]
fn sort_builds_then_sorts() {
    let mut values = vec![(true, 'b'), (false, 'z'), (true, 'a')];
    sort(&mut values).unwrap();
    assert_eq!(values, [(false, 'z'), (true, 'a'), (true, 'b')]);
}

#[test]
fn sort_stable_keeps_discard_order() {
    let mut rows = vec![
        Padded { a: 2, _blank: 0, b: 0 },
        Padded { a: 1, _blank: 1, b: 0 },
        Padded { a: 1, _blank: 2, b: 0 },
        Padded { a: 0, _blank: 3, b: 0 },
    ];
    sort_stable(&mut rows).unwrap();
    let blanks: Vec<_> = rows.iter().map(|r| r._blank).collect();
    assert_eq!(blanks, [3, 1, 2, 0]);
}
