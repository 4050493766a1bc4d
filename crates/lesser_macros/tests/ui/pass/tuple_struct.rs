//! Tuple structs name their fields by position; type parameters get a
//! `Describe` bound.

use lesser::Describe;

#[derive(Describe)]
pub struct Pair<A, B>(pub A, pub B);

#[derive(Describe)]
pub struct Unit;

fn main() {
    let paths: Vec<String> = Pair::<u8, f64>::shape()
        .desc()
        .leaf_paths()
        .unwrap()
        .iter()
        .map(|leaf| leaf.path().to_owned())
        .collect();
    assert_eq!(paths, ["0", "1"]);

    assert!(Unit::shape().desc().leaf_paths().unwrap().is_empty());
}
