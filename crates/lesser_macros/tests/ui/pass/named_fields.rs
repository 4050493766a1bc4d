//! Named fields are compared in declaration order.

use lesser::{Describe, Kind};

#[derive(Describe)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub label: String,
}

fn main() {
    let desc = Point::shape().desc();
    assert_eq!(desc.kind, Kind::Struct);

    let paths: Vec<String> = desc
        .leaf_paths()
        .unwrap()
        .iter()
        .map(|leaf| leaf.path().to_owned())
        .collect();
    assert_eq!(paths, ["x", "y", "label"]);
}
