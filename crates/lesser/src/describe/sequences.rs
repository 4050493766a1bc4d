//! Collections the builder accepts as input.
//!
//! As elements of another collection these are nested sequences and get
//! rejected.

use std::collections::VecDeque;

use super::Describe;
use crate::Shape;

impl<T: Describe> Describe for Vec<T> {
    fn shape() -> Shape<Self> {
        Shape::sequence::<T>(Vec::len, |v: &Vec<T>, i| &v[i])
    }
}

impl<T: Describe> Describe for [T] {
    fn shape() -> Shape<Self> {
        Shape::sequence::<T>(<[T]>::len, |s: &[T], i| &s[i])
    }
}

impl<T: Describe> Describe for Box<[T]> {
    fn shape() -> Shape<Self> {
        Shape::sequence::<T>(|b: &Self| b.len(), |b: &Self, i| &b[i])
    }
}

impl<T: Describe> Describe for VecDeque<T> {
    fn shape() -> Shape<Self> {
        Shape::sequence::<T>(VecDeque::len, |d: &VecDeque<T>, i| &d[i])
    }
}
