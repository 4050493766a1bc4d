//! Arrays and tuples.

use std::marker::PhantomData;
use std::mem::offset_of;

use super::Describe;
use crate::{Field, Shape};

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn shape() -> Shape<Self> {
        Shape::array()
    }
}

impl Describe for () {
    fn shape() -> Shape<Self> {
        Shape::record(Vec::new())
    }
}

impl<T: ?Sized + 'static> Describe for PhantomData<T> {
    fn shape() -> Shape<Self> {
        Shape::record(Vec::new())
    }
}

/// Tuples are records with fields named by position.
macro_rules! impl_tuple {
    ($tuple:ty; $($name:ident . $idx:tt),+) => {
        impl<$($name: Describe),+> Describe for $tuple {
            fn shape() -> Shape<Self> {
                Shape::record(vec![
                    $(
                        Field::new::<$name, _>(
                            stringify!($idx),
                            offset_of!($tuple, $idx),
                            |t: &$tuple| &t.$idx,
                        ),
                    )+
                ])
            }
        }
    };
}

impl_tuple!((A,); A.0);
impl_tuple!((A, B); A.0, B.1);
impl_tuple!((A, B, C); A.0, B.1, C.2);
impl_tuple!((A, B, C, D); A.0, B.1, C.2, D.3);
impl_tuple!((A, B, C, D, E); A.0, B.1, C.2, D.3, E.4);
impl_tuple!((A, B, C, D, E, F); A.0, B.1, C.2, D.3, E.4, F.5);
impl_tuple!((A, B, C, D, E, F, G); A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_tuple!((A, B, C, D, E, F, G, H); A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
