//! Element access for input collections.

use std::marker::PhantomData;

use super::TypeDesc;
use crate::{Chain, Describe, Less, LesserError};

/// Type-erased view of a collection's elements.
///
/// A sequence shape hides its element type behind this trait so that the
/// builder, which only sees `Shape<C>`, can still compile a chain for the
/// elements.
pub(crate) trait Elements<C: ?Sized> {
    /// Type name of the elements.
    fn elem_name(&self) -> &'static str;

    /// Descriptor of the element type.
    fn desc(&self) -> TypeDesc;

    /// Number of elements in `collection`.
    fn len(&self, collection: &C) -> usize;

    /// Compile the element chain into an index predicate over `C`.
    fn compile(&self) -> Result<Less<C>, LesserError>;
}

/// Elements of type `E`, read by index.
pub(crate) struct Items<C: ?Sized, E> {
    len: fn(&C) -> usize,
    at: for<'a> fn(&'a C, usize) -> &'a E,
    _elem: PhantomData<fn() -> E>,
}

impl<C: ?Sized, E> Items<C, E> {
    pub(crate) fn new(len: fn(&C) -> usize, at: for<'a> fn(&'a C, usize) -> &'a E) -> Self {
        Items {
            len,
            at,
            _elem: PhantomData,
        }
    }
}

impl<C: ?Sized + 'static, E: Describe> Elements<C> for Items<C, E> {
    fn elem_name(&self) -> &'static str {
        std::any::type_name::<E>()
    }

    fn desc(&self) -> TypeDesc {
        E::shape().desc()
    }

    fn len(&self, collection: &C) -> usize {
        (self.len)(collection)
    }

    fn compile(&self) -> Result<Less<C>, LesserError> {
        let chain = Chain::<E>::build()?;
        Ok(Less::indexed(chain, self.at))
    }
}
