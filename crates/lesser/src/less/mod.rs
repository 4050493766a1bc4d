//! The comparator builder.
//!
//! [`of`] inspects a collection's shape once, decomposes the element type
//! into leaves, and chains them into a single [`Less`] predicate. The
//! predicate takes the collection at call time, so the same predicate can
//! drive an in-place sort and be reused on any other collection of the
//! same type.
//!
//! # Chain Layout
//!
//! ```text
//! struct Row { name: String, score: [u8; 2] }
//!
//! less(a, b) = name:  a.name < b.name      (equal -> next)
//!              [0]:   a.score[0] < b.score[0]  (equal -> next)
//!              [1]:   a.score[1] < b.score[1]  (equal -> false)
//! ```

mod leaf;
mod resolve;

use std::any::type_name;
use std::cmp::Ordering;
use std::fmt;

use crate::shape::{LeafPath, Node};
use crate::{Describe, LesserError, Sequence};
use resolve::resolve;

/// One compiled link of a comparator chain.
pub(crate) type Link<T> = Box<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Index predicate over a collection.
type Predicate<C> = Box<dyn Fn(&C, usize, usize) -> bool + Send + Sync>;

fn never<T: ?Sized + 'static>() -> Link<T> {
    Box::new(|_: &T, _: &T| false)
}

/// Compiled element-level comparator for `T`.
pub struct Chain<T: ?Sized> {
    ty: &'static str,
    leaves: Vec<LeafPath>,
    link: Link<T>,
}

impl<T: Describe + ?Sized> Chain<T> {
    /// Decompose `T` and compile its comparator chain.
    pub fn build() -> Result<Self, LesserError> {
        let shape = T::shape();
        let ty = shape.name();
        let leaves = shape.desc().leaf_paths()?;
        let link = resolve(shape, 0, None)?.unwrap_or_else(never);
        tracing::debug!(ty, leaves = leaves.len(), "compiled comparator chain");
        Ok(Chain { ty, leaves, link })
    }
}

impl<T: ?Sized> Chain<T> {
    /// Whether `a` sorts strictly before `b`.
    #[inline]
    pub fn less(&self, a: &T, b: &T) -> bool {
        (self.link)(a, b)
    }

    /// Three-way comparison derived from [`Chain::less`].
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Leaves in comparison order.
    pub fn leaves(&self) -> &[LeafPath] {
        &self.leaves
    }

    /// Name of the compared type.
    pub fn type_name(&self) -> &'static str {
        self.ty
    }
}

impl<T: ?Sized> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("ty", &self.ty)
            .field("leaves", &self.leaves.len())
            .finish_non_exhaustive()
    }
}

/// Less-than predicate over the elements of a collection `C`.
///
/// Built by [`of`]. `less(collection, i, j)` reports whether element `i`
/// sorts strictly before element `j`.
pub struct Less<C: ?Sized> {
    elem: &'static str,
    leaves: Vec<LeafPath>,
    noop: bool,
    predicate: Predicate<C>,
}

impl<C: ?Sized + 'static> Less<C> {
    pub(crate) fn indexed<E: ?Sized + 'static>(
        chain: Chain<E>,
        at: for<'a> fn(&'a C, usize) -> &'a E,
    ) -> Self {
        let Chain { ty, leaves, link } = chain;
        Less {
            elem: ty,
            leaves,
            noop: false,
            predicate: Box::new(move |c: &C, i: usize, j: usize| link(at(c, i), at(c, j))),
        }
    }

    /// Predicate for an empty input. Never less; never reads an element.
    fn noop(elem: &'static str) -> Self {
        Less {
            elem,
            leaves: Vec::new(),
            noop: true,
            predicate: Box::new(|_: &C, _: usize, _: usize| false),
        }
    }
}

impl<C: ?Sized> Less<C> {
    /// Whether element `i` sorts strictly before element `j`.
    #[inline]
    pub fn less(&self, collection: &C, i: usize, j: usize) -> bool {
        (self.predicate)(collection, i, j)
    }

    /// Bind to one collection, yielding the plain two-index form.
    pub fn bind<'a>(&'a self, collection: &'a C) -> impl Fn(usize, usize) -> bool + 'a {
        move |i, j| self.less(collection, i, j)
    }

    /// Whether this predicate was built from an empty input.
    ///
    /// Such a predicate compares nothing; sorting with it is skipped.
    pub fn is_noop(&self) -> bool {
        self.noop
    }

    /// Leaves in comparison order. Empty for a no-op predicate.
    pub fn leaves(&self) -> &[LeafPath] {
        &self.leaves
    }

    /// Name of the element type.
    pub fn elem_type(&self) -> &'static str {
        self.elem
    }
}

impl<C: Sequence + ?Sized> Less<C> {
    /// Sort `collection` in place (unstable).
    pub fn sort(&self, collection: &mut C) {
        if !self.noop {
            crate::sort::slice(collection, |c, i, j| self.less(c, i, j));
        }
    }

    /// Sort `collection` in place, keeping equal elements in order.
    pub fn sort_stable(&self, collection: &mut C) {
        if !self.noop {
            crate::sort::stable(collection, |c, i, j| self.less(c, i, j));
        }
    }

    /// Whether `collection` is already sorted.
    pub fn is_sorted(&self, collection: &C) -> bool {
        crate::sort::is_sorted(collection, |c, i, j| self.less(c, i, j))
    }
}

impl<C: ?Sized> fmt::Debug for Less<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Less")
            .field("elem", &self.elem)
            .field("leaves", &self.leaves.len())
            .field("noop", &self.noop)
            .finish_non_exhaustive()
    }
}

/// Build the less-than predicate for the elements of `collection`.
///
/// The ordering rules:
/// - `bool` orders `false` before `true`
/// - integers, chars and strings order by `<` (strings byte-wise)
/// - NaN orders before every other float; two NaNs tie
/// - complex numbers compare the real part, then the imaginary part
/// - pointers, function pointers and other handles order by address
/// - structs and tuples compare each field in turn, skipping `_` fields
/// - arrays compare each element in turn
///
/// `collection` must be a sequence (`Vec`, slice, `Box<[T]>`, `VecDeque`);
/// anything else is an [`LesserError::InvalidArgument`]. An element type
/// containing an open value or a nested sequence is an
/// [`LesserError::UnsupportedType`]. An empty collection yields a no-op
/// predicate without inspecting the element type.
#[tracing::instrument(level = "debug", skip_all, fields(ty = type_name::<C>()))]
pub fn of<C: Describe + ?Sized>(collection: &C) -> Result<Less<C>, LesserError> {
    let shape = C::shape();
    let Node::Sequence(elements) = shape.node else {
        return Err(LesserError::InvalidArgument {
            ty: shape.name,
            kind: shape.kind,
        });
    };
    if elements.len(collection) == 0 {
        tracing::debug!("empty input, predicate will not be called");
        return Ok(Less::noop(elements.elem_name()));
    }
    elements.compile()
}

/// Build the element-level chain for `T` without a collection.
pub fn chain<T: Describe + ?Sized>() -> Result<Chain<T>, LesserError> {
    Chain::build()
}

/// Build the predicate for `collection` and sort it in place (unstable).
pub fn sort<C: Describe + Sequence + ?Sized>(collection: &mut C) -> Result<(), LesserError> {
    of(&*collection)?.sort(collection);
    Ok(())
}

/// Build the predicate for `collection` and sort it in place, stably.
pub fn sort_stable<C: Describe + Sequence + ?Sized>(
    collection: &mut C,
) -> Result<(), LesserError> {
    of(&*collection)?.sort_stable(collection);
    Ok(())
}

#[cfg(test)]
mod tests;
