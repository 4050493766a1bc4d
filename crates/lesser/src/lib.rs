//! Lesser - Runtime-Built Less-Than Predicates
//!
//! Builds a total-order `less(i, j)` predicate for the elements of any
//! described collection, so index-based sorts never need a hand-written
//! comparator per record type.
//!
//! - [`Describe`]: runtime shape of a type (derive it for structs)
//! - [`of`]: decompose the element shape once and compile a [`Less`]
//! - [`sort`](mod@sort): index-based in-place sort routines
//! - [`TypeDesc`] / [`LeafPath`]: inspect what the predicate compares
//!
//! # Example
//!
//! ```
//! use lesser::Describe;
//!
//! #[derive(Describe)]
//! struct Row {
//!     name: String,
//!     score: u32,
//!     _cache: u64,
//! }
//!
//! let mut rows = vec![
//!     Row { name: "b".into(), score: 1, _cache: 0 },
//!     Row { name: "a".into(), score: 2, _cache: 0 },
//!     Row { name: "a".into(), score: 1, _cache: 9 },
//! ];
//!
//! let less = lesser::of(&rows)?;
//! assert!(less.less(&rows, 2, 1));
//! less.sort(&mut rows);
//!
//! let order: Vec<_> = rows.iter().map(|r| (r.name.as_str(), r.score)).collect();
//! assert_eq!(order, [("a", 1), ("a", 2), ("b", 1)]);
//! # Ok::<(), lesser::LesserError>(())
//! ```
//!
//! # Design Philosophy
//!
//! - **Decompose Once**: kind dispatch happens while the chain is built;
//!   the compiled predicate is a chain of monomorphic closures.
//! - **No Raw Offsets**: leaves are read through typed accessors; offsets
//!   are descriptive only.
//! - **Collection at Call Time**: the predicate borrows the collection per
//!   call, so it can drive an in-place sort and be reused.

mod describe;
mod error;
mod kind;
mod less;
mod sequence;
mod shape;
pub mod sort;
mod stack;

pub use describe::Describe;
pub use error::LesserError;
pub use kind::Kind;
pub use less::{chain, of, sort, sort_stable, Chain, Less};
pub use sequence::Sequence;
pub use shape::{Field, FieldDesc, LeafPath, Shape, TypeDesc};

#[cfg(feature = "derive")]
pub use lesser_macros::Describe;
