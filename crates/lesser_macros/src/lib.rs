//! Procedural macros for lesser.
//!
//! # Describe Derive
//!
//! `#[derive(Describe)]` reports a struct's fields, in declaration order,
//! as the children of a record shape:
//!
//! ```text
//! #[derive(Describe)]
//! struct Row {
//!     name: String,          // compared first
//!     score: [u8; 2],        // then score[0], score[1]
//!     _scratch: Vec<u8>,     // never compared
//!     #[lesser(skip)]
//!     cache: Option<u64>,    // never compared
//! }
//! ```
//!
//! Each compared field becomes a `Field::new` with the field's byte offset
//! and a projection closure; discard fields become `Field::discard` and
//! need not implement `Describe`.

mod describe;
mod utils;

use proc_macro::TokenStream;

/// Derive `lesser::Describe` for a struct.
///
/// # Attributes
///
/// ## Field-level
/// - `#[lesser(skip)]` - Leave the field out of comparisons.
///
/// Fields whose name starts with `_` are left out as well.
///
/// # Generics
///
/// Every type parameter gets a `Describe` bound. Lifetime parameters are
/// rejected, since described types must be `'static`.
#[proc_macro_derive(Describe, attributes(lesser))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    describe::derive_describe(input)
}
