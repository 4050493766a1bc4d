//! Shape kind tag for kind-driven dispatch.
//!
//! Every [`Shape`](crate::Shape) carries a `Kind` that identifies how its
//! values are ordered. Dispatch on the kind happens once, while the
//! comparator chain is built; the compiled predicate never looks at it.
//!
//! # Kind Categories
//!
//! Kinds are organized into semantic ranges:
//! - 0-31: Scalars (one leaf each)
//! - 32-47: Opaque handles (one leaf each, ordered by address)
//! - 48-63: Composites (unfolded into their children)
//! - 64-79: Unsortable (rejected by the builder)

use std::fmt;

/// Element shape discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum Kind {
    // === Scalars (0-31) ===
    /// Boolean, `false < true`.
    Bool = 0,
    /// Unicode scalar value, ordered by code point.
    Char = 1,
    /// 8-bit signed integer.
    Int8 = 2,
    /// 16-bit signed integer.
    Int16 = 3,
    /// 32-bit signed integer.
    Int32 = 4,
    /// 64-bit signed integer.
    Int64 = 5,
    /// 128-bit signed integer.
    Int128 = 6,
    /// Pointer-width signed integer.
    Isize = 7,
    /// 8-bit unsigned integer.
    Uint8 = 8,
    /// 16-bit unsigned integer.
    Uint16 = 9,
    /// 32-bit unsigned integer.
    Uint32 = 10,
    /// 64-bit unsigned integer.
    Uint64 = 11,
    /// 128-bit unsigned integer.
    Uint128 = 12,
    /// Pointer-width unsigned integer.
    Usize = 13,
    /// 32-bit float, NaN first.
    Float32 = 14,
    /// 64-bit float, NaN first.
    Float64 = 15,
    /// Complex number with 32-bit components, real part first.
    Complex64 = 16,
    /// Complex number with 64-bit components, real part first.
    Complex128 = 17,
    /// UTF-8 string, byte-lexicographic.
    Str = 18,

    // Reserved: 19-31 for future scalars

    // === Opaque Handles (32-47) ===
    /// Channel handle.
    Chan = 32,
    /// Function pointer.
    Func = 33,
    /// Shared map handle.
    Map = 34,
    /// Owning or shared pointer (`Box`, `Rc`, `Arc`, `&'static`).
    Ptr = 35,
    /// Raw pointer.
    UnsafePtr = 36,

    // === Composites (48-63) ===
    /// Fixed-size array `[T; N]`.
    Array = 48,
    /// Record with ordered fields (structs and tuples).
    Struct = 49,

    // === Unsortable (64-79) ===
    /// Growable or dynamically sized sequence.
    Slice = 64,
    /// Open value (`dyn Any`).
    Interface = 65,
}

impl Kind {
    /// Check if this kind is an opaque handle compared by address.
    #[inline]
    pub const fn is_handle(self) -> bool {
        let v = self as u8;
        v >= 32 && v < 48
    }

    /// Check if this kind is unfolded into child shapes.
    #[inline]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Array | Self::Struct)
    }

    /// Check if values of this kind can appear inside a comparator chain.
    #[inline]
    pub const fn is_sortable(self) -> bool {
        (self as u8) < 64
    }

    /// Get the name of this kind as a static string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Int128 => "int128",
            Self::Isize => "isize",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uint128 => "uint128",
            Self::Usize => "usize",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::Str => "string",
            Self::Chan => "chan",
            Self::Func => "func",
            Self::Map => "map",
            Self::Ptr => "ptr",
            Self::UnsafePtr => "unsafe_ptr",
            Self::Array => "array",
            Self::Struct => "struct",
            Self::Slice => "slice",
            Self::Interface => "interface",
        }
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kind::{}", self.name())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

const _: () = assert!(std::mem::size_of::<Kind>() == 1);
