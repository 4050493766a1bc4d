//! Typed leaf accessors.
//!
//! An [`Access`] reads one primitively-comparable value out of a `T`. The
//! variant fixes the value type, so the leaf comparator built from it is
//! monomorphic: picking the variant is the only kind dispatch, and it
//! happens once per chain.
//!
//! Accessors for nested values are built by lifting the child's accessor
//! through the field projection ([`Access::lift`]), so reaching a leaf
//! three records deep is three plain closure calls.

use std::sync::Arc;

/// Reads a copyable leaf value.
pub(crate) type Get<T, V> = Arc<dyn Fn(&T) -> V + Send + Sync>;

/// Reads a borrowed string leaf.
pub(crate) type GetStr<T> = Arc<dyn for<'a> Fn(&'a T) -> &'a str + Send + Sync>;

/// Projects a container onto one of its parts.
pub(crate) type Proj<U, T> = Arc<dyn for<'a> Fn(&'a U) -> &'a T + Send + Sync>;

/// Pin a closure to the higher-ranked string accessor signature.
pub(crate) fn str_getter<T, F>(f: F) -> GetStr<T>
where
    T: ?Sized + 'static,
    F: for<'a> Fn(&'a T) -> &'a str + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Pin a closure to the higher-ranked projection signature.
pub(crate) fn projection<U, T, F>(f: F) -> Proj<U, T>
where
    U: ?Sized + 'static,
    T: ?Sized + 'static,
    F: for<'a> Fn(&'a U) -> &'a T + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Accessor for a single leaf, tagged by value type.
pub(crate) enum Access<T: ?Sized> {
    Bool(Get<T, bool>),
    Char(Get<T, char>),
    I8(Get<T, i8>),
    I16(Get<T, i16>),
    I32(Get<T, i32>),
    I64(Get<T, i64>),
    I128(Get<T, i128>),
    Isize(Get<T, isize>),
    U8(Get<T, u8>),
    U16(Get<T, u16>),
    U32(Get<T, u32>),
    U64(Get<T, u64>),
    U128(Get<T, u128>),
    Usize(Get<T, usize>),
    F32(Get<T, f32>),
    F64(Get<T, f64>),
    C64 { re: Get<T, f32>, im: Get<T, f32> },
    C128 { re: Get<T, f64>, im: Get<T, f64> },
    Str(GetStr<T>),
    /// Address identity of a handle.
    Addr(Get<T, usize>),
}

fn compose<U, T, V>(get: Get<T, V>, proj: &Proj<U, T>) -> Get<U, V>
where
    U: ?Sized + 'static,
    T: ?Sized + 'static,
    V: 'static,
{
    let proj = Arc::clone(proj);
    Arc::new(move |u: &U| get(proj(u)))
}

fn compose_str<U, T>(get: GetStr<T>, proj: &Proj<U, T>) -> GetStr<U>
where
    U: ?Sized + 'static,
    T: ?Sized + 'static,
{
    let proj = Arc::clone(proj);
    str_getter(move |u: &U| get(proj(u)))
}

/// Lift every by-value variant through a projection.
macro_rules! lift_variants {
    ($access:expr, $proj:expr; $($variant:ident),+ $(,)?) => {
        match $access {
            $(Access::$variant(get) => Access::$variant(compose(get, $proj)),)+
            Access::C64 { re, im } => Access::C64 {
                re: compose(re, $proj),
                im: compose(im, $proj),
            },
            Access::C128 { re, im } => Access::C128 {
                re: compose(re, $proj),
                im: compose(im, $proj),
            },
            Access::Str(get) => Access::Str(compose_str(get, $proj)),
        }
    };
}

impl<T: ?Sized + 'static> Access<T> {
    /// Re-root this accessor at a container `U` that holds a `T`.
    pub(crate) fn lift<U: ?Sized + 'static>(self, proj: &Proj<U, T>) -> Access<U> {
        lift_variants!(self, proj;
            Bool, Char,
            I8, I16, I32, I64, I128, Isize,
            U8, U16, U32, U64, U128, Usize,
            F32, F64,
            Addr,
        )
    }
}
