//! Terminal leaf comparators.
//!
//! Each function turns one accessor into a `less(a, b)` link. When the two
//! values are equal the link defers to `next`; with no `next` the link is
//! specialized at build time so the innermost comparison carries no branch
//! on the continuation.

use num_traits::Float;

use super::Link;
use crate::shape::{Access, Get, GetStr};

/// Build the leaf link for `access`, deferring to `next` on ties.
pub(crate) fn compile<T: ?Sized + 'static>(access: Access<T>, next: Option<Link<T>>) -> Link<T> {
    match access {
        Access::Bool(get) => ordered(get, next),
        Access::Char(get) => ordered(get, next),
        Access::I8(get) => ordered(get, next),
        Access::I16(get) => ordered(get, next),
        Access::I32(get) => ordered(get, next),
        Access::I64(get) => ordered(get, next),
        Access::I128(get) => ordered(get, next),
        Access::Isize(get) => ordered(get, next),
        Access::U8(get) => ordered(get, next),
        Access::U16(get) => ordered(get, next),
        Access::U32(get) => ordered(get, next),
        Access::U64(get) => ordered(get, next),
        Access::U128(get) => ordered(get, next),
        Access::Usize(get) | Access::Addr(get) => ordered(get, next),
        Access::F32(get) => float(get, next),
        Access::F64(get) => float(get, next),
        // Real part first; the imaginary part is its tie-breaker.
        Access::C64 { re, im } => float(re, Some(float(im, next))),
        Access::C128 { re, im } => float(re, Some(float(im, next))),
        Access::Str(get) => text(get, next),
    }
}

/// Natural `<` for integers, chars, bools (`false < true`) and addresses.
fn ordered<T, V>(get: Get<T, V>, next: Option<Link<T>>) -> Link<T>
where
    T: ?Sized + 'static,
    V: PartialOrd + 'static,
{
    match next {
        Some(next) => Box::new(move |a: &T, b: &T| {
            let (va, vb) = (get(a), get(b));
            if va == vb {
                return next(a, b);
            }
            va < vb
        }),
        None => Box::new(move |a: &T, b: &T| get(a) < get(b)),
    }
}

/// `<` with NaN ordered before every other value.
///
/// Two NaNs tie and defer to `next`, so a NaN in a leading key still lets
/// the later keys decide.
fn float<T, V>(get: Get<T, V>, next: Option<Link<T>>) -> Link<T>
where
    T: ?Sized + 'static,
    V: Float + 'static,
{
    match next {
        Some(next) => Box::new(move |a: &T, b: &T| {
            let (va, vb) = (get(a), get(b));
            if va == vb || (va.is_nan() && vb.is_nan()) {
                return next(a, b);
            }
            float_less(va, vb)
        }),
        None => Box::new(move |a: &T, b: &T| float_less(get(a), get(b))),
    }
}

#[inline]
fn float_less<V: Float>(va: V, vb: V) -> bool {
    va < vb || (va.is_nan() && !vb.is_nan())
}

/// Byte-lexicographic `<` for strings.
fn text<T>(get: GetStr<T>, next: Option<Link<T>>) -> Link<T>
where
    T: ?Sized + 'static,
{
    match next {
        Some(next) => Box::new(move |a: &T, b: &T| {
            let (va, vb) = (get(a), get(b));
            if va == vb {
                return next(a, b);
            }
            va < vb
        }),
        None => Box::new(move |a: &T, b: &T| get(a) < get(b)),
    }
}
