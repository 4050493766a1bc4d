//! The `Describe` trait and its implementations for standard types.
//!
//! | Types | Kind |
//! |-------|------|
//! | `bool`, `char`, integers, `f32`, `f64` | scalar of the same width |
//! | `String`, `str`, `Box<str>`, `Rc<str>`, `Arc<str>`, `&'static str`, `Cow<'static, str>` | `Str` |
//! | `Complex<f32>`, `Complex<f64>` | `Complex64`, `Complex128` |
//! | `Box<T>`, `Rc<T>`, `Arc<T>`, `&'static T`, `NonNull<T>` | `Ptr` |
//! | `*const T`, `*mut T` | `UnsafePtr` |
//! | `fn(..) -> R` up to four arguments | `Func` |
//! | `[T; N]` | `Array` |
//! | tuples up to eight, `()`, `PhantomData<T>` | `Struct` |
//! | `Vec<T>`, `[T]`, `Box<[T]>`, `VecDeque<T>` | `Slice` |
//! | `dyn Any` (and boxed/shared forms) | `Interface` |

mod complex;
mod composite;
mod handles;
mod sequences;

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::shape::{str_getter, Access, Node};
use crate::{Kind, Shape};

/// A type whose shape can be inspected at runtime.
///
/// Derive it for structs with `#[derive(Describe)]`: fields are compared
/// in declaration order, and fields whose name starts with `_` or that are
/// marked `#[lesser(skip)]` are left out.
pub trait Describe: 'static {
    /// Describe the shape of `Self`.
    fn shape() -> Shape<Self>;
}

macro_rules! impl_scalar {
    ($($ty:ty => $kind:ident, $access:ident;)+) => {
        $(
            impl Describe for $ty {
                fn shape() -> Shape<Self> {
                    Shape::leaf(Kind::$kind, Access::$access(Arc::new(|v: &$ty| *v)))
                }
            }
        )+
    };
}

impl_scalar! {
    bool => Bool, Bool;
    char => Char, Char;
    i8 => Int8, I8;
    i16 => Int16, I16;
    i32 => Int32, I32;
    i64 => Int64, I64;
    i128 => Int128, I128;
    isize => Isize, Isize;
    u8 => Uint8, U8;
    u16 => Uint16, U16;
    u32 => Uint32, U32;
    u64 => Uint64, U64;
    u128 => Uint128, U128;
    usize => Usize, Usize;
    f32 => Float32, F32;
    f64 => Float64, F64;
}

macro_rules! impl_text {
    ($($ty:ty => $as_str:expr;)+) => {
        $(
            impl Describe for $ty {
                fn shape() -> Shape<Self> {
                    Shape::leaf(Kind::Str, Access::Str(str_getter($as_str)))
                }
            }
        )+
    };
}

impl_text! {
    String => String::as_str;
    Box<str> => |s: &Self| &**s;
    Rc<str> => |s: &Self| &**s;
    Arc<str> => |s: &Self| &**s;
    &'static str => |s: &Self| *s;
    Cow<'static, str> => |s: &Self| &**s;
}

impl Describe for str {
    fn shape() -> Shape<Self> {
        Shape::from_parts(
            std::any::type_name::<str>(),
            Kind::Str,
            None,
            Node::Leaf(Access::Str(str_getter(|s: &str| s))),
        )
    }
}
