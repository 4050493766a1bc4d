//! Handles ordered by address, and open values.

use std::any::Any;
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

use super::Describe;
use crate::{Kind, Shape};

#[inline]
fn address<T>(ptr: *const T) -> usize {
    ptr as usize
}

impl<T: 'static> Describe for Box<T> {
    fn shape() -> Shape<Self> {
        Shape::handle(Kind::Ptr, |p: &Self| address::<T>(&**p))
    }
}

impl<T: 'static> Describe for Rc<T> {
    fn shape() -> Shape<Self> {
        Shape::handle(Kind::Ptr, |p: &Rc<T>| address(Rc::as_ptr(p)))
    }
}

impl<T: 'static> Describe for Arc<T> {
    fn shape() -> Shape<Self> {
        Shape::handle(Kind::Ptr, |p: &Arc<T>| address(Arc::as_ptr(p)))
    }
}

impl<T: 'static> Describe for &'static T {
    fn shape() -> Shape<Self> {
        Shape::handle(Kind::Ptr, |p: &&'static T| address::<T>(*p))
    }
}

impl<T: 'static> Describe for NonNull<T> {
    fn shape() -> Shape<Self> {
        Shape::handle(Kind::Ptr, |p: &NonNull<T>| address(p.as_ptr()))
    }
}

impl<T: 'static> Describe for *const T {
    fn shape() -> Shape<Self> {
        Shape::handle(Kind::UnsafePtr, |p: &*const T| address(*p))
    }
}

impl<T: 'static> Describe for *mut T {
    fn shape() -> Shape<Self> {
        Shape::handle(Kind::UnsafePtr, |p: &*mut T| address(p.cast_const()))
    }
}

macro_rules! impl_fn_ptr {
    ($($arg:ident),*) => {
        impl<R: 'static, $($arg: 'static),*> Describe for fn($($arg),*) -> R {
            fn shape() -> Shape<Self> {
                Shape::handle(Kind::Func, |f: &Self| *f as usize)
            }
        }
    };
}

impl_fn_ptr!();
impl_fn_ptr!(A);
impl_fn_ptr!(A, B);
impl_fn_ptr!(A, B, C);
impl_fn_ptr!(A, B, C, D);

macro_rules! impl_open {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Describe for $ty {
                fn shape() -> Shape<Self> {
                    Shape::open()
                }
            }
        )+
    };
}

impl_open!(
    dyn Any,
    dyn Any + Send,
    dyn Any + Send + Sync,
    Box<dyn Any>,
    Box<dyn Any + Send>,
    Box<dyn Any + Send + Sync>,
    Rc<dyn Any>,
    Arc<dyn Any + Send + Sync>,
);
