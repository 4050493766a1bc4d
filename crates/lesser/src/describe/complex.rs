//! Complex numbers: real part, then imaginary part.

use std::sync::Arc;

use num_complex::Complex;

use super::Describe;
use crate::shape::Access;
use crate::{Kind, Shape};

impl Describe for Complex<f32> {
    fn shape() -> Shape<Self> {
        Shape::leaf(
            Kind::Complex64,
            Access::C64 {
                re: Arc::new(|c: &Complex<f32>| c.re),
                im: Arc::new(|c: &Complex<f32>| c.im),
            },
        )
    }
}

impl Describe for Complex<f64> {
    fn shape() -> Shape<Self> {
        Shape::leaf(
            Kind::Complex128,
            Access::C128 {
                re: Arc::new(|c: &Complex<f64>| c.re),
                im: Arc::new(|c: &Complex<f64>| c.im),
            },
        )
    }
}
