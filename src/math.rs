// kern-math/src/math.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Scalar operations shared by the kerning table arithmetic.

use crate::error::KerningMathError;
use crate::value::KernValue;

#[inline]
pub fn add(a: KernValue, b: KernValue) -> KernValue {
    a + b
}

#[inline]
pub fn sub(a: KernValue, b: KernValue) -> KernValue {
    a - b
}

#[inline]
pub fn mul(value: KernValue, factor: KernValue) -> KernValue {
    value * factor
}

/// True division. The result is always real, even for two integers.
pub fn div(value: KernValue, factor: KernValue) -> Result<KernValue, KerningMathError> {
    if factor.is_zero() {
        return Err(KerningMathError::DivisionByZero);
    }
    Ok(KernValue::Real(value.to_f64() / factor.to_f64()))
}

/// Rounds `n` half away from zero.
///
/// With no `digits`, the result is an integer, unless `n` is not finite or rounds outside the
/// `i64` range. Otherwise the result is a real rounded to that
/// many decimal places.
///
///     # use kern_math::math::round_number;
///     assert_eq!(round_number(0.5, None), 1i64);
///     assert_eq!(round_number(-0.499, None), 0i64);
///     assert_eq!(round_number(0.3333, Some(2)), 0.33f64);
pub fn round_number(n: f64, digits: Option<u32>) -> KernValue {
    match digits {
        None => KernValue::Real(n.round()).normalized(),
        Some(digits) => {
            let scale = 10f64.powi(digits as i32);
            KernValue::Real((n * scale).round() / scale)
        }
    }
}
