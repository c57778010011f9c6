// kern-math/src/value.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Kerning values, which may be either integral or fractional.

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Mul, Neg, Sub};

/// A kerning adjustment in font units.
///
/// Arithmetic between two integers stays integral unless the result leaves the `i64` range, in
/// which case it becomes a real. Anything involving a real yields a real.
/// Equality is numeric, so `Integer(1) == Real(1.0)`.
#[derive(Clone, Copy, Debug)]
pub enum KernValue {
    /// An integral value.
    Integer(i64),
    /// A fractional value, typically the result of interpolation.
    Real(f64),
}

impl KernValue {
    /// The additive identity, returned for pairs that have no kerning.
    pub const ZERO: KernValue = KernValue::Integer(0);

    /// Returns this value as a floating-point number.
    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            KernValue::Integer(value) => value as f64,
            KernValue::Real(value) => value,
        }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            KernValue::Integer(value) => value == 0,
            KernValue::Real(value) => value == 0.0,
        }
    }

    /// Returns true if this value has no fractional part.
    pub fn is_integral(self) -> bool {
        match self {
            KernValue::Integer(_) => true,
            KernValue::Real(value) => {
                value.is_finite()
                    && value.fract() == 0.0
                    && value >= i64::MIN as f64
                    && value < i64::MAX as f64
            }
        }
    }

    /// Narrows an integral real to an integer without changing its value.
    ///
    /// Non-finite and fractional reals are returned unchanged.
    pub fn normalized(self) -> KernValue {
        match self {
            KernValue::Real(value) if self.is_integral() => KernValue::Integer(value as i64),
            other => other,
        }
    }
}

impl Default for KernValue {
    #[inline]
    fn default() -> KernValue {
        KernValue::ZERO
    }
}

impl From<i64> for KernValue {
    #[inline]
    fn from(value: i64) -> KernValue {
        KernValue::Integer(value)
    }
}

impl From<i32> for KernValue {
    #[inline]
    fn from(value: i32) -> KernValue {
        KernValue::Integer(value as i64)
    }
}

impl From<f64> for KernValue {
    #[inline]
    fn from(value: f64) -> KernValue {
        KernValue::Real(value)
    }
}

impl PartialEq for KernValue {
    fn eq(&self, other: &KernValue) -> bool {
        match (*self, *other) {
            (KernValue::Integer(a), KernValue::Integer(b)) => a == b,
            (a, b) => a.to_f64() == b.to_f64(),
        }
    }
}

impl PartialEq<i64> for KernValue {
    #[inline]
    fn eq(&self, other: &i64) -> bool {
        *self == KernValue::Integer(*other)
    }
}

impl PartialEq<f64> for KernValue {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        *self == KernValue::Real(*other)
    }
}

impl Add for KernValue {
    type Output = KernValue;

    fn add(self, other: KernValue) -> KernValue {
        match (self, other) {
            (KernValue::Integer(a), KernValue::Integer(b)) => match a.checked_add(b) {
                Some(value) => KernValue::Integer(value),
                None => KernValue::Real(a as f64 + b as f64),
            },
            (a, b) => KernValue::Real(a.to_f64() + b.to_f64()),
        }
    }
}

impl Sub for KernValue {
    type Output = KernValue;

    fn sub(self, other: KernValue) -> KernValue {
        match (self, other) {
            (KernValue::Integer(a), KernValue::Integer(b)) => match a.checked_sub(b) {
                Some(value) => KernValue::Integer(value),
                None => KernValue::Real(a as f64 - b as f64),
            },
            (a, b) => KernValue::Real(a.to_f64() - b.to_f64()),
        }
    }
}

impl Mul for KernValue {
    type Output = KernValue;

    fn mul(self, other: KernValue) -> KernValue {
        match (self, other) {
            (KernValue::Integer(a), KernValue::Integer(b)) => match a.checked_mul(b) {
                Some(value) => KernValue::Integer(value),
                None => KernValue::Real(a as f64 * b as f64),
            },
            (a, b) => KernValue::Real(a.to_f64() * b.to_f64()),
        }
    }
}

impl Neg for KernValue {
    type Output = KernValue;

    fn neg(self) -> KernValue {
        match self {
            KernValue::Integer(value) => match value.checked_neg() {
                Some(value) => KernValue::Integer(value),
                None => KernValue::Real(-(value as f64)),
            },
            KernValue::Real(value) => KernValue::Real(-value),
        }
    }
}

impl Display for KernValue {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            KernValue::Integer(value) => Display::fmt(&value, f),
            KernValue::Real(value) => Display::fmt(&value, f),
        }
    }
}
