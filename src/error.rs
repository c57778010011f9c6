// kern-math/src/error.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Various types of errors that `kern-math` can return.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Reasons why kerning arithmetic might fail.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum KerningMathError {
    /// A kerning table or value was divided by zero, or rounded to a multiple of zero.
    ///
    /// The caller is responsible for guarding scale factors; this is never masked.
    DivisionByZero,

    /// A NaN or infinite value was found where an integer result is required.
    NonFiniteValue,
}

impl Display for KerningMathError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            KerningMathError::DivisionByZero => write!(f, "division by zero"),
            KerningMathError::NonFiniteValue => write!(f, "non-finite kerning value"),
        }
    }
}

impl Error for KerningMathError {}
