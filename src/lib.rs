// kern-math/src/lib.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `kern-math` performs arithmetic on class-based kerning tables, as needed to interpolate and
//! extrapolate kerning between the masters of a font family.
//!
//! The central type is `kerning::MathKerning`, which pairs a sparse table of glyph and group pairs
//! with the `public.kern1.` and `public.kern2.` groups those pairs refer to. Tables can be added,
//! subtracted, scaled, and rounded; after each combination, redundant zero pairs are removed while
//! zero exceptions are kept.
//!
//! Kerning is read from a font through `source::KerningSource` and written back through
//! `source::KerningSink`. `sources::MemSource` keeps both in memory.
//!
//! Tables are plain values with no interior mutability. Separate tables may be built on separate
//! threads and combined afterward.

#![warn(missing_debug_implementations)]

#[macro_use]
extern crate log;

pub mod error;
pub mod groups;
pub mod kerning;
pub mod math;
pub mod pair;
pub mod source;
pub mod sources;
pub mod value;
