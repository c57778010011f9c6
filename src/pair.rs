// kern-math/src/pair.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Kerning pair keys and the classification of their sides.

use std::fmt::{self, Debug, Display, Formatter};

/// The prefix that marks a group name as a first-side (left) kerning group.
pub const SIDE1_PREFIX: &str = "public.kern1.";
/// The prefix that marks a group name as a second-side (right) kerning group.
pub const SIDE2_PREFIX: &str = "public.kern2.";

/// One of the two positions in a kerning pair.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Side {
    /// The left side of the pair.
    First,
    /// The right side of the pair.
    Second,
}

impl Side {
    /// Returns the group name prefix reserved for this side.
    #[inline]
    pub fn prefix(self) -> &'static str {
        match self {
            Side::First => SIDE1_PREFIX,
            Side::Second => SIDE2_PREFIX,
        }
    }

    /// Returns true if `name` carries this side's group prefix.
    #[inline]
    pub fn is_group_name(self, name: &str) -> bool {
        name.starts_with(self.prefix())
    }

    /// Classifies a group name by its prefix.
    ///
    /// The first-side prefix is checked first. Names that carry neither prefix are not kerning
    /// groups and yield `None`.
    pub fn of_group_name(name: &str) -> Option<Side> {
        if Side::First.is_group_name(name) {
            Some(Side::First)
        } else if Side::Second.is_group_name(name) {
            Some(Side::Second)
        } else {
            None
        }
    }
}

/// An ordered pair of glyph or group names addressing one kerning adjustment.
///
/// Each side is either a literal glyph name or a group name carrying that side's prefix.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair {
    /// The left glyph or `public.kern1.` group.
    pub side1: String,
    /// The right glyph or `public.kern2.` group.
    pub side2: String,
}

impl Pair {
    /// Creates a new pair.
    #[inline]
    pub fn new<S1, S2>(side1: S1, side2: S2) -> Pair
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Pair {
            side1: side1.into(),
            side2: side2.into(),
        }
    }

    /// Returns the name on the given side.
    #[inline]
    pub fn side(&self, side: Side) -> &str {
        match side {
            Side::First => &self.side1,
            Side::Second => &self.side2,
        }
    }
}

impl<S1, S2> From<(S1, S2)> for Pair
where
    S1: Into<String>,
    S2: Into<String>,
{
    #[inline]
    fn from((side1, side2): (S1, S2)) -> Pair {
        Pair::new(side1, side2)
    }
}

impl Debug for Pair {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.side1, self.side2)
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {}", self.side1, self.side2)
    }
}

/// How one side of a pair participates in the kerning lookup.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum PairType {
    /// A glyph that belongs to no group on this side.
    Glyph,
    /// A group, or a glyph whose value comes from its group.
    Group,
    /// A grouped glyph named literally, overriding its group's value.
    Exception,
}

impl Display for PairType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match *self {
            PairType::Glyph => "glyph",
            PairType::Group => "group",
            PairType::Exception => "exception",
        };
        f.write_str(name)
    }
}
