// kern-math/src/source.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The interfaces through which kerning is read from and written back to a font.

use crate::groups::Groups;
use crate::pair::Pair;
use crate::value::KernValue;

/// A font, or anything else, that can supply kerning pairs and groups.
pub trait KerningSource {
    /// Returns every kerning pair with its value.
    fn kerning(&self) -> Vec<(Pair, KernValue)>;

    /// Returns every group, kerning or otherwise. Non-kerning groups are ignored by the reader.
    fn groups(&self) -> Groups;
}

/// A font that kerning can be written into.
pub trait KerningSink {
    /// Removes every kerning pair.
    fn clear_kerning(&mut self);

    /// Adds or replaces kerning pairs.
    fn update_kerning(&mut self, kerning: Vec<(Pair, KernValue)>);

    /// Adds or replaces groups. Groups that are not mentioned are left alone.
    fn update_groups(&mut self, groups: Groups);
}
