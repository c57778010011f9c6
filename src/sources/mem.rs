// kern-math/src/sources/mem.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A source that keeps kerning in memory.

use std::collections::HashMap;

use crate::groups::Groups;
use crate::pair::Pair;
use crate::source::{KerningSink, KerningSource};
use crate::value::KernValue;

/// Kerning pairs and groups held in memory, standing in for a font's kerning data.
#[derive(Clone, Debug, Default)]
pub struct MemSource {
    kerning: HashMap<Pair, KernValue>,
    groups: Groups,
}

impl MemSource {
    /// Creates a source with no kerning and no groups.
    #[inline]
    pub fn new() -> MemSource {
        MemSource::default()
    }

    pub fn from_parts<I>(kerning: I, groups: Groups) -> MemSource
    where
        I: IntoIterator<Item = (Pair, KernValue)>,
    {
        MemSource {
            kerning: kerning.into_iter().collect(),
            groups,
        }
    }

    #[inline]
    pub fn kerning_map(&self) -> &HashMap<Pair, KernValue> {
        &self.kerning
    }

    #[inline]
    pub fn groups_map(&self) -> &Groups {
        &self.groups
    }
}

impl KerningSource for MemSource {
    fn kerning(&self) -> Vec<(Pair, KernValue)> {
        self.kerning
            .iter()
            .map(|(pair, value)| (pair.clone(), *value))
            .collect()
    }

    #[inline]
    fn groups(&self) -> Groups {
        self.groups.clone()
    }
}

impl KerningSink for MemSource {
    #[inline]
    fn clear_kerning(&mut self) {
        self.kerning.clear()
    }

    #[inline]
    fn update_kerning(&mut self, kerning: Vec<(Pair, KernValue)>) {
        self.kerning.extend(kerning)
    }

    #[inline]
    fn update_groups(&mut self, groups: Groups) {
        self.groups.extend(groups)
    }
}
