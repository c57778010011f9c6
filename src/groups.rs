// kern-math/src/groups.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Kerning group dictionaries and the reverse glyph-to-group lookups derived from them.

use std::collections::{HashMap, HashSet};

use crate::pair::Side;

/// A mapping from group name to the ordered list of glyph names in that group.
pub type Groups = HashMap<String, Vec<String>>;

/// The kerning groups of one font, split by side.
///
/// The per-side dictionaries are authoritative. The reverse maps exist only for fast lookup and
/// are rebuilt whenever the groups are loaded. If a glyph is listed in two groups of the same
/// side, whichever group is visited last owns it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupTable {
    side1_groups: Groups,
    side2_groups: Groups,
    side1_map: HashMap<String, String>,
    side2_map: HashMap<String, String>,
}

impl GroupTable {
    #[inline]
    pub fn new() -> GroupTable {
        GroupTable::default()
    }

    /// Loads groups from a dictionary, keeping only those whose names carry a kerning prefix.
    pub fn from_groups<'a, I>(groups: I) -> GroupTable
    where
        I: IntoIterator<Item = (&'a String, &'a Vec<String>)>,
    {
        let mut table = GroupTable::new();
        for (group_name, glyph_names) in groups {
            let side = match Side::of_group_name(group_name) {
                Some(side) => side,
                None => {
                    debug!("ignoring non-kerning group {:?}", group_name);
                    continue;
                }
            };
            let (side_groups, side_map) = table.side_mut(side);
            for glyph_name in glyph_names {
                side_map.insert(glyph_name.clone(), group_name.clone());
            }
            side_groups.insert(group_name.clone(), glyph_names.clone());
        }
        table
    }

    fn side_mut(&mut self, side: Side) -> (&mut Groups, &mut HashMap<String, String>) {
        match side {
            Side::First => (&mut self.side1_groups, &mut self.side1_map),
            Side::Second => (&mut self.side2_groups, &mut self.side2_map),
        }
    }

    /// Returns the groups of one side.
    #[inline]
    pub fn side_groups(&self, side: Side) -> &Groups {
        match side {
            Side::First => &self.side1_groups,
            Side::Second => &self.side2_groups,
        }
    }

    /// Returns the name of the group on `side` that contains `glyph_name`, if any.
    #[inline]
    pub fn group_of(&self, side: Side, glyph_name: &str) -> Option<&str> {
        let map = match side {
            Side::First => &self.side1_map,
            Side::Second => &self.side2_map,
        };
        map.get(glyph_name).map(|group_name| &**group_name)
    }

    /// Returns an owned copy of the groups of both sides in one dictionary.
    pub fn to_groups(&self) -> Groups {
        self.side1_groups
            .iter()
            .chain(self.side2_groups.iter())
            .map(|(name, glyphs)| (name.clone(), glyphs.clone()))
            .collect()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.side1_groups.is_empty() && self.side2_groups.is_empty()
    }
}

/// Combines two group dictionaries.
///
/// Identical dictionaries are returned as they are. Otherwise every group named in either
/// dictionary receives the union of its members: the members of `a` in order, followed by the
/// members of `b` that `a` lacks.
pub fn union_groups(a: &Groups, b: &Groups) -> Groups {
    if a == b {
        return a.clone();
    }

    let mut groups = Groups::with_capacity(a.len().max(b.len()));
    for group_name in a.keys().chain(b.keys()) {
        if groups.contains_key(group_name) {
            continue;
        }
        let mut seen = HashSet::new();
        let members = a
            .get(group_name)
            .into_iter()
            .chain(b.get(group_name))
            .flatten()
            .filter(|glyph_name| seen.insert(*glyph_name))
            .cloned()
            .collect();
        groups.insert(group_name.clone(), members);
    }
    groups
}
