// kern-math/src/kerning.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A kerning table that resolves pairs through class kerning groups.
//!
//! The table scans a group dictionary and stores the glyph-to-group relationships it finds. That
//! map is then used to look up kerning values for glyphs that are only kerned as members of a
//! group.

use std::collections::{HashMap, HashSet};

use crate::error::KerningMathError;
use crate::groups::{self, GroupTable, Groups};
use crate::math;
use crate::pair::{Pair, PairType, Side};
use crate::source::{KerningSink, KerningSource};
use crate::value::KernValue;

/// A sparse kerning table together with the kerning groups it refers to.
///
/// Lookups fall back from literal glyph pairs to group pairs, so a glyph that belongs to a
/// kerned group picks up the group's value unless an exception names it directly:
///
///     # use kern_math::kerning::MathKerning;
///     # use kern_math::groups::Groups;
///     # use kern_math::pair::Pair;
///     # use kern_math::value::KernValue;
///     let mut groups = Groups::new();
///     groups.insert("public.kern1.A".to_owned(), vec!["A".to_owned(), "A1".to_owned()]);
///     groups.insert("public.kern2.A".to_owned(), vec!["A".to_owned(), "A1".to_owned()]);
///     let kerning = vec![(Pair::new("public.kern1.A", "public.kern2.A"), KernValue::Integer(5))];
///     let table = MathKerning::from_kerning_and_groups(kerning, &groups);
///     assert_eq!(table.get(&Pair::new("A1", "A")), 5i64);
///     assert_eq!(table.get(&Pair::new("Z", "Z")), 0i64);
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MathKerning {
    kerning: HashMap<Pair, KernValue>,
    groups: GroupTable,
}

impl MathKerning {
    /// Creates an empty table with no groups.
    #[inline]
    pub fn new() -> MathKerning {
        MathKerning::default()
    }

    /// Creates a table from kerning pairs, with no groups.
    pub fn from_kerning<I>(kerning: I) -> MathKerning
    where
        I: IntoIterator<Item = (Pair, KernValue)>,
    {
        let mut table = MathKerning::new();
        table.update(kerning);
        table
    }

    /// Creates a table from kerning pairs and a group dictionary.
    pub fn from_kerning_and_groups<I>(kerning: I, groups: &Groups) -> MathKerning
    where
        I: IntoIterator<Item = (Pair, KernValue)>,
    {
        let mut table = MathKerning::from_kerning(kerning);
        table.update_groups(groups);
        table
    }

    /// Loads the kerning and groups of a font.
    pub fn from_source<S>(source: &S) -> MathKerning
    where
        S: KerningSource + ?Sized,
    {
        MathKerning::from_kerning_and_groups(source.kerning(), &source.groups())
    }

    /// Replaces every kerning pair in this table.
    pub fn update<I>(&mut self, kerning: I)
    where
        I: IntoIterator<Item = (Pair, KernValue)>,
    {
        self.kerning = kerning.into_iter().collect();
    }

    /// Replaces the groups of this table.
    ///
    /// Groups whose names start with neither `public.kern1.` nor `public.kern2.` are ignored.
    pub fn update_groups(&mut self, groups: &Groups) {
        self.groups = GroupTable::from_groups(groups);
    }

    /// Adds `value` to every pair in place.
    ///
    /// No pairs are added or removed, and no cleanup is performed.
    pub fn add_to<V>(&mut self, value: V)
    where
        V: Into<KernValue>,
    {
        let value = value.into();
        for entry in self.kerning.values_mut() {
            *entry = *entry + value;
        }
    }

    // Map behavior

    pub fn keys(&self) -> impl Iterator<Item = &Pair> {
        self.kerning.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = KernValue> + '_ {
        self.kerning.values().cloned()
    }

    pub fn items(&self) -> impl Iterator<Item = (&Pair, KernValue)> {
        self.kerning.iter().map(|(pair, value)| (pair, *value))
    }

    /// Returns a copy of the literal pairs, sorted by pair.
    pub fn sorted_items(&self) -> Vec<(Pair, KernValue)> {
        let mut items: Vec<_> = self
            .kerning
            .iter()
            .map(|(pair, value)| (pair.clone(), *value))
            .collect();
        items.sort_by(|a, b| a.0.cmp(&b.0));
        items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.kerning.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kerning.is_empty()
    }

    /// Returns an owned copy of the kerning groups of both sides.
    #[inline]
    pub fn groups(&self) -> Groups {
        self.groups.to_groups()
    }

    #[inline]
    pub fn side1_groups(&self) -> &Groups {
        self.groups.side_groups(Side::First)
    }

    #[inline]
    pub fn side2_groups(&self) -> &Groups {
        self.groups.side_groups(Side::Second)
    }

    /// Returns the group on `side` that `glyph_name` belongs to.
    #[inline]
    pub fn group_for(&self, side: Side, glyph_name: &str) -> Option<&str> {
        self.groups.group_of(side, glyph_name)
    }

    /// Returns true if this exact pair is stored. Groups are not consulted.
    #[inline]
    pub fn contains(&self, pair: &Pair) -> bool {
        self.kerning.contains_key(pair)
    }

    fn lookup(&self, side1: Option<&str>, side2: Option<&str>) -> Option<KernValue> {
        match (side1, side2) {
            (Some(side1), Some(side2)) => self.kerning.get(&Pair::new(side1, side2)).cloned(),
            _ => None,
        }
    }

    fn contains_sides(&self, side1: Option<&str>, side2: Option<&str>) -> bool {
        self.lookup(side1, side2).is_some()
    }

    // Splits one side of a pair into its literal glyph, if it is not a group name, and the
    // group it refers to.
    fn resolve<'a>(&'a self, side: Side, name: &'a str) -> (Option<&'a str>, Option<&'a str>) {
        if side.is_group_name(name) {
            (None, Some(name))
        } else {
            (Some(name), self.groups.group_of(side, name))
        }
    }

    /// Returns the kerning value for a pair.
    ///
    /// The first of these that is stored wins:
    ///
    /// 1. the pair exactly as given;
    /// 2. the first glyph's group with the second glyph;
    /// 3. the first glyph with the second glyph's group;
    /// 4. both groups.
    ///
    /// Pairs that match nothing kern by zero.
    pub fn get(&self, pair: &Pair) -> KernValue {
        if let Some(value) = self.kerning.get(pair) {
            return *value;
        }

        let (glyph1, group1) = self.resolve(Side::First, &pair.side1);
        let (glyph2, group2) = self.resolve(Side::Second, &pair.side2);
        self.lookup(group1, glyph2)
            .or_else(|| self.lookup(glyph1, group2))
            .or_else(|| self.lookup(group1, group2))
            .unwrap_or(KernValue::ZERO)
    }

    /// Guesses whether each side of a pair is a plain glyph, a group, or an exception to a
    /// group.
    pub fn guess_pair_type(&self, pair: &Pair) -> (PairType, PairType) {
        let (side1, side2) = (&*pair.side1, &*pair.side2);
        let group1 = self.resolve(Side::First, side1).1;
        let group2 = self.resolve(Side::Second, side2).1;

        let classify = |name: &str, group: Option<&str>| match group {
            Some(group) if group == name => PairType::Group,
            Some(_) => PairType::Exception,
            None => PairType::Glyph,
        };
        let exception_or_glyph = |name: &str, group: Option<&str>| match group {
            Some(group) if group != name => PairType::Exception,
            _ => PairType::Glyph,
        };
        let group_or_glyph = |group: Option<&str>| match group {
            Some(_) => PairType::Group,
            None => PairType::Glyph,
        };

        if self.contains(pair) {
            (classify(side1, group1), classify(side2, group2))
        } else if self.contains_sides(group1, Some(side2)) {
            (PairType::Group, exception_or_glyph(side2, group2))
        } else if self.contains_sides(Some(side1), group2) {
            (exception_or_glyph(side1, group1), PairType::Group)
        } else {
            (group_or_glyph(group1), group_or_glyph(group2))
        }
    }

    // Arithmetic with another table

    /// Adds two tables pair by pair, then cleans up the result.
    ///
    /// Every pair stored in either table is evaluated in both through group fallback, and the
    /// groups of the result are the union of the groups of both tables.
    pub fn combine_sum(&self, other: &MathKerning) -> MathKerning {
        let mut table = self.combine(other, math::add);
        table.cleanup();
        table
    }

    /// Subtracts `other` from this table pair by pair, then cleans up the result.
    ///
    /// Groups are merged exactly as in `combine_sum`; they are never subtracted.
    pub fn combine_difference(&self, other: &MathKerning) -> MathKerning {
        let mut table = self.combine(other, math::sub);
        table.cleanup();
        table
    }

    fn combine<F>(&self, other: &MathKerning, op: F) -> MathKerning
    where
        F: Fn(KernValue, KernValue) -> KernValue,
    {
        let pairs: HashSet<&Pair> = self.kerning.keys().chain(other.kerning.keys()).collect();
        trace!("combining {} pairs", pairs.len());
        let kerning = pairs
            .into_iter()
            .map(|pair| (pair.clone(), op(self.get(pair), other.get(pair))));
        let groups = groups::union_groups(&self.groups(), &other.groups());
        MathKerning::from_kerning_and_groups(kerning, &groups)
    }

    // Arithmetic with a factor

    /// Multiplies every pair by `factor`, then cleans up the result. Groups are unchanged.
    pub fn scale<V>(&self, factor: V) -> MathKerning
    where
        V: Into<KernValue>,
    {
        let factor = factor.into();
        let kerning = self
            .kerning
            .iter()
            .map(|(pair, value)| (pair.clone(), math::mul(*value, factor)))
            .collect();
        let mut table = self.with_kerning(kerning);
        table.cleanup();
        table
    }

    /// Scales by the horizontal factor of a two-axis scale.
    ///
    /// Kerning is horizontal, so `_factor_y` has no effect.
    #[inline]
    pub fn scale_axes(&self, factor_x: f64, _factor_y: f64) -> MathKerning {
        self.scale(factor_x)
    }

    /// Divides every pair by `factor`, then cleans up the result. Groups are unchanged.
    ///
    /// Dividing a nonempty table by zero fails with `KerningMathError::DivisionByZero`.
    pub fn scale_reciprocal<V>(&self, factor: V) -> Result<MathKerning, KerningMathError>
    where
        V: Into<KernValue>,
    {
        let factor = factor.into();
        let kerning = self
            .kerning
            .iter()
            .map(|(pair, value)| Ok((pair.clone(), math::div(*value, factor)?)))
            .collect::<Result<HashMap<_, _>, KerningMathError>>()?;
        let mut table = self.with_kerning(kerning);
        table.cleanup();
        Ok(table)
    }

    /// Divides by the horizontal factor of a two-axis scale.
    #[inline]
    pub fn scale_reciprocal_axes(
        &self,
        factor_x: f64,
        _factor_y: f64,
    ) -> Result<MathKerning, KerningMathError> {
        self.scale_reciprocal(factor_x)
    }

    // Builds a table that shares this table's groups.
    fn with_kerning(&self, kerning: HashMap<Pair, KernValue>) -> MathKerning {
        trace!("scaled {} pairs", kerning.len());
        MathKerning {
            kerning,
            groups: self.groups.clone(),
        }
    }

    /// Rounds every pair in place to the nearest multiple of `multiple`.
    ///
    /// Halfway cases round away from zero. The results are integers, except for values that
    /// round outside the `i64` range, which stay real.
    ///
    /// A NaN or infinite value fails with `KerningMathError::NonFiniteValue`, and a zero
    /// `multiple` on a nonempty table with `KerningMathError::DivisionByZero`. On failure the
    /// table is left unchanged.
    pub fn round(&mut self, multiple: f64) -> Result<(), KerningMathError> {
        if self.kerning.is_empty() {
            return Ok(());
        }
        if self.kerning.values().any(|value| !value.to_f64().is_finite()) {
            return Err(KerningMathError::NonFiniteValue);
        }
        if multiple == 0.0 {
            return Err(KerningMathError::DivisionByZero);
        }
        for value in self.kerning.values_mut() {
            let rounded = (value.to_f64() / multiple).round() * multiple;
            *value = KernValue::Real(rounded.round()).normalized();
        }
        Ok(())
    }

    /// Normalizes values and drops redundant pairs.
    ///
    /// Integral values are stored as integers. Zero-valued pairs are removed unless either side
    /// is an exception, since a zero exception overrides a nonzero group value.
    pub fn cleanup(&mut self) {
        let mut redundant = vec![];
        for (pair, value) in self.kerning.iter_mut() {
            *value = value.normalized();
            if value.is_zero() {
                redundant.push(pair.clone());
            }
        }

        let before = self.kerning.len();
        for pair in redundant {
            let (side1_type, side2_type) = self.guess_pair_type(&pair);
            if side1_type != PairType::Exception && side2_type != PairType::Exception {
                self.kerning.remove(&pair);
            }
        }
        debug!("cleanup removed {} zero pairs", before - self.kerning.len());
    }

    /// Replaces the kerning of `font` with this table and merges this table's groups into the
    /// font's groups.
    pub fn extract_kerning<S>(&self, font: &mut S)
    where
        S: KerningSink + ?Sized,
    {
        font.clear_kerning();
        font.update_kerning(self.sorted_items());
        font.update_groups(self.groups());
    }
}
