// kern-math/tests/tests.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// General tests.

use kern_math::error::KerningMathError;
use kern_math::groups::Groups;
use kern_math::kerning::MathKerning;
use kern_math::pair::{Pair, PairType};
use kern_math::source::{KerningSink, KerningSource};
use kern_math::sources::MemSource;
use kern_math::value::KernValue;
use std::collections::HashSet;
use std::thread;

const SIDE1_GROUP: &str = "public.kern1.A";
const SIDE2_GROUP: &str = "public.kern2.A";

fn glyphs(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn a_groups() -> Groups {
    let mut groups = Groups::new();
    groups.insert(SIDE1_GROUP.to_owned(), glyphs(&["A", "A1"]));
    groups.insert(SIDE2_GROUP.to_owned(), glyphs(&["A", "A1"]));
    groups
}

fn a_table() -> MathKerning {
    MathKerning::from_kerning_and_groups(
        vec![(Pair::new(SIDE1_GROUP, SIDE2_GROUP), KernValue::Integer(5))],
        &a_groups(),
    )
}

#[test]
pub fn literal_pairs_shadow_groups() {
    let mut table = a_table();
    table.update(vec![
        (Pair::new(SIDE1_GROUP, SIDE2_GROUP), KernValue::Integer(5)),
        (Pair::new("A1", "A1"), KernValue::Integer(-7)),
    ]);
    assert_eq!(table.get(&Pair::new("A1", "A1")), -7i64);
    assert_eq!(table.get(&Pair::new("A", "A1")), 5i64);
}

#[test]
pub fn group_fallback() {
    let table = a_table();
    assert_eq!(table.get(&Pair::new("A1", "A")), 5i64);
    assert_eq!(table.get(&Pair::new("A", "A1")), 5i64);
    assert_eq!(table.get(&Pair::new("A1", "A1")), 5i64);
}

#[test]
pub fn unknown_pair_is_zero() {
    let table = a_table();
    assert_eq!(table.get(&Pair::new("Z", "Z")), 0i64);
    assert_eq!(MathKerning::new().get(&Pair::new("Z", "Z")), 0i64);
}

#[test]
pub fn adding_empty_table_is_identity() {
    let table = a_table();
    assert_eq!(table.combine_sum(&MathKerning::new()), table);
}

#[test]
pub fn subtracting_table_from_itself_is_empty() {
    let table = a_table();
    let difference = table.combine_difference(&table);
    assert!(difference.is_empty());
    assert_eq!(difference.groups(), table.groups());
}

#[test]
pub fn combination_unions_group_members() {
    let mut groups1 = Groups::new();
    groups1.insert("public.kern1.G".to_owned(), glyphs(&["C"]));
    let mut groups2 = Groups::new();
    groups2.insert("public.kern1.G".to_owned(), glyphs(&["D"]));

    let table1 = MathKerning::from_kerning_and_groups(vec![], &groups1);
    let table2 = MathKerning::from_kerning_and_groups(vec![], &groups2);
    for combined in &[table1.combine_sum(&table2), table1.combine_difference(&table2)] {
        let members: HashSet<String> =
            combined.groups()["public.kern1.G"].iter().cloned().collect();
        let expected: HashSet<String> = glyphs(&["C", "D"]).into_iter().collect();
        assert_eq!(members, expected);
    }
}

#[test]
pub fn cleanup_is_idempotent() {
    let mut table = MathKerning::from_kerning_and_groups(
        vec![
            (Pair::new("T", "V"), KernValue::Real(0.0)),
            (Pair::new("A1", SIDE2_GROUP), KernValue::Integer(0)),
            (Pair::new("T", "o"), KernValue::Real(-80.0)),
            (Pair::new("T", "a"), KernValue::Real(-72.5)),
        ],
        &a_groups(),
    );
    table.cleanup();
    let once = table.sorted_items();
    table.cleanup();
    assert_eq!(table.sorted_items(), once);
    assert_eq!(once.len(), 3);
}

#[test]
pub fn scaling_leaves_groups_untouched() {
    let table = a_table();
    let scaled = table.scale(2i64);
    assert_eq!(scaled.groups(), table.groups());
    assert_eq!(scaled.get(&Pair::new("A", "A")), 10i64);

    let halved = table.scale_reciprocal(2i64).unwrap();
    assert_eq!(halved.groups(), table.groups());
    assert_eq!(halved.get(&Pair::new("A", "A")), 2.5f64);
}

#[test]
pub fn interpolating_between_masters() {
    let light = a_table();
    let mut bold = a_table();
    bold.add_to(15i64);

    // light + (bold - light) * 0.5
    let delta = bold.combine_difference(&light);
    let mut middle = light.combine_sum(&delta.scale(0.5));
    assert_eq!(middle.get(&Pair::new("A", "A1")), 12.5f64);
    middle.round(1.0).unwrap();
    assert_eq!(middle.get(&Pair::new("A", "A1")), 13i64);
}

#[test]
pub fn rounding_to_multiple_of_five() {
    let mut table = MathKerning::from_kerning(vec![
        (Pair::new("A", "A"), KernValue::Real(1.99)),
        (Pair::new("B", "B"), KernValue::Integer(4)),
        (Pair::new("C", "C"), KernValue::Integer(7)),
        (Pair::new("D", "D"), KernValue::Real(9.01)),
    ]);
    table.round(5.0).unwrap();
    assert_eq!(table.get(&Pair::new("A", "A")), 0i64);
    assert_eq!(table.get(&Pair::new("B", "B")), 5i64);
    assert_eq!(table.get(&Pair::new("C", "C")), 5i64);
    assert_eq!(table.get(&Pair::new("D", "D")), 10i64);
}

#[test]
pub fn zero_exceptions_survive_cleanup() {
    let mut table = MathKerning::from_kerning_and_groups(
        vec![
            (Pair::new(SIDE1_GROUP, SIDE2_GROUP), KernValue::Integer(-30)),
            (Pair::new("A1", SIDE2_GROUP), KernValue::Integer(0)),
            (Pair::new("X", "Y"), KernValue::Integer(0)),
        ],
        &a_groups(),
    );
    assert_eq!(
        table.guess_pair_type(&Pair::new("A1", SIDE2_GROUP)),
        (PairType::Exception, PairType::Group)
    );
    assert_eq!(
        table.guess_pair_type(&Pair::new("X", "Y")),
        (PairType::Glyph, PairType::Glyph)
    );
    table.cleanup();
    assert!(table.contains(&Pair::new("A1", SIDE2_GROUP)));
    assert!(!table.contains(&Pair::new("X", "Y")));
    assert_eq!(table.get(&Pair::new("A1", "A")), 0i64);
    assert_eq!(table.get(&Pair::new("A", "A")), -30i64);
}

#[test]
pub fn division_by_zero_is_reported() {
    let error = a_table().scale_reciprocal(0.0).unwrap_err();
    assert_eq!(error, KerningMathError::DivisionByZero);
    assert_eq!(error.to_string(), "division by zero");
}

#[test]
pub fn load_from_source() {
    let mut groups = a_groups();
    groups.insert("accented".to_owned(), glyphs(&["Aacute", "Agrave"]));
    let source = MemSource::from_parts(
        vec![(Pair::new(SIDE1_GROUP, "V"), KernValue::Integer(-50))],
        groups,
    );
    assert_eq!(source.groups().len(), 3);

    let table = MathKerning::from_source(&source);
    assert_eq!(table.get(&Pair::new("A1", "V")), -50i64);
    assert_eq!(table.groups().len(), 2);
}

#[test]
pub fn extract_into_font() {
    let mut font_groups = Groups::new();
    font_groups.insert("accented".to_owned(), glyphs(&["Aacute"]));
    font_groups.insert(SIDE1_GROUP.to_owned(), glyphs(&["A"]));
    let mut font = MemSource::from_parts(
        vec![(Pair::new("stale", "pair"), KernValue::Integer(1))],
        font_groups,
    );

    a_table().extract_kerning(&mut font);

    assert_eq!(font.kerning_map().len(), 1);
    assert_eq!(
        font.kerning_map()[&Pair::new(SIDE1_GROUP, SIDE2_GROUP)],
        5i64
    );
    assert_eq!(font.groups_map().len(), 3);
    assert_eq!(font.groups_map()[SIDE1_GROUP], glyphs(&["A", "A1"]));
    assert!(font.groups_map().contains_key("accented"));
}

#[test]
pub fn sink_updates_merge() {
    let mut font = MemSource::new();
    font.update_kerning(vec![(Pair::new("a", "b"), KernValue::Integer(1))]);
    font.update_kerning(vec![(Pair::new("c", "d"), KernValue::Integer(2))]);
    assert_eq!(font.kerning().len(), 2);
    font.clear_kerning();
    assert!(font.kerning().is_empty());
}

#[test]
pub fn independent_tables_combine_across_threads() {
    let masters: Vec<_> = (1..=4i64)
        .map(|weight| {
            thread::spawn(move || {
                let mut table = a_table();
                table.add_to(weight);
                table
            })
        })
        .collect();
    let total = masters
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .fold(MathKerning::new(), |sum, table| sum.combine_sum(&table));
    assert_eq!(total.get(&Pair::new("A", "A")), 30i64);
    assert_eq!(total.groups(), a_table().groups());
}
