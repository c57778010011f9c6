// kern-math/demos/kern-table.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interpolates between the kerning of two sample masters and prints the result.

extern crate clap;
extern crate colored;
extern crate env_logger;
extern crate kern_math;
extern crate prettytable;

use clap::{App, Arg};
use colored::Colorize;
use kern_math::groups::Groups;
use kern_math::kerning::MathKerning;
use kern_math::pair::{Pair, Side};
use kern_math::source::KerningSource;
use kern_math::sources::MemSource;
use kern_math::value::KernValue;
use prettytable::{Attr, Cell, Row, Table};
use std::error::Error;

fn master(round: i64, straight: i64, exception: i64) -> MemSource {
    let mut groups = Groups::new();
    groups.insert(
        "public.kern1.O".to_owned(),
        vec!["O".to_owned(), "D".to_owned(), "Q".to_owned()],
    );
    groups.insert(
        "public.kern2.O".to_owned(),
        vec!["O".to_owned(), "C".to_owned(), "G".to_owned()],
    );
    groups.insert(
        "public.kern2.V".to_owned(),
        vec!["V".to_owned(), "W".to_owned()],
    );
    MemSource::from_parts(
        vec![
            (Pair::new("public.kern1.O", "public.kern2.V"), KernValue::Integer(round)),
            (Pair::new("public.kern1.O", "public.kern2.O"), KernValue::Integer(straight)),
            (Pair::new("Q", "public.kern2.V"), KernValue::Integer(exception)),
            (Pair::new("T", "o"), KernValue::Integer(-70)),
        ],
        groups,
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let matches = App::new("kern-table")
        .about("Interpolates kerning between a light and a bold master")
        .arg(
            Arg::with_name("scale")
                .long("scale")
                .takes_value(true)
                .help("Interpolation factor from light (0) to bold (1)"),
        )
        .arg(
            Arg::with_name("round")
                .long("round")
                .takes_value(true)
                .help("Rounds the result to a multiple of this value"),
        )
        .arg(
            Arg::with_name("add")
                .long("add")
                .takes_value(true)
                .help("Adds a constant to every pair of the result"),
        )
        .get_matches();

    let factor = matches.value_of("scale").map(str::parse::<f64>).transpose()?.unwrap_or(0.5);
    let multiple = matches.value_of("round").map(str::parse::<f64>).transpose()?;
    let shift = matches.value_of("add").map(str::parse::<i64>).transpose()?;

    let light = MathKerning::from_source(&master(-20, 0, 0));
    let bold = MathKerning::from_source(&master(-60, -10, -15));

    let mut result = light.combine_sum(&bold.combine_difference(&light).scale(factor));
    if let Some(shift) = shift {
        result.add_to(shift);
    }
    if let Some(multiple) = multiple {
        result.round(multiple)?;
    }

    let mut table = Table::new();
    table.set_format(*prettytable::format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(Row::new(vec![
        Cell::new("Left").with_style(Attr::Bold),
        Cell::new("Right").with_style(Attr::Bold),
        Cell::new("Value").with_style(Attr::Bold),
        Cell::new("Type").with_style(Attr::Bold),
    ]));
    for (pair, value) in result.sorted_items() {
        let (side1_type, side2_type) = result.guess_pair_type(&pair);
        let value = if value.to_f64() < 0.0 {
            value.to_string().red().to_string()
        } else {
            value.to_string()
        };
        table.add_row(Row::new(vec![
            Cell::new(&pair.side1),
            Cell::new(&pair.side2),
            Cell::new(&value),
            Cell::new(&format!("{} {}", side1_type, side2_type)),
        ]));
    }
    table.printstd();

    for glyph in &["D", "Q"] {
        let pair = Pair::new(*glyph, "W");
        println!(
            "{} (group {}): {}",
            pair,
            result.group_for(Side::First, glyph).unwrap_or("none"),
            result.get(&pair)
        );
    }

    let mut font = MemSource::new();
    result.extract_kerning(&mut font);
    println!(
        "Extracted {} pairs and {} groups.",
        font.kerning().len(),
        font.groups().len()
    );

    Ok(())
}
