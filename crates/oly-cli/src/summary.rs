//! Terminal and JSON printing of aggregation results.

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use polars::prelude::DataFrame;
use serde_json::json;

use oly_cli::render::{frame_table, frame_to_json};
use oly_core::AgeDistribution;
use oly_core::data_utils::round_to;

pub fn print_frame(df: &DataFrame, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&frame_to_json(df)?)?);
    } else {
        println!("{}", frame_table(df)?);
    }
    Ok(())
}

pub fn print_labels(labels: &[String], as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&json!(labels))?);
    } else {
        for label in labels {
            println!("{label}");
        }
    }
    Ok(())
}

/// JSON mode carries the full per-sex samples for plotting; table mode
/// condenses them to count, min, mean, and max per sex.
pub fn print_ages(ages: &AgeDistribution, as_json: bool) -> Result<()> {
    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "male": ages.male,
                "female": ages.female,
            }))?
        );
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["sex", "entries", "min", "mean", "max"]);
    for index in 1..table.column_count() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table.add_row(sample_row("M", &ages.male));
    table.add_row(sample_row("F", &ages.female));
    println!("{table}");
    Ok(())
}

fn sample_row(label: &str, samples: &[f64]) -> Vec<Cell> {
    if samples.is_empty() {
        return vec![
            Cell::new(label),
            Cell::new(0),
            Cell::new(""),
            Cell::new(""),
            Cell::new(""),
        ];
    }
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    vec![
        Cell::new(label),
        Cell::new(samples.len()),
        Cell::new(min),
        Cell::new(round_to(mean, 1)),
        Cell::new(max),
    ]
}
