//! Rendering of derived tables for terminal and machine consumers.

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::*;
use serde_json::{Map, Value};

use oly_core::data_utils::any_to_string;

/// Render a derived table as a terminal table. Null cells are blank,
/// numeric columns are right-aligned.
pub fn frame_table(df: &DataFrame) -> Result<Table> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(
        df.get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );

    for (index, column) in df.get_columns().iter().enumerate() {
        if column.dtype().is_primitive_numeric()
            && let Some(col) = table.column_mut(index)
        {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for idx in 0..df.height() {
        let mut row = Vec::with_capacity(df.width());
        for column in df.get_columns() {
            row.push(Cell::new(any_to_string(column.get(idx)?)));
        }
        table.add_row(row);
    }

    Ok(table)
}

/// Convert a derived table to a JSON array of row objects.
///
/// Integers and floats stay numbers, nulls stay null. Column order inside
/// each object follows the frame.
pub fn frame_to_json(df: &DataFrame) -> Result<Value> {
    let names = df.get_column_names();
    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut object = Map::with_capacity(df.width());
        for (name, column) in names.iter().zip(df.get_columns()) {
            object.insert(name.to_string(), any_to_json(column.get(idx)?));
        }
        rows.push(Value::Object(object));
    }
    Ok(Value::Array(rows))
}

fn any_to_json(value: AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(v) => Value::Bool(v),
        AnyValue::Int8(v) => Value::Number(v.into()),
        AnyValue::Int16(v) => Value::Number(v.into()),
        AnyValue::Int32(v) => Value::Number(v.into()),
        AnyValue::Int64(v) => Value::Number(v.into()),
        AnyValue::UInt8(v) => Value::Number(v.into()),
        AnyValue::UInt16(v) => Value::Number(v.into()),
        AnyValue::UInt32(v) => Value::Number(v.into()),
        AnyValue::UInt64(v) => Value::Number(v.into()),
        AnyValue::Float32(v) => json_number(f64::from(v)),
        AnyValue::Float64(v) => json_number(v),
        AnyValue::String(s) => Value::String(s.to_string()),
        AnyValue::StringOwned(s) => Value::String(s.to_string()),
        other => Value::String(any_to_string(other)),
    }
}

fn json_number(v: f64) -> Value {
    // NaN and infinities have no JSON representation
    serde_json::Number::from_f64(v).map_or(Value::Null, Value::Number)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
