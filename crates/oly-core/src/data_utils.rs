//! Polars value helpers shared by the repository and the aggregation engine.

use anyhow::Result;
use polars::prelude::*;

/// Converts a Polars AnyValue to a String representation.
/// Returns empty string for Null, properly formats numeric types.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    // integral floats print without a '.'; trimming zeros there would eat
    // real digits (30.0 -> "3")
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Converts an AnyValue to f64, returning None for non-numeric or null values.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// Rounds half away from zero to the given number of decimals.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Replaces a Float64 column with its values rounded to `decimals` places.
/// Nulls stay null.
pub fn round_float_column(df: &mut DataFrame, name: &str, decimals: u32) -> Result<()> {
    let rounded: Vec<Option<f64>> = df
        .column(name)?
        .f64()?
        .into_iter()
        .map(|value| value.map(|v| round_to(v, decimals)))
        .collect();
    df.with_column(Series::new(name.into(), rounded))?;
    Ok(())
}

/// Keeps the first row for each distinct combination of the key columns.
///
/// Row order of survivors is the input order, so the rule is idempotent:
/// applying it twice yields the same row set as applying it once.
pub fn dedup_by_keys(df: &DataFrame, keys: &[&str]) -> Result<DataFrame> {
    use std::collections::HashSet;

    let columns: Vec<&Column> = keys
        .iter()
        .map(|name| df.column(name))
        .collect::<PolarsResult<Vec<_>>>()?;

    let mut seen: HashSet<String> = HashSet::with_capacity(df.height());
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut composite = String::new();
        for column in &columns {
            composite.push_str(&any_to_string(column.get(idx)?));
            // unit separator keeps "a|bc" and "ab|c" keys distinct
            composite.push('\u{1f}');
        }
        keep.push(seen.insert(composite));
    }

    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(66.666_666, 1), 66.7);
        assert_eq!(round_to(33.333_333, 1), 33.3);
        assert_eq!(round_to(190.456, 2), 190.46);
    }

    #[test]
    fn test_format_numeric_integral_floats_keep_their_digits() {
        assert_eq!(format_numeric(30.0), "30");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(60.0), "60");
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(round_to(30.0, 1)), "30");
    }

    #[test]
    fn test_format_numeric_trims_fractional_zeros() {
        assert_eq!(format_numeric(12.50), "12.5");
        assert_eq!(format_numeric(66.7), "66.7");
        assert_eq!(format_numeric(-2.40), "-2.4");
    }

    #[test]
    fn test_dedup_keeps_first() {
        let df = df!(
            "a" => ["x", "x", "y"],
            "b" => [1, 1, 1],
            "payload" => ["first", "second", "third"],
        )
        .unwrap();

        let out = dedup_by_keys(&df, &["a", "b"]).unwrap();
        assert_eq!(out.height(), 2);
        let payload = out.column("payload").unwrap().str().unwrap();
        assert_eq!(payload.get(0), Some("first"));
        assert_eq!(payload.get(1), Some("third"));
    }

    #[test]
    fn test_dedup_key_boundaries() {
        // "ab"+"c" must not collide with "a"+"bc"
        let df = df!(
            "a" => ["ab", "a"],
            "b" => ["c", "bc"],
        )
        .unwrap();

        let out = dedup_by_keys(&df, &["a", "b"]).unwrap();
        assert_eq!(out.height(), 2);
    }

    #[test]
    fn test_round_float_column_preserves_nulls() {
        let mut df = df!(
            "pct" => [Some(12.345_f64), None, Some(99.99)],
        )
        .unwrap();

        round_float_column(&mut df, "pct", 1).unwrap();
        let pct = df.column("pct").unwrap().f64().unwrap();
        assert_eq!(pct.get(0), Some(12.3));
        assert_eq!(pct.get(1), None);
        assert_eq!(pct.get(2), Some(100.0));
    }
}
