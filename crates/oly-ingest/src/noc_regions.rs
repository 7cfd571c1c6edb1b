//! NOC-to-region lookup table.
//!
//! Consumed only by the display layer for country tick labels; the
//! aggregation core never needs it.

use std::collections::HashMap;
use std::path::Path;

use crate::csv_ingest::read_csv_table;
use crate::error::{IngestError, Result};

const NOC_COLUMN: &str = "NOC";
const REGION_COLUMN: &str = "region";

/// Load the `NOC, region, notes` lookup into a code → region map.
///
/// Entries with a missing region fall back to the NOC code itself, so a
/// lookup never produces an empty label.
pub fn read_noc_regions(path: &Path) -> Result<HashMap<String, String>> {
    let df = read_csv_table(path)?;

    let noc = df
        .column(NOC_COLUMN)
        .map_err(|_| IngestError::MissingColumn {
            column: NOC_COLUMN.to_string(),
            path: path.to_path_buf(),
        })?
        .str()?;
    let region = df
        .column(REGION_COLUMN)
        .map_err(|_| IngestError::MissingColumn {
            column: REGION_COLUMN.to_string(),
            path: path.to_path_buf(),
        })?
        .str()?;

    let mut map = HashMap::with_capacity(df.height());
    for (code, name) in noc.into_iter().zip(region.into_iter()) {
        if let Some(code) = code {
            let label = name.filter(|n| !n.trim().is_empty()).unwrap_or(code);
            map.insert(code.to_string(), label.to_string());
        }
    }

    tracing::debug!(entries = map.len(), "loaded NOC region lookup");
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_noc_regions() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "NOC,region,notes\nUSA,USA,\nSWE,Sweden,\nSGP,Singapore,\nUNK,,no region\n"
        )
        .unwrap();

        let map = read_noc_regions(file.path()).unwrap();
        assert_eq!(map.get("SWE").map(String::as_str), Some("Sweden"));
        // missing region falls back to the code
        assert_eq!(map.get("UNK").map(String::as_str), Some("UNK"));
    }

    #[test]
    fn test_missing_region_column() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "NOC,notes\nUSA,\n").unwrap();

        let result = read_noc_regions(file.path());
        assert!(matches!(result, Err(IngestError::MissingColumn { .. })));
    }
}
