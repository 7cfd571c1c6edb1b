//! CSV loading for the athlete-events source table.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;

use oly_model::columns::raw;

use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (500 MB).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Missing-value tokens used by the source file alongside empty cells.
const NULL_TOKENS: [&str; 2] = ["", "NA"];

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable, polars strips it
    Ok(())
}

/// Validate that the frame carries the columns the aggregation core needs.
pub fn validate_required_columns(df: &DataFrame, path: &Path) -> Result<()> {
    for column in raw::REQUIRED {
        if df.column(column).is_err() {
            return Err(IngestError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Reads a CSV file into a Polars DataFrame, mapping empty cells and the
/// literal `NA` token to null.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    let null_values = NullValues::AllColumns(NULL_TOKENS.iter().map(|t| (*t).into()).collect());
    let parse_options = CsvParseOptions::default().with_null_values(Some(null_values));

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .with_parse_options(parse_options)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(df)
}

/// Load and validate the athlete-events table.
///
/// Any failure here is a configuration error: the caller surfaces it and
/// stops, it is never retried.
pub fn read_athlete_events(path: &Path) -> Result<DataFrame> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let df = read_csv_table(path)?;

    if df.height() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    validate_required_columns(&df, path)?;

    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded athlete-events table"
    );

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    const HEADER: &str =
        "ID,Name,Sex,Age,Height,Weight,Team,NOC,Games,Year,Season,City,Sport,Event,Medal\n";

    #[test]
    fn test_read_athlete_events() {
        let file = create_temp_csv(&format!(
            "{HEADER}\
             1,A Person,M,24,180,80,United States,USA,2016 Summer,2016,Summer,Rio,Swimming,Swimming 100m,Gold\n\
             2,B Person,F,NA,NA,NA,Sweden,SWE,2016 Summer,2016,Summer,Rio,Swimming,Swimming 100m,\n"
        ));
        let df = read_athlete_events(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        // NA and empty cells both land as null
        assert_eq!(df.column("Age").unwrap().null_count(), 1);
        assert_eq!(df.column("Medal").unwrap().null_count(), 1);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = read_athlete_events(Path::new("/nonexistent/athlete_events.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_empty_csv_rejected() {
        let file = create_temp_csv(HEADER);
        let result = read_athlete_events(file.path());
        assert!(matches!(
            result,
            Err(IngestError::EmptyCsv { .. }) | Err(IngestError::CsvParse { .. })
        ));
    }

    #[test]
    fn test_missing_required_column_rejected() {
        let file = create_temp_csv("ID,Name,Sex\n1,A Person,M\n");
        let result = read_athlete_events(file.path());
        assert!(matches!(result, Err(IngestError::MissingColumn { .. })));
    }

    #[test]
    fn test_file_size_limit() {
        let file = create_temp_csv(&format!("{HEADER}1,A,M,24,180,80,T,USA,2016 Summer,2016,Summer,Rio,S,E,\n"));
        let result = check_file_size_with_limit(file.path(), 8);
        assert!(matches!(result, Err(IngestError::FileTooLarge { .. })));
    }

    #[test]
    fn test_utf16_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, 0x41, 0x00]).unwrap();
        let result = validate_encoding(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding { .. })
        ));
    }
}
