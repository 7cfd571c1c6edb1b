//! Source CSV to rendered output, through the real reader.

use std::io::Write;

use oly_cli::render::{frame_table, frame_to_json};
use oly_core::{EventsRepository, medals_per_games};
use tempfile::NamedTempFile;

const HEADER: &str =
    "ID,Name,Sex,Age,Height,Weight,Team,NOC,Games,Year,Season,City,Sport,Event,Medal\n";

fn write_csv(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(HEADER.as_bytes()).unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn csv_to_medal_summary() {
    // a two-man USA relay (one award) plus a Swedish silver
    let file = write_csv(&[
        "1,A Runner,M,24,180,70,United States,USA,2016 Summer,2016,Summer,Rio,Athletics,4x100m Relay,Gold",
        "2,B Runner,M,NA,NA,NA,United States,USA,2016 Summer,2016,Summer,Rio,Athletics,4x100m Relay,Gold",
        "3,C Walker,M,30,175,68,Sweden,SWE,2016 Summer,2016,Summer,Rio,Athletics,20km Walk,Silver",
        "4,D Jumper,F,22,168,55,Sweden,SWE,2016 Summer,2016,Summer,Rio,Athletics,High Jump,",
    ]);

    let repo = EventsRepository::from_csv(file.path()).unwrap();
    let df = medals_per_games(&repo).unwrap();
    assert_eq!(df.height(), 1);

    let json = frame_to_json(&df).unwrap();
    let row = &json.as_array().unwrap()[0];
    assert_eq!(row["games"], "2016 Summer");
    assert_eq!(row["medals_usa_count"], 1);
    assert_eq!(row["medals_world_count"], 2);
    assert_eq!(row["percentage"], 50.0);
    assert_eq!(row["year"], 2016);
    assert_eq!(row["season"], "Summer");
}

#[test]
fn table_output_carries_the_same_cells() {
    let file = write_csv(&[
        "1,A Runner,M,24,180,70,United States,USA,2016 Summer,2016,Summer,Rio,Athletics,100m,Gold",
    ]);

    let repo = EventsRepository::from_csv(file.path()).unwrap();
    let df = medals_per_games(&repo).unwrap();
    let rendered = frame_table(&df).unwrap().to_string();

    assert!(rendered.contains("2016 Summer"));
    assert!(rendered.contains("100"));
}
