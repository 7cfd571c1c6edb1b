//! Synthetic raw-table fixtures for the aggregation tests.

use polars::prelude::*;

#[derive(Debug, Clone)]
pub struct TestRow {
    pub id: i64,
    pub sex: &'static str,
    pub age: Option<f64>,
    pub height: Option<f64>,
    pub noc: &'static str,
    pub games: &'static str,
    pub sport: &'static str,
    pub event: &'static str,
    pub medal: Option<&'static str>,
}

/// One athlete-event row; age and height default to missing.
pub fn ev(
    id: i64,
    sex: &'static str,
    noc: &'static str,
    games: &'static str,
    sport: &'static str,
    event: &'static str,
    medal: Option<&'static str>,
) -> TestRow {
    TestRow {
        id,
        sex,
        age: None,
        height: None,
        noc,
        games,
        sport,
        event,
        medal,
    }
}

// not every test binary uses every builder
#[allow(dead_code)]
impl TestRow {
    pub fn age(mut self, age: f64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }
}

/// Build a raw frame with the full required column set; `Year` and `Season`
/// are derived from the games label like the source file carries them.
pub fn frame(rows: &[TestRow]) -> DataFrame {
    let years: Vec<i64> = rows
        .iter()
        .map(|r| {
            r.games
                .split_once(' ')
                .and_then(|(y, _)| y.parse().ok())
                .unwrap_or_default()
        })
        .collect();
    let seasons: Vec<&str> = rows
        .iter()
        .map(|r| r.games.split_once(' ').map(|(_, s)| s).unwrap_or_default())
        .collect();

    df!(
        "ID" => rows.iter().map(|r| r.id).collect::<Vec<_>>(),
        "Sex" => rows.iter().map(|r| r.sex).collect::<Vec<_>>(),
        "Age" => rows.iter().map(|r| r.age).collect::<Vec<_>>(),
        "Height" => rows.iter().map(|r| r.height).collect::<Vec<_>>(),
        "NOC" => rows.iter().map(|r| r.noc).collect::<Vec<_>>(),
        "Games" => rows.iter().map(|r| r.games).collect::<Vec<_>>(),
        "Year" => years,
        "Season" => seasons,
        "Sport" => rows.iter().map(|r| r.sport).collect::<Vec<_>>(),
        "Event" => rows.iter().map(|r| r.event).collect::<Vec<_>>(),
        "Medal" => rows.iter().map(|r| r.medal).collect::<Vec<_>>(),
    )
    .expect("valid test frame")
}
