//! Splitting the composite `"<year> <season>"` games label into typed columns.

use anyhow::Result;
use polars::prelude::*;

use oly_model::columns::{derived, raw};

/// Splits the `Games` column of a games-keyed derived table into `year`
/// (Int32) and `season` columns and renames `Games` to `games`.
///
/// A label that does not match the `"<year> <season>"` shape yields nulls in
/// the split columns rather than an error; the games label itself is kept.
pub fn split_games(df: &DataFrame) -> Result<DataFrame> {
    let games = df.column(raw::GAMES)?.str()?;

    let mut years: Vec<Option<i32>> = Vec::with_capacity(df.height());
    let mut seasons: Vec<Option<String>> = Vec::with_capacity(df.height());
    for label in games.into_iter() {
        match label.and_then(|l| l.split_once(' ')) {
            Some((year, season)) => {
                years.push(year.parse::<i32>().ok());
                seasons.push(Some(season.to_string()));
            }
            None => {
                years.push(None);
                seasons.push(None);
            }
        }
    }

    let mut out = df.clone();
    out.with_column(Series::new(derived::YEAR.into(), years))?;
    out.with_column(Series::new(derived::SEASON.into(), seasons))?;
    out.rename(raw::GAMES, derived::GAMES.into())?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_games() {
        let df = df!(
            "Games" => ["2016 Summer", "1994 Winter", "garbage"],
        )
        .unwrap();

        let out = split_games(&df).unwrap();
        let year = out.column("year").unwrap().i32().unwrap();
        let season = out.column("season").unwrap().str().unwrap();

        assert_eq!(year.get(0), Some(2016));
        assert_eq!(season.get(0), Some("Summer"));
        assert_eq!(year.get(1), Some(1994));
        assert_eq!(season.get(1), Some("Winter"));
        assert_eq!(year.get(2), None);
        assert_eq!(season.get(2), None);
        assert!(out.column("games").is_ok());
    }
}
