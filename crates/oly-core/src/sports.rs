//! Sport-universe remapping and per-sport demographic breakdowns.
//!
//! The raw dataset tags track events under the sport label `Athletics` and
//! keeps rhythmic gymnastics separate from gymnastics. The sport universe
//! fixes both: it keeps the four named sports plus the enumerated running
//! events, then renames `Athletics` to `Running` and `Rhythmic Gymnastics`
//! to `Gymnastics`. All per-sport breakdowns read this remapped subset, not
//! the raw table.

use std::collections::BTreeSet;

use anyhow::Result;
use polars::prelude::*;

use oly_model::columns::{derived, raw};
use oly_model::{Medal, SexFilter};

use crate::data_utils::{any_to_f64, dedup_by_keys, round_to};
use crate::repository::EventsRepository;

/// Sports kept by their own label.
const SPORT_LABELS: [&str; 4] = [
    "Alpine Skiing",
    "Basketball",
    "Gymnastics",
    "Rhythmic Gymnastics",
];

/// Running has no sport tag of its own; these Athletics events are pulled in
/// by event name.
const RUNNING_EVENTS: [&str; 18] = [
    "Athletics Women's 100 metres",
    "Athletics Women's 200 metres",
    "Athletics Women's 400 metres",
    "Athletics Women's 800 metres",
    "Athletics Women's 1,500 metres",
    "Athletics Women's 3,000 metres",
    "Athletics Women's 5,000 metres",
    "Athletics Women's 10,000 metres",
    "Athletics Women's Marathon",
    "Athletics Men's 60 metres",
    "Athletics Men's 100 metres",
    "Athletics Men's 200 metres",
    "Athletics Men's 400 metres",
    "Athletics Men's 800 metres",
    "Athletics Men's 1,500 metres",
    "Athletics Men's 5,000 metres",
    "Athletics Men's 10,000 metres",
    "Athletics Men's Marathon",
];

const ATHLETICS: &str = "Athletics";
const RUNNING: &str = "Running";
const RHYTHMIC_GYMNASTICS: &str = "Rhythmic Gymnastics";
const GYMNASTICS: &str = "Gymnastics";

/// Label shown for rows without a medal in the height breakdown.
pub const NO_MEDAL_LABEL: &str = "No medal";

/// Build the remapped sport subset from the raw table.
pub fn build_sport_universe(world: &DataFrame) -> Result<DataFrame> {
    let sport_ca = world.column(raw::SPORT)?.str()?;
    let event_ca = world.column(raw::EVENT)?.str()?;

    let mut keep = Vec::with_capacity(world.height());
    for (sport, event) in sport_ca.into_iter().zip(event_ca.into_iter()) {
        let by_sport = sport.is_some_and(|s| SPORT_LABELS.contains(&s));
        let by_event = event.is_some_and(|e| RUNNING_EVENTS.contains(&e));
        keep.push(by_sport || by_event);
    }
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    let mut subset = world.filter(&mask)?;

    let remapped: Vec<Option<String>> = subset
        .column(raw::SPORT)?
        .str()?
        .into_iter()
        .map(|sport| {
            sport.map(|s| match s {
                ATHLETICS => RUNNING.to_string(),
                RHYTHMIC_GYMNASTICS => GYMNASTICS.to_string(),
                other => other.to_string(),
            })
        })
        .collect();
    subset.with_column(Series::new(raw::SPORT.into(), remapped))?;

    Ok(subset)
}

/// Sorted distinct sport labels of the universe (dropdown option source).
pub fn sports(repo: &EventsRepository) -> Result<Vec<String>> {
    let sport_ca = repo.sport_universe().column(raw::SPORT)?.str()?;
    let labels: BTreeSet<String> = sport_ca.into_iter().flatten().map(String::from).collect();
    Ok(labels.into_iter().collect())
}

/// Universe rows for one sport label. Unknown labels yield an empty frame.
fn filter_sport(universe: &DataFrame, sport: &str) -> Result<DataFrame> {
    Ok(universe
        .clone()
        .lazy()
        .filter(col(raw::SPORT).eq(lit(sport)))
        .collect()?)
}

fn filter_sex(df: DataFrame, sex: SexFilter) -> Result<DataFrame> {
    match sex.sex() {
        None => Ok(df),
        Some(sex) => Ok(df
            .lazy()
            .filter(col(raw::SEX).eq(lit(sex.as_str())))
            .collect()?),
    }
}

/// Ages of male and female rows for one sport, for density plotting.
///
/// The two sequences are independent and may differ in length; null ages are
/// excluded. Unknown sports yield two empty sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgeDistribution {
    pub male: Vec<f64>,
    pub female: Vec<f64>,
}

/// Collect per-sex age samples for the given sport.
pub fn age_distribution(repo: &EventsRepository, sport: &str) -> Result<AgeDistribution> {
    let df = filter_sport(repo.sport_universe(), sport)?;
    let sex_ca = df.column(raw::SEX)?.str()?;
    let age_column = df.column(raw::AGE)?;

    let mut out = AgeDistribution::default();
    for (idx, sex) in sex_ca.into_iter().enumerate() {
        let Some(age) = any_to_f64(age_column.get(idx)?) else {
            continue;
        };
        match sex {
            Some("M") => out.male.push(age),
            Some("F") => out.female.push(age),
            _ => {}
        }
    }
    Ok(out)
}

/// Mean height per medal category for one sport.
///
/// Returns 4 rows (`Gold`, `Silver`, `Bronze`, `No medal`) with the mean
/// height rounded to 2 decimals; a category with no measured rows carries a
/// null mean. Null heights are excluded from the mean, not treated as zero.
pub fn mean_height_by_medal(
    repo: &EventsRepository,
    sport: &str,
    sex: SexFilter,
) -> Result<DataFrame> {
    let df = filter_sex(filter_sport(repo.sport_universe(), sport)?, sex)?;
    let medal_ca = df.column(raw::MEDAL)?.str()?;
    let height_column = df.column(raw::HEIGHT)?;

    // (sum, count) per category: gold, silver, bronze, no medal
    let mut acc = [(0.0_f64, 0_usize); 4];
    for (idx, medal) in medal_ca.into_iter().enumerate() {
        let Some(height) = any_to_f64(height_column.get(idx)?) else {
            continue;
        };
        let slot = match medal {
            Some("Gold") => 0,
            Some("Silver") => 1,
            Some("Bronze") => 2,
            None => 3,
            Some(_) => continue,
        };
        acc[slot].0 += height;
        acc[slot].1 += 1;
    }

    let labels: Vec<&str> = Medal::all()
        .iter()
        .map(Medal::as_str)
        .chain(std::iter::once(NO_MEDAL_LABEL))
        .collect();
    let means: Vec<Option<f64>> = acc
        .iter()
        .map(|(sum, count)| {
            if *count == 0 {
                None
            } else {
                Some(round_to(sum / *count as f64, 2))
            }
        })
        .collect();

    Ok(DataFrame::new(vec![
        Series::new(derived::MEDAL.into(), labels).into(),
        Series::new(derived::MEAN_HEIGHT.into(), means).into(),
    ])?)
}

/// Medal counts for the top `n` countries in one sport.
///
/// Rows are deduplicated to unique awards on (`Event`, `Games`, `Medal`,
/// `NOC`) before the sex filter is applied, then grouped by NOC, counted,
/// and stable-sorted descending.
pub fn country_medals(
    repo: &EventsRepository,
    sport: &str,
    sex: SexFilter,
    n: usize,
) -> Result<DataFrame> {
    let df = filter_sport(repo.sport_universe(), sport)?;
    let medal_rows = df
        .lazy()
        .filter(col(raw::MEDAL).is_not_null())
        .collect()?;
    let unique_awards = dedup_by_keys(
        &medal_rows,
        &[raw::EVENT, raw::GAMES, raw::MEDAL, raw::NOC],
    )?;
    let filtered = filter_sex(unique_awards, sex)?;

    Ok(filtered
        .lazy()
        .group_by_stable([col(raw::NOC)])
        .agg([col(raw::MEDAL)
            .count()
            .cast(DataType::Int64)
            .alias(derived::MEDALS)])
        .sort(
            [derived::MEDALS],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true),
        )
        .limit(n as IdxSize)
        .select([
            col(raw::NOC).alias(derived::NOC),
            col(derived::MEDALS),
        ])
        .collect()?)
}

/// Male and female entry counts per year for one sport.
///
/// Counts event entries, not unique athletes, matching the gender
/// distribution chart.
pub fn gender_per_year(repo: &EventsRepository, sport: &str) -> Result<DataFrame> {
    let df = filter_sport(repo.sport_universe(), sport)?;

    Ok(df
        .lazy()
        .group_by_stable([col(raw::YEAR)])
        .agg([
            col(raw::SEX)
                .eq(lit("M"))
                .sum()
                .cast(DataType::Int64)
                .alias(derived::MALES),
            col(raw::SEX)
                .eq(lit("F"))
                .sum()
                .cast(DataType::Int64)
                .alias(derived::FEMALES),
        ])
        .sort([raw::YEAR], SortMultipleOptions::default())
        .select([
            col(raw::YEAR).cast(DataType::Int32).alias(derived::YEAR),
            col(derived::MALES),
            col(derived::FEMALES),
        ])
        .collect()?)
}
