//! Aggregation engine: derived summary tables over the repository views.
//!
//! Each function is independent, borrows immutable views, and returns an
//! owned derived table. All are total over well-formed input; empty
//! selections produce an empty frame, never an error. Percentage cells with
//! a zero or missing denominator stay null so the consumer can gray them
//! out instead of plotting a fake zero.

use anyhow::Result;
use polars::prelude::*;

use oly_model::columns::{derived, raw};
use oly_model::{CategoryKind, MedalSelector, SeasonFilter};

use crate::data_utils::round_float_column;
use crate::games::split_games;
use crate::repository::EventsRepository;

/// USA and world medal counts per games with the USA share in percent.
///
/// World counts form the left side of the join, so games the USA skipped
/// keep their row with a null USA count (the 1980 Summer boycott is the
/// canonical case); the percentage is null there as well.
pub fn medals_per_games(repo: &EventsRepository) -> Result<DataFrame> {
    let usa_counts = repo
        .usa_medals()
        .clone()
        .lazy()
        .group_by_stable([col(raw::GAMES)])
        .agg([col(raw::MEDAL)
            .count()
            .cast(DataType::Int64)
            .alias(derived::MEDALS_USA)]);

    let world_counts = repo
        .world_medals()
        .clone()
        .lazy()
        .group_by_stable([col(raw::GAMES)])
        .agg([col(raw::MEDAL)
            .count()
            .cast(DataType::Int64)
            .alias(derived::MEDALS_WORLD)]);

    let joined = world_counts
        .join(
            usa_counts,
            [col(raw::GAMES)],
            [col(raw::GAMES)],
            JoinArgs::new(JoinType::Left),
        )
        .with_column(
            (col(derived::MEDALS_USA).cast(DataType::Float64) * lit(100.0)
                / col(derived::MEDALS_WORLD).cast(DataType::Float64))
            .alias(derived::PERCENTAGE),
        )
        .collect()?;

    Ok(split_games(&joined)?
        .lazy()
        .select([
            col(derived::YEAR),
            col(derived::SEASON),
            col(derived::GAMES),
            col(derived::MEDALS_USA),
            col(derived::MEDALS_WORLD),
            col(derived::PERCENTAGE),
        ])
        .collect()?)
}

/// USA medal counts per sport or per event, one row per category value.
///
/// Total, gold, silver, and bronze are counted independently and combined
/// with outer joins on the category value; a category missing from one of
/// the partial counts reports 0 there, not a dropped row. Over the unique
/// USA awards every row carries a medal, so `gold + silver + bronze` always
/// equals `total`.
pub fn medals_per_category(repo: &EventsRepository, kind: CategoryKind) -> Result<DataFrame> {
    let medals = repo.usa_medals();
    let category = kind.column();

    let count_of = |tier: Option<&'static str>, name: &'static str| {
        let lf = medals.clone().lazy();
        let lf = match tier {
            Some(tier) => lf.filter(col(raw::MEDAL).eq(lit(tier))),
            None => lf,
        };
        lf.group_by_stable([col(category)])
            .agg([col(raw::MEDAL).count().cast(DataType::Int64).alias(name)])
    };

    let outer = JoinArgs::new(JoinType::Full).with_coalesce(JoinCoalesce::CoalesceColumns);
    let combined = count_of(None, derived::TOTAL)
        .join(
            count_of(Some("Gold"), derived::GOLD),
            [col(category)],
            [col(category)],
            outer.clone(),
        )
        .join(
            count_of(Some("Silver"), derived::SILVER),
            [col(category)],
            [col(category)],
            outer.clone(),
        )
        .join(
            count_of(Some("Bronze"), derived::BRONZE),
            [col(category)],
            [col(category)],
            outer,
        )
        .with_columns([
            col(derived::TOTAL).fill_null(lit(0i64)),
            col(derived::GOLD).fill_null(lit(0i64)),
            col(derived::SILVER).fill_null(lit(0i64)),
            col(derived::BRONZE).fill_null(lit(0i64)),
        ])
        .select([
            col(category).alias(kind.derived_column()),
            col(derived::TOTAL),
            col(derived::GOLD),
            col(derived::SILVER),
            col(derived::BRONZE),
        ])
        .collect()?;

    Ok(combined)
}

/// Top `n` category rows by the selected medal count.
///
/// Stable descending sort, so ties keep their original row order; no
/// secondary key. `All` ranks by total, like the original chart.
pub fn top_by_medal(df: &DataFrame, selector: MedalSelector, n: usize) -> Result<DataFrame> {
    let sort_column = match selector {
        MedalSelector::All | MedalSelector::Total => derived::TOTAL,
        MedalSelector::Gold => derived::GOLD,
        MedalSelector::Silver => derived::SILVER,
        MedalSelector::Bronze => derived::BRONZE,
    };

    Ok(df
        .clone()
        .lazy()
        .sort(
            [sort_column],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true),
        )
        .limit(n as IdxSize)
        .collect()?)
}

/// Participation and gender breakdown per games for the USA and the world.
///
/// Counts unique participants (one per person per games). Male/female
/// counts are indicator sums within each group, so a games with no
/// participants of one sex reports a genuine 0. Percentages are rounded to
/// one decimal and stay null where the participant count itself is missing.
pub fn participants_per_games(repo: &EventsRepository) -> Result<DataFrame> {
    let per_games = |df: &DataFrame, participants: &'static str, males: &'static str, females: &'static str| {
        df.clone()
            .lazy()
            .group_by_stable([col(raw::GAMES)])
            .agg([
                col(raw::ID)
                    .count()
                    .cast(DataType::Int64)
                    .alias(participants),
                col(raw::SEX)
                    .eq(lit("M"))
                    .sum()
                    .cast(DataType::Int64)
                    .alias(males),
                col(raw::SEX)
                    .eq(lit("F"))
                    .sum()
                    .cast(DataType::Int64)
                    .alias(females),
            ])
    };

    let usa = per_games(
        repo.unique_participants_usa(),
        derived::PARTICIPANTS_USA,
        derived::MALES_USA,
        derived::FEMALES_USA,
    );
    let world = per_games(
        repo.unique_participants_world(),
        derived::PARTICIPANTS_WORLD,
        derived::MALES_WORLD,
        derived::FEMALES_WORLD,
    );

    let pct = |numerator: &'static str, denominator: &'static str, name: &'static str| {
        (col(numerator).cast(DataType::Float64) * lit(100.0)
            / col(denominator).cast(DataType::Float64))
        .alias(name)
    };

    let mut joined = world
        .join(
            usa,
            [col(raw::GAMES)],
            [col(raw::GAMES)],
            JoinArgs::new(JoinType::Left),
        )
        .with_columns([
            col(derived::MALES_USA).fill_null(lit(0i64)),
            col(derived::FEMALES_USA).fill_null(lit(0i64)),
        ])
        .with_columns([
            pct(
                derived::PARTICIPANTS_USA,
                derived::PARTICIPANTS_WORLD,
                derived::PERCENTAGE_USA,
            ),
            pct(
                derived::FEMALES_USA,
                derived::PARTICIPANTS_USA,
                derived::FEMALE_PCT_USA,
            ),
            pct(
                derived::MALES_USA,
                derived::PARTICIPANTS_USA,
                derived::MALE_PCT_USA,
            ),
            pct(
                derived::FEMALES_WORLD,
                derived::PARTICIPANTS_WORLD,
                derived::FEMALE_PCT_WORLD,
            ),
            pct(
                derived::MALES_WORLD,
                derived::PARTICIPANTS_WORLD,
                derived::MALE_PCT_WORLD,
            ),
        ])
        .collect()?;

    for column in [
        derived::PERCENTAGE_USA,
        derived::FEMALE_PCT_USA,
        derived::MALE_PCT_USA,
        derived::FEMALE_PCT_WORLD,
        derived::MALE_PCT_WORLD,
    ] {
        round_float_column(&mut joined, column, 1)?;
    }

    Ok(split_games(&joined)?
        .lazy()
        .select([
            col(derived::YEAR),
            col(derived::SEASON),
            col(derived::GAMES),
            col(derived::PARTICIPANTS_USA),
            col(derived::PARTICIPANTS_WORLD),
            col(derived::PERCENTAGE_USA),
            col(derived::MALES_USA),
            col(derived::FEMALES_USA),
            col(derived::MALES_WORLD),
            col(derived::FEMALES_WORLD),
            col(derived::FEMALE_PCT_USA),
            col(derived::MALE_PCT_USA),
            col(derived::FEMALE_PCT_WORLD),
            col(derived::MALE_PCT_WORLD),
        ])
        .collect()?)
}

/// Restrict a games-keyed derived table to one season.
pub fn filter_season(df: &DataFrame, season: SeasonFilter) -> Result<DataFrame> {
    match season.season() {
        None => Ok(df.clone()),
        Some(season) => Ok(df
            .clone()
            .lazy()
            .filter(col(derived::SEASON).eq(lit(season.as_str())))
            .collect()?),
    }
}
