//! Load-once repository of filtered athlete-events views.
//!
//! The repository is constructed once at startup and treated as read-only
//! for the rest of the process. Every view is a pure function of the raw
//! table, so callers can hold it behind a shared reference and recompute
//! derived tables per request without synchronization.

use std::path::Path;

use anyhow::Result;
use polars::prelude::*;

use oly_model::columns::raw;

use crate::data_utils::dedup_by_keys;
use crate::sports::build_sport_universe;

/// The USA National Olympic Committee code.
pub const USA_NOC: &str = "USA";

/// Canonical filtered views over the raw athlete-events table.
///
/// Immutable after construction. Deduplication rules:
/// - a unique medal award is one (`Event`, `Games`, `Medal`) tuple per
///   country; team sports list one source row per squad member, which would
///   otherwise overcount medals by squad size;
/// - a unique participant is one (`Games`, `ID`) tuple, so multi-event
///   athletes count once per games.
pub struct EventsRepository {
    world: DataFrame,
    usa: DataFrame,
    world_medals: DataFrame,
    usa_medals: DataFrame,
    unique_participants_usa: DataFrame,
    unique_participants_world: DataFrame,
    sport_universe: DataFrame,
}

impl EventsRepository {
    /// Load the source CSV and build all views. Fatal on a missing or
    /// malformed source; callers surface the error and stop.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let world = oly_ingest::read_athlete_events(path)?;
        Self::from_frame(world)
    }

    /// Build the repository from an already-loaded raw table.
    pub fn from_frame(world: DataFrame) -> Result<Self> {
        for column in raw::REQUIRED {
            anyhow::ensure!(
                world.column(column).is_ok(),
                "raw table is missing required column '{column}'"
            );
        }

        let usa = world
            .clone()
            .lazy()
            .filter(col(raw::NOC).eq(lit(USA_NOC)))
            .collect()?;

        let world_medal_rows = world
            .clone()
            .lazy()
            .filter(col(raw::MEDAL).is_not_null())
            .collect()?;
        let world_medals = dedup_by_keys(
            &world_medal_rows,
            &[raw::NOC, raw::EVENT, raw::GAMES, raw::MEDAL],
        )?;

        let usa_medal_rows = usa
            .clone()
            .lazy()
            .filter(col(raw::MEDAL).is_not_null())
            .collect()?;
        // Already USA-only, so NOC adds nothing to the key here.
        let usa_medals = dedup_by_keys(&usa_medal_rows, &[raw::EVENT, raw::GAMES, raw::MEDAL])?;

        let unique_participants_usa = dedup_by_keys(&usa, &[raw::GAMES, raw::ID])?;
        let unique_participants_world = dedup_by_keys(&world, &[raw::GAMES, raw::ID])?;

        let sport_universe = build_sport_universe(&world)?;

        tracing::debug!(
            world = world.height(),
            usa = usa.height(),
            world_medals = world_medals.height(),
            usa_medals = usa_medals.height(),
            sport_universe = sport_universe.height(),
            "built repository views"
        );

        Ok(Self {
            world,
            usa,
            world_medals,
            usa_medals,
            unique_participants_usa,
            unique_participants_world,
            sport_universe,
        })
    }

    /// Full raw table, all countries, one row per athlete-per-event.
    pub fn world(&self) -> &DataFrame {
        &self.world
    }

    /// Rows where `NOC == "USA"`.
    pub fn usa(&self) -> &DataFrame {
        &self.usa
    }

    /// One row per unique medal award per country, world-wide.
    pub fn world_medals(&self) -> &DataFrame {
        &self.world_medals
    }

    /// One row per unique USA medal award.
    pub fn usa_medals(&self) -> &DataFrame {
        &self.usa_medals
    }

    /// One USA row per person per games.
    pub fn unique_participants_usa(&self) -> &DataFrame {
        &self.unique_participants_usa
    }

    /// One world row per person per games.
    pub fn unique_participants_world(&self) -> &DataFrame {
        &self.unique_participants_world
    }

    /// The remapped sport subset (see [`crate::sports`]).
    pub fn sport_universe(&self) -> &DataFrame {
        &self.sport_universe
    }
}
