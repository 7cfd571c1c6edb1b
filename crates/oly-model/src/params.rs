//! Parameter enums for the aggregation consumer contract.
//!
//! The UI layer (or the CLI standing in for it) validates free-form input
//! into these closed types once at the boundary; the aggregation functions
//! never see raw mode strings.

use serde::{Deserialize, Serialize};

use crate::enums::{Season, Sex};

/// Season restriction applied to games-keyed derived tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonFilter {
    #[default]
    All,
    Summer,
    Winter,
}

impl SeasonFilter {
    /// The season this filter keeps, or `None` for no restriction.
    pub fn season(&self) -> Option<Season> {
        match self {
            SeasonFilter::All => None,
            SeasonFilter::Summer => Some(Season::Summer),
            SeasonFilter::Winter => Some(Season::Winter),
        }
    }
}

/// Sex restriction for demographic breakdowns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SexFilter {
    #[default]
    Both,
    Male,
    Female,
}

impl SexFilter {
    /// The sex this filter keeps, or `None` for no restriction.
    pub fn sex(&self) -> Option<Sex> {
        match self {
            SexFilter::Both => None,
            SexFilter::Male => Some(Sex::Male),
            SexFilter::Female => Some(Sex::Female),
        }
    }
}

/// Which medal count drives a top-N selection.
///
/// `All` and `Total` both rank by the total count; `All` tells the consumer
/// to show the three per-tier bars for those categories, `Total` a single
/// total bar. The ranking itself is identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MedalSelector {
    #[default]
    All,
    Total,
    Gold,
    Silver,
    Bronze,
}

/// Category axis for the per-category medal breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryKind {
    #[default]
    Sport,
    Event,
}

impl CategoryKind {
    /// Raw column this category groups on.
    pub fn column(&self) -> &'static str {
        match self {
            CategoryKind::Sport => crate::columns::raw::SPORT,
            CategoryKind::Event => crate::columns::raw::EVENT,
        }
    }

    /// Column name the category value carries in the derived table.
    pub fn derived_column(&self) -> &'static str {
        match self {
            CategoryKind::Sport => "sport",
            CategoryKind::Event => "event",
        }
    }
}
