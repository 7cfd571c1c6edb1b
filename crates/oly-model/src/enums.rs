//! Type-safe enumerations for raw athlete-events values.
//!
//! The source table encodes season, sex, and medal as strings; these enums
//! give the rest of the workspace a closed set of values to match on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// One edition of the Olympics runs in exactly one season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    /// Returns the label as it appears in the `Season` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Winter => "Winter",
        }
    }
}

impl FromStr for Season {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            s if s.eq_ignore_ascii_case("summer") => Ok(Season::Summer),
            s if s.eq_ignore_ascii_case("winter") => Ok(Season::Winter),
            other => Err(ModelError::UnknownSeason(other.to_string())),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Athlete sex as recorded in the dataset (`M` or `F`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Returns the single-letter code used in the `Sex` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

impl FromStr for Sex {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "M" | "m" => Ok(Sex::Male),
            "F" | "f" => Ok(Sex::Female),
            other => Err(ModelError::UnknownSex(other.to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Medal tier. Non-medalist rows carry a null in the `Medal` column and
/// have no `Medal` value at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Returns the label as it appears in the `Medal` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }

    /// All medal tiers in rank order.
    pub fn all() -> [Medal; 3] {
        [Medal::Gold, Medal::Silver, Medal::Bronze]
    }
}

impl FromStr for Medal {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            s if s.eq_ignore_ascii_case("gold") => Ok(Medal::Gold),
            s if s.eq_ignore_ascii_case("silver") => Ok(Medal::Silver),
            s if s.eq_ignore_ascii_case("bronze") => Ok(Medal::Bronze),
            other => Err(ModelError::UnknownMedal(other.to_string())),
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
