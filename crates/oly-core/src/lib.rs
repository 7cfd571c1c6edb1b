//! Aggregation core for the Olympic athlete-events statistics dashboard.
//!
//! Two pieces: [`repository::EventsRepository`], the load-once set of
//! filtered views over the raw table, and the aggregation functions in
//! [`aggregate`] and [`sports`] that turn those views into small derived
//! summary tables for charting.

pub mod aggregate;
pub mod data_utils;
pub mod games;
pub mod repository;
pub mod sports;

pub use aggregate::{
    filter_season, medals_per_category, medals_per_games, participants_per_games, top_by_medal,
};
pub use repository::EventsRepository;
pub use sports::{AgeDistribution, age_distribution, country_medals, gender_per_year,
    mean_height_by_medal, sports};
