//! Column-name constants shared across the workspace.

/// Raw athlete-events columns as they appear in the source CSV header.
pub mod raw {
    pub const ID: &str = "ID";
    pub const NAME: &str = "Name";
    pub const SEX: &str = "Sex";
    pub const AGE: &str = "Age";
    pub const HEIGHT: &str = "Height";
    pub const WEIGHT: &str = "Weight";
    pub const TEAM: &str = "Team";
    pub const NOC: &str = "NOC";
    pub const GAMES: &str = "Games";
    pub const YEAR: &str = "Year";
    pub const SEASON: &str = "Season";
    pub const CITY: &str = "City";
    pub const SPORT: &str = "Sport";
    pub const EVENT: &str = "Event";
    pub const MEDAL: &str = "Medal";

    /// Columns that must be present for the aggregation core to work.
    /// `Name`, `Team`, `City`, and `Weight` are carried through untouched.
    pub const REQUIRED: [&str; 11] = [
        ID, SEX, AGE, HEIGHT, NOC, GAMES, YEAR, SEASON, SPORT, EVENT, MEDAL,
    ];
}

/// Derived-table columns produced by the aggregation engine.
pub mod derived {
    pub const YEAR: &str = "year";
    pub const SEASON: &str = "season";
    pub const GAMES: &str = "games";

    pub const MEDALS_USA: &str = "medals_usa_count";
    pub const MEDALS_WORLD: &str = "medals_world_count";
    pub const PERCENTAGE: &str = "percentage";

    pub const TOTAL: &str = "total";
    pub const GOLD: &str = "gold";
    pub const SILVER: &str = "silver";
    pub const BRONZE: &str = "bronze";

    pub const PARTICIPANTS_USA: &str = "participants_usa";
    pub const PARTICIPANTS_WORLD: &str = "participants_world";
    pub const PERCENTAGE_USA: &str = "percentage_usa";
    pub const MALES_USA: &str = "males_usa";
    pub const FEMALES_USA: &str = "females_usa";
    pub const MALES_WORLD: &str = "males_world";
    pub const FEMALES_WORLD: &str = "females_world";
    pub const FEMALE_PCT_USA: &str = "female_pct_usa";
    pub const MALE_PCT_USA: &str = "male_pct_usa";
    pub const FEMALE_PCT_WORLD: &str = "female_pct_world";
    pub const MALE_PCT_WORLD: &str = "male_pct_world";

    pub const MEDAL: &str = "medal";
    pub const MEAN_HEIGHT: &str = "mean_height";

    pub const NOC: &str = "noc";
    pub const MEDALS: &str = "medals";

    pub const MALES: &str = "males";
    pub const FEMALES: &str = "females";
}
