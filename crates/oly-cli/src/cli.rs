//! CLI argument definitions for the Olympic statistics tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use oly_model::{CategoryKind, MedalSelector, SeasonFilter, SexFilter};

#[derive(Parser)]
#[command(
    name = "olystat",
    version,
    about = "Olympic athlete-events statistics",
    long_about = "Aggregate the 120-years athlete-events dataset into summary tables.\n\n\
                  Compares USA medal and participation numbers against the world\n\
                  and breaks down selected sports by age, height, country, and gender."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the athlete-events CSV file.
    #[arg(
        long = "data",
        value_name = "PATH",
        default_value = "athlete_events.csv",
        global = true
    )]
    pub data: PathBuf,

    /// Optional NOC-to-region lookup CSV for readable country labels.
    #[arg(long = "regions", value_name = "PATH", global = true)]
    pub regions: Option<PathBuf>,

    /// Emit results as JSON rows instead of a table.
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// USA vs. world medal counts per games.
    Medals(MedalsArgs),

    /// Top categories by USA medal count.
    Top(TopArgs),

    /// USA vs. world participation and gender split per games.
    Participants(ParticipantsArgs),

    /// Per-sport breakdowns over the remapped sport subset.
    Sport {
        #[command(subcommand)]
        command: SportCommand,
    },
}

#[derive(Parser)]
pub struct MedalsArgs {
    /// Restrict to one season.
    #[arg(long = "season", value_enum, default_value = "all")]
    pub season: SeasonArg,
}

#[derive(Parser)]
pub struct TopArgs {
    /// Group medals by sport or by event.
    #[arg(long = "by", value_enum, default_value = "sport")]
    pub category: CategoryArg,

    /// Medal count to rank by.
    #[arg(long = "medal", value_enum, default_value = "all")]
    pub medal: MedalArg,

    /// Number of rows to keep.
    #[arg(long = "top", value_name = "N", default_value_t = 10)]
    pub n: usize,
}

#[derive(Parser)]
pub struct ParticipantsArgs {
    /// Restrict to one season.
    #[arg(long = "season", value_enum, default_value = "all")]
    pub season: SeasonArg,
}

#[derive(Subcommand)]
pub enum SportCommand {
    /// List the sports available for the per-sport breakdowns.
    List,

    /// Age samples per sex for one sport.
    Age {
        /// Sport label, e.g. "Running".
        #[arg(value_name = "SPORT")]
        sport: String,
    },

    /// Mean height per medal category for one sport.
    Height {
        #[arg(value_name = "SPORT")]
        sport: String,

        /// Restrict to one sex.
        #[arg(long = "sex", value_enum, default_value = "both")]
        sex: SexArg,
    },

    /// Medal counts for the top countries in one sport.
    Medals {
        #[arg(value_name = "SPORT")]
        sport: String,

        /// Restrict to one sex.
        #[arg(long = "sex", value_enum, default_value = "both")]
        sex: SexArg,

        /// Number of countries to keep.
        #[arg(long = "top", value_name = "N", default_value_t = 10)]
        n: usize,
    },

    /// Male and female entry counts per year for one sport.
    Gender {
        #[arg(value_name = "SPORT")]
        sport: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SeasonArg {
    All,
    Summer,
    Winter,
}

impl From<SeasonArg> for SeasonFilter {
    fn from(value: SeasonArg) -> Self {
        match value {
            SeasonArg::All => SeasonFilter::All,
            SeasonArg::Summer => SeasonFilter::Summer,
            SeasonArg::Winter => SeasonFilter::Winter,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SexArg {
    Both,
    Male,
    Female,
}

impl From<SexArg> for SexFilter {
    fn from(value: SexArg) -> Self {
        match value {
            SexArg::Both => SexFilter::Both,
            SexArg::Male => SexFilter::Male,
            SexArg::Female => SexFilter::Female,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MedalArg {
    All,
    Total,
    Gold,
    Silver,
    Bronze,
}

impl From<MedalArg> for MedalSelector {
    fn from(value: MedalArg) -> Self {
        match value {
            MedalArg::All => MedalSelector::All,
            MedalArg::Total => MedalSelector::Total,
            MedalArg::Gold => MedalSelector::Gold,
            MedalArg::Silver => MedalSelector::Silver,
            MedalArg::Bronze => MedalSelector::Bronze,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Sport,
    Event,
}

impl From<CategoryArg> for CategoryKind {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::Sport => CategoryKind::Sport,
            CategoryArg::Event => CategoryKind::Event,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
