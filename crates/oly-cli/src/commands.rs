//! Subcommand dispatch over the shared repository context.

use std::collections::HashMap;

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::{debug, info_span};

use oly_core::{
    EventsRepository, age_distribution, country_medals, filter_season, gender_per_year,
    mean_height_by_medal, medals_per_category, medals_per_games, participants_per_games, sports,
    top_by_medal,
};
use oly_ingest::read_noc_regions;
use oly_model::columns::derived;

use crate::cli::{Cli, Command, MedalsArgs, ParticipantsArgs, SportCommand, TopArgs};
use crate::summary::{print_ages, print_frame, print_labels};

/// Loaded inputs shared by every subcommand.
pub struct AppContext {
    repo: EventsRepository,
    regions: Option<HashMap<String, String>>,
    json: bool,
}

impl AppContext {
    pub fn load(cli: &Cli) -> Result<Self> {
        let load_span = info_span!("load", data = %cli.data.display());
        let _guard = load_span.enter();

        let repo = EventsRepository::from_csv(&cli.data)
            .with_context(|| format!("load athlete events from {}", cli.data.display()))?;
        let regions = match &cli.regions {
            Some(path) => Some(
                read_noc_regions(path)
                    .with_context(|| format!("load NOC regions from {}", path.display()))?,
            ),
            None => None,
        };

        Ok(Self {
            repo,
            regions,
            json: cli.json,
        })
    }
}

pub fn dispatch(ctx: &AppContext, command: &Command) -> Result<()> {
    match command {
        Command::Medals(args) => run_medals(ctx, args),
        Command::Top(args) => run_top(ctx, args),
        Command::Participants(args) => run_participants(ctx, args),
        Command::Sport { command } => run_sport(ctx, command),
    }
}

fn run_medals(ctx: &AppContext, args: &MedalsArgs) -> Result<()> {
    let df = medals_per_games(&ctx.repo)?;
    let df = filter_season(&df, args.season.into())?;
    debug!(rows = df.height(), "medals per games");
    print_frame(&df, ctx.json)
}

fn run_top(ctx: &AppContext, args: &TopArgs) -> Result<()> {
    let df = medals_per_category(&ctx.repo, args.category.into())?;
    let df = top_by_medal(&df, args.medal.into(), args.n)?;
    print_frame(&df, ctx.json)
}

fn run_participants(ctx: &AppContext, args: &ParticipantsArgs) -> Result<()> {
    let df = participants_per_games(&ctx.repo)?;
    let df = filter_season(&df, args.season.into())?;
    debug!(rows = df.height(), "participants per games");
    print_frame(&df, ctx.json)
}

fn run_sport(ctx: &AppContext, command: &SportCommand) -> Result<()> {
    match command {
        SportCommand::List => {
            let labels = sports(&ctx.repo)?;
            print_labels(&labels, ctx.json)
        }
        SportCommand::Age { sport } => {
            let ages = age_distribution(&ctx.repo, sport)?;
            print_ages(&ages, ctx.json)
        }
        SportCommand::Height { sport, sex } => {
            let df = mean_height_by_medal(&ctx.repo, sport, (*sex).into())?;
            print_frame(&df, ctx.json)
        }
        SportCommand::Medals { sport, sex, n } => {
            let mut df = country_medals(&ctx.repo, sport, (*sex).into(), *n)?;
            if let Some(regions) = &ctx.regions {
                df = relabel_countries(&df, regions)?;
            }
            print_frame(&df, ctx.json)
        }
        SportCommand::Gender { sport } => {
            let df = gender_per_year(&ctx.repo, sport)?;
            print_frame(&df, ctx.json)
        }
    }
}

/// Replace NOC codes with region names; codes without an entry stay as-is.
fn relabel_countries(df: &DataFrame, regions: &HashMap<String, String>) -> Result<DataFrame> {
    let relabeled: Vec<Option<String>> = df
        .column(derived::NOC)?
        .str()?
        .into_iter()
        .map(|code| {
            code.map(|c| regions.get(c).cloned().unwrap_or_else(|| c.to_string()))
        })
        .collect();

    let mut out = df.clone();
    out.with_column(Series::new(derived::NOC.into(), relabeled))?;
    Ok(out)
}
