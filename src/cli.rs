// src/cli.rs
use crate::core::{ConfigManager, RecommendationClient};
use crate::render::ResultsView;
use crate::search::SearchCoordinator;
use crate::types::{FilterField, FilterSet};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "recommender")]
#[command(about = "Find internships and jobs recommended for your profile")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Where to write the log
    #[arg(long, global = true, default_value = "/tmp/recommender.log")]
    pub log_file: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ask the backend for recommendations
    Search(SearchArgs),
    /// List accepted values for qualification, mode, duration and sector
    Options,
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Free-text search, e.g. "software intern"
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// e.g. Chennai, Bangalore...
    #[arg(long, default_value = "")]
    pub location: String,

    /// Qualification (be, btech, me, mba, bba, bsc, msc)
    #[arg(long, default_value = "")]
    pub education: String,

    /// e.g. React, Python, UI/UX...
    #[arg(long, default_value = "")]
    pub skills: String,

    #[arg(long, default_value = "")]
    pub stipend: String,

    /// Mode of work (full_time, part_time)
    #[arg(long, default_value = "")]
    pub mode: String,

    /// Internship duration ("1 month", "2 months", "3 months", "6 months")
    #[arg(long, default_value = "")]
    pub duration: String,

    /// Sector of interest (it, marketing, finance, design, data, management, education, engineering)
    #[arg(long, default_value = "")]
    pub sector: String,

    /// Override the backend base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Print the raw recommendations as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    pub fn filters(&self) -> FilterSet {
        let mut filters = FilterSet::new();
        filters.set(FilterField::Query, self.query.as_str());
        filters.set(FilterField::Location, self.location.as_str());
        filters.set(FilterField::Education, self.education.as_str());
        filters.set(FilterField::Skills, self.skills.as_str());
        filters.set(FilterField::Stipend, self.stipend.as_str());
        filters.set(FilterField::Mode, self.mode.as_str());
        filters.set(FilterField::Duration, self.duration.as_str());
        filters.set(FilterField::Sector, self.sector.as_str());
        filters
    }
}

/// Run a command. Returns `false` when the search ended in an error view.
pub async fn handle_command(command: Command) -> Result<bool> {
    match command {
        Command::Options => {
            print!("{}", options_listing());
            Ok(true)
        }
        Command::Search(args) => run_search(args).await,
    }
}

async fn run_search(args: SearchArgs) -> Result<bool> {
    let filters = args.filters();
    validate_filters(&filters)?;

    let mut config = ConfigManager::load()?;
    if let Some(url) = &args.api_url {
        config = config.with_api_url(url.as_str());
    }

    let client = RecommendationClient::new(&config.service)?;
    let mut coordinator = SearchCoordinator::new();

    info!("Searching with filters: {:?}", filters);
    eprintln!("{}", ResultsView::Busy.trigger_label());

    let status = coordinator.search(&client, &filters).await;
    let view = ResultsView::from_status(status);

    if args.json && !view.is_error() {
        let json = serde_json::to_string_pretty(status.results())
            .context("Failed to serialize recommendations")?;
        println!("{}", json);
    } else {
        println!("{}", view);
    }

    Ok(!view.is_error())
}

fn validate_filters(filters: &FilterSet) -> Result<()> {
    if let Some(field) = filters.invalid_fields().into_iter().next() {
        let accepted = field
            .options()
            .unwrap_or_default()
            .iter()
            .filter(|o| !o.value.is_empty())
            .map(|o| o.value)
            .collect::<Vec<_>>()
            .join(", ");
        anyhow::bail!(
            "Unsupported {} '{}'. Use one of: {}",
            field.label(),
            filters.get(field),
            accepted
        );
    }
    Ok(())
}

fn options_listing() -> String {
    let mut out = String::new();
    for field in FilterField::ALL {
        if let Some(options) = field.options() {
            out.push_str(&format!("{}:\n", field.label()));
            for option in options {
                let value = if option.value.is_empty() {
                    "(empty)"
                } else {
                    option.value
                };
                out.push_str(&format!("  {:<12} {}\n", value, option.label));
            }
        }
    }
    out
}
