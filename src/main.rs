//! Terminal dashboard for the benefits platform analytics API.
//!
//! # Usage
//!
//! ```bash
//! # Aggregate totals
//! cargo run -- summary
//!
//! # Second page of active food offers
//! cargo run -- offers --page 1 --rubro Food --status VIGENTE
//!
//! # Redemption chart for a custom range
//! cargo run -- chart redeemed --start-daily 2024-05-01 --start-monthly 2023-06-01 --end 2024-06-01
//!
//! # Everything at once
//! cargo run -- dashboard
//! ```
//!
//! # Environment Variables
//!
//! See [`benefits_stats::config`].

use anyhow::{Context, Result};
use benefits_stats::application::fetch_status::{FetchStatus, ViewLoader};
use benefits_stats::application::services::StatsService;
use benefits_stats::application::store::{Commit, StatisticsStore};
use benefits_stats::config::{self, Config};
use benefits_stats::domain::credential::AccessToken;
use benefits_stats::domain::date_window::{DateRangeForm, DateWindow};
use benefits_stats::domain::entities::OfferStatus;
use benefits_stats::domain::filter::{Choice, OfferFilter};
use benefits_stats::domain::repositories::ChartKind;
use benefits_stats::infrastructure::http::HttpAnalyticsRepository;
use benefits_stats::{report, telemetry};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::sync::Arc;

/// Statistics dashboard for the benefits platform.
#[derive(Parser)]
#[command(name = "benefits-stats")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show aggregate totals
    Summary,

    /// List the most viewed offers
    Offers {
        #[command(flatten)]
        listing: ListingArgs,
    },

    /// Show a daily and monthly time series
    Chart {
        #[arg(value_enum)]
        kind: ChartArg,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// Load every panel concurrently
    Dashboard {
        #[command(flatten)]
        listing: ListingArgs,

        #[command(flatten)]
        range: RangeArgs,
    },
}

#[derive(Args)]
struct ListingArgs {
    /// Zero-based page index
    #[arg(short, long, default_value_t = 0)]
    page: u32,

    /// Company rubro, or "All"
    #[arg(short, long, default_value = "All")]
    rubro: Choice<String>,

    /// VIGENTE, EXPIRADO or "All"
    #[arg(short, long, default_value = "All")]
    status: Choice<OfferStatus>,
}

impl ListingArgs {
    fn filter(&self) -> OfferFilter {
        OfferFilter {
            rubro: self.rubro.clone(),
            status: self.status.clone(),
        }
    }
}

/// Custom chart range; all three dates or none.
#[derive(Args)]
struct RangeArgs {
    /// First day of the daily series (YYYY-MM-DD)
    #[arg(long)]
    start_daily: Option<String>,

    /// First day of the monthly series (YYYY-MM-DD)
    #[arg(long)]
    start_monthly: Option<String>,

    /// Last day of both series (YYYY-MM-DD)
    #[arg(long)]
    end: Option<String>,
}

impl RangeArgs {
    fn window(&self) -> Result<DateWindow> {
        match (&self.start_daily, &self.start_monthly, &self.end) {
            (None, None, None) => Ok(DateWindow::current()),
            (Some(start_daily), Some(start_monthly), Some(end)) => {
                let window = DateRangeForm::new(start_daily, start_monthly, end).into_window()?;
                Ok(window)
            }
            _ => anyhow::bail!("--start-daily, --start-monthly and --end must be given together"),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ChartArg {
    OffersViews,
    Generated,
    Redeemed,
}

impl From<ChartArg> for ChartKind {
    fn from(arg: ChartArg) -> Self {
        match arg {
            ChartArg::OffersViews => ChartKind::OffersViews,
            ChartArg::Generated => ChartKind::CodesGenerated,
            ChartArg::Redeemed => ChartKind::CodesRedeemed,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Failed to load configuration")?;
    telemetry::init(&config)?;
    config.print_summary();

    let service = build_service(&config)?;
    let token = config.access_token.clone();

    match cli.command {
        Commands::Summary => show_summary(&service, &token).await,
        Commands::Offers { listing } => show_offers(&service, &token, &listing).await,
        Commands::Chart { kind, range } => {
            show_chart(&service, &token, kind.into(), &range.window()?).await
        }
        Commands::Dashboard { listing, range } => {
            show_dashboard(&service, &token, &listing, &range.window()?).await
        }
    }
}

fn build_service(config: &Config) -> Result<StatsService<HttpAnalyticsRepository>> {
    let api_url = config.parsed_api_url()?;
    let repository = match config.request_timeout() {
        Some(timeout) => HttpAnalyticsRepository::with_timeout(&api_url, timeout),
        None => HttpAnalyticsRepository::new(&api_url),
    }
    .context("Failed to build HTTP client")?;

    Ok(StatsService::new(
        Arc::new(repository),
        Arc::new(StatisticsStore::new()),
    ))
}

/// Prints `rendered` on success, or the generic no-data message on failure.
fn finish<T>(status: &FetchStatus<T>, rendered: impl FnOnce() -> String) -> Result<()> {
    if status.is_success() {
        print!("{}", rendered());
        return Ok(());
    }

    println!("{}", "No data available".red().bold());
    match status.error() {
        Some(err) => Err(anyhow::anyhow!(err.clone())),
        None => anyhow::bail!("Fetch did not complete"),
    }
}

async fn show_summary(
    service: &StatsService<HttpAnalyticsRepository>,
    token: &AccessToken,
) -> Result<()> {
    let mut view = ViewLoader::new();
    let status = view.load(service.fetch_summary(token)).await;
    finish(status, || report::summary(&service.store().snapshot()))
}

async fn show_offers(
    service: &StatsService<HttpAnalyticsRepository>,
    token: &AccessToken,
    listing: &ListingArgs,
) -> Result<()> {
    let mut view = ViewLoader::new();
    let status = view
        .load(service.change_page(token, listing.page, &listing.filter()))
        .await;
    finish(status, || report::offers(&service.store().snapshot()))
}

async fn show_chart(
    service: &StatsService<HttpAnalyticsRepository>,
    token: &AccessToken,
    kind: ChartKind,
    window: &DateWindow,
) -> Result<()> {
    let mut view = ViewLoader::new();
    let status = view.load(service.fetch_chart(token, kind, window)).await;
    finish(status, || report::chart(&service.store().snapshot(), kind))
}

async fn show_dashboard(
    service: &StatsService<HttpAnalyticsRepository>,
    token: &AccessToken,
    listing: &ListingArgs,
    window: &DateWindow,
) -> Result<()> {
    service.store().dispatch(Commit::SetPage(listing.page));

    let status = service
        .load_dashboard(token, &listing.filter(), window)
        .await;
    print!("{}", report::dashboard(&service.store().snapshot(), &status));

    if status.all_failed() {
        anyhow::bail!("No dashboard panel could be loaded");
    }
    Ok(())
}
