//! `gsc-tracker`: query the Green Supply Chain Tracker data service

mod cli;
mod commands;
mod render;

use anyhow::Context;
use gsc_service::{DataService, LatencyProfile, ServiceConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "warn,gsc_service=info,gsc_views=info,gsc_tracker=info";

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);
    // Logs go to stderr so stdout stays clean for --json output
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli::command().get_matches();
    let options = cli::Options::from_matches(&matches)?;
    init_tracing(options.log_json);

    let mut config = match &options.config {
        Some(path) => ServiceConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServiceConfig::new(),
    };
    if options.instant {
        config = config.with_latency(LatencyProfile::instant());
    }

    let service = DataService::seeded(config).context("building data service")?;
    let output = commands::execute(&service, &options.request, options.json).await?;
    println!("{}", output.trim_end());

    let stats = service.stats();
    tracing::debug!(
        requests = stats.requests,
        ledger_fetches = stats.ledger_fetches,
        "done"
    );
    Ok(())
}
