mod report;
mod routes;
mod state;

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use railstat_core::{JourneyPipeline, RailstatConfig, Session};
use state::AppState;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Time-in-transit statistics for train travel history exports", long_about = None)]
struct Cli {
    /// TOML configuration file (falls back to RAILSTAT_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize time in transit for a travel history export
    Summary(SummaryArgs),
    /// List the stations seen in a travel history export
    Stations(StationsArgs),
    /// Start the HTTP API
    Serve(ServeArgs),
}

#[derive(Args, Debug, Default)]
struct SummaryArgs {
    /// Travel history CSV export
    file: Option<PathBuf>,
    /// Only count journeys that start and end at these stations (repeatable)
    #[arg(long = "station")]
    stations: Vec<String>,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Default)]
struct StationsArgs {
    /// Travel history CSV export
    file: Option<PathBuf>,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Address to listen on (overrides server.bind)
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if matches!(cli.command, Command::Serve(_)) {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    let config =
        RailstatConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    let pipeline = JourneyPipeline::from_config(&config.parser)?;

    match cli.command {
        Command::Summary(args) => handle_summary(&pipeline, args).await,
        Command::Stations(args) => handle_stations(&pipeline, args).await,
        Command::Serve(args) => {
            let bind = args.bind.unwrap_or(config.server.bind);
            handle_serve(pipeline, &bind).await
        }
    }
}

async fn handle_summary(pipeline: &JourneyPipeline, args: SummaryArgs) -> Result<()> {
    let output = pipeline.run(args.file.as_deref()).await?;

    let summary = if args.stations.is_empty() {
        output.summary.clone()
    } else {
        let mut session = Session::new();
        session.replace(&output);
        let selected: HashSet<String> = args.stations.into_iter().collect();
        session
            .filter_summary(&selected)
            .context("station filter left nothing to summarize")?
    };

    if args.json {
        let report = report::SummaryReport {
            file_hash: &output.file_hash,
            summary: &summary,
            stations: &output.stations,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report::summary_table(&summary));
    }

    Ok(())
}

async fn handle_stations(pipeline: &JourneyPipeline, args: StationsArgs) -> Result<()> {
    let output = pipeline.run(args.file.as_deref()).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output.stations)?);
    } else {
        println!("{}", report::stations_table(&output.stations));
    }

    Ok(())
}

async fn handle_serve(pipeline: JourneyPipeline, bind: &str) -> Result<()> {
    let app_state = Arc::new(AppState::new(pipeline));
    let router = routes::router(app_state);

    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}
