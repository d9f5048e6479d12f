//! Tumorboard — therapy recommendation board.
//! Entry point for the command-line binary.

mod cli;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tumorboard_board::lifecycle::{new_recommendation, sample_recommendation};
use tumorboard_board::{BoardSettings, InMemoryStore, PatientBundle, RecommendationBoard};
use tumorboard_config::{Config, ConfigError};
use tumorboard_literature::{EsummaryClient, ReferenceResolver};

use cli::{Cli, Command};

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let loaded = match path {
        Some(p) => Config::load_from(p),
        None => Config::load(),
    };
    match loaded {
        Ok(c) => Ok(c),
        // Only an implicit config may be missing
        Err(ConfigError::NotFound(p)) if path.is_none() => {
            warn!("Config file {} not found, using defaults", p.display());
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

fn load_bundle(path: &Path) -> anyhow::Result<PatientBundle> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read patient bundle {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid patient bundle {}", path.display()))
}

fn build_board(config: &Config, bundle: PatientBundle) -> anyhow::Result<RecommendationBoard<InMemoryStore>> {
    let lookup = EsummaryClient::from_config(&config.literature)?;
    let resolver = ReferenceResolver::new(Arc::new(lookup));
    Ok(RecommendationBoard::new(
        bundle.context,
        InMemoryStore::new(bundle.therapy_recommendations),
        resolver,
        BoardSettings::from_config(config),
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tumorboard=debug,info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Rows { input, resolve } => {
            let mut board = build_board(&config, load_bundle(&input)?)?;
            if resolve {
                board.refresh().await?;
            }
            println!("{}", serde_json::to_string_pretty(&board.rows())?);
        }
        Command::References { input } => {
            let mut board = build_board(&config, load_bundle(&input)?)?;
            board.refresh().await?;
            let cache = board.resolver().cache();
            info!(n_resolved = cache.len(), "Reference names resolved");
            for (pmid, name) in cache.snapshot() {
                println!("{}\t{}", pmid, name);
            }
        }
        Command::Export { input, out_dir } => {
            let board = build_board(&config, load_bundle(&input)?)?;
            let path = out_dir.join(board.download_filename());
            std::fs::write(&path, board.export_json()?)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), n = board.recommendations().len(), "Exported recommendations");
            println!("{}", path.display());
        }
        Command::New { patient_id, sample } => {
            let credentials = &config.recommender.credentials;
            let rec = if sample {
                sample_recommendation(&patient_id, credentials)
            } else {
                new_recommendation(&patient_id, credentials)
            };
            println!("{}", serde_json::to_string_pretty(&rec)?);
        }
    }

    Ok(())
}
