#![forbid(unsafe_code)]

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

mod chart;
mod cli;
mod config;
mod dataset;
mod db;
mod signal;
mod utils;
mod web;

use cli::{Cli, Command};
use config::Config;
use dataset::DatasetService;
use web::WebServer;
use web::metrics::Metrics;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let config = Arc::new(match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    });
    utils::logging::init_tracing(&config.logging);
    info!("gaussboard starting up");

    let db_manager = Arc::new(db::DatabaseManager::new(&config.database).await?);
    db_manager.migrate().await?;
    info!(
        path = db_manager.sqlite_path(),
        "connected to sqlite database"
    );

    let dataset = Arc::new(DatasetService::new(db_manager.clone(), config.clone()));

    match args.command() {
        Command::Seed => {
            let report = dataset.seed().await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Show => {
            let figure = dataset.load_chart().await?;
            println!("{}", serde_json::to_string_pretty(&figure)?);
        }
        Command::Serve => {
            let report = dataset.seed().await?;
            Metrics::set_samples_seeded(
                (report.abscissa_inserted + report.ordinate_inserted) as u64,
            );

            let web_server = WebServer::new(config.clone(), db_manager.clone(), dataset.clone());
            web_server.start().await?;
        }
    }

    info!("gaussboard shutting down");
    Ok(())
}
