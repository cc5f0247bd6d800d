mod api;
mod cli;
mod config;
mod handlers;
mod models;
mod routes;
mod views;

#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::Config;

#[actix_web::main]
async fn main() -> Result<ExitCode> {
    dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            serve(&cli.config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Client(command) => {
            let succeeded = command.run(&cli.config).await?;
            Ok(if succeeded {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

async fn serve(config: &Config) -> Result<()> {
    let assets = web::Data::new(config.assets());
    if !assets.path().is_dir() {
        warn!("Asset root {} is not a directory", assets.path().display());
    }

    info!("http://{}:{}", config.host, config.port);
    HttpServer::new(move || App::new().app_data(assets.clone()).configure(routes::init))
        .bind((config.host.as_str(), config.port))
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?
        .run()
        .await
        .context("Asset server stopped unexpectedly")
}
