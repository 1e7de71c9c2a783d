//! Binary crate for the Sahab weather terminal app.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Rendering the core's published view-state
//! - Language selection and persistence

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod menu;
mod view;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
