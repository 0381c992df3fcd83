//! Binary crate for the `tubtools` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive prompting (weather loop, evaporation calculator)
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod demo;
mod evap_session;
mod prompt;
mod report;
mod weather_loop;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
