use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};
use tubtools_core::Config;

use crate::{demo, evap_session, weather_loop};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "tubtools", version, about = "Backyard hot-tub toolkit")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Interactive weather lookup by city name.
    Weather,

    /// Interactive hot-tub evaporation calculator.
    Evaporation {
        /// Accept every default without prompting.
        #[arg(long)]
        defaults: bool,
    },

    /// Iterator adapter walkthrough (fixed, deterministic output).
    Demo,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Weather => weather_loop::run().await,
            Command::Evaporation { defaults } => evap_session::run(defaults),
            Command::Demo => {
                print!("{}", demo::demo_text());
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.api_key = Some(api_key);
    config.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}
