use anyhow::{Context, bail};
use clap::{ArgAction, Parser, Subcommand};
use foreca_core::{Config, FetchMode, fetcher_from_config, observe};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::report;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "foreca", version, about = "Latest Foreca weather observation")]
pub struct Cli {
    /// Use this config file instead of the platform default.
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch (or read from cache) and print the latest observation.
    Show {
        /// Override the configured fetch mode: "live" renders the page in a
        /// headless browser and refreshes the cache, "cached" reads the saved page.
        #[arg(long, value_name = "MODE", value_parser = parse_mode)]
        mode: Option<FetchMode>,

        /// Print the observation as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Inspect or create the configuration file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the configuration file location.
    Path,

    /// Print the effective configuration.
    Show,

    /// Write a configuration file with default values.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

fn parse_mode(value: &str) -> anyhow::Result<FetchMode> {
    FetchMode::try_from(value)
}

/// Load from `--config` when given, otherwise from the platform location.
fn load_config(file: Option<&Path>) -> anyhow::Result<Config> {
    match file {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Save to `--config` when given, otherwise to the platform location.
fn save_config(config: &Config, file: Option<&Path>) -> anyhow::Result<PathBuf> {
    match file {
        Some(path) => {
            config.save_to(path)?;
            Ok(path.to_path_buf())
        }
        None => config.save(),
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let file = self.config_file.as_deref();

        match self.command {
            Command::Show { mode, json } => {
                let mut config = load_config(file)?;
                if let Some(mode) = mode {
                    config.mode = mode;
                }
                info!(mode = %config.mode, cache = %config.cache_path.display(), "observing");

                let source = fetcher_from_config(&config);
                let obs = observe(source.as_ref())
                    .await
                    .with_context(|| format!("Failed to get observation for {}", config.location))?;

                if json {
                    println!("{}", serde_json::to_string_pretty(&obs)?);
                } else {
                    println!("{}", report::render(&config.location, &obs));
                }
            }
            Command::Config { action } => match action {
                ConfigAction::Path => {
                    let path = match file {
                        Some(path) => path.to_path_buf(),
                        None => Config::config_file_path()?,
                    };
                    println!("{}", path.display());
                }
                ConfigAction::Show => {
                    let config = load_config(file)?;
                    print!("{}", config.to_toml()?);
                }
                ConfigAction::Init { force } => {
                    if !force {
                        let existing = match file {
                            Some(path) => path.to_path_buf(),
                            None => Config::config_file_path()?,
                        };
                        if existing.exists() {
                            bail!(
                                "Config file already exists: {}\n\
                                 Hint: pass --force to overwrite it.",
                                existing.display()
                            );
                        }
                    }
                    let path = save_config(&Config::default(), file)?;
                    println!("Wrote default configuration to {}", path.display());
                }
            },
        }

        Ok(())
    }
}
