//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for house-price
#[derive(Parser, Debug)]
#[command(name = "house-price")]
#[command(author, version, about = "Bangalore house price estimator")]
#[command(long_about = r#"
House Price estimates the sale price of a property (in lakhs of rupees)
from its area, bedroom count, bathroom count and locality.

Prices come from a pre-trained regression artifact. When the artifact is
missing or fails, a closed-form heuristic answers instead.

Configuration files are loaded from (in priority order):
1. Environment    PORT, DEBUG, HOUSE_PRICE_<SECTION>__<KEY>
2. --config <path>     Explicit config file
3. ./house-price.toml  Project-level config
4. ~/.config/house-price/config.toml   Global config

Example:
  house-price serve --port 8080
  house-price dashboard
  house-price predict --sqft 1200 --bath 2 --bhk 3 --location Whitefield
"#)]
pub struct Cli {
    /// What to run (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Enable debug mode (debug-level logging)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Dataset the location catalog is read from
    #[arg(long, value_name = "PATH", global = true)]
    pub dataset: Option<PathBuf>,

    /// Artifact file for a model key (can be specified multiple times)
    #[arg(long, value_name = "KEY=PATH", value_parser = parse_artifact, global = true)]
    pub artifact: Vec<(String, PathBuf)>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP server (HTML pages and JSON API)
    Serve(ServeArgs),
    /// Open the interactive terminal dashboard
    Dashboard,
    /// Estimate one property and print the result
    Predict(PredictArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,
}

#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    /// Total built-up area in square feet
    #[arg(long, value_name = "SQFT")]
    pub sqft: String,

    /// Number of bathrooms
    #[arg(long, value_name = "N")]
    pub bath: String,

    /// Number of bedrooms
    #[arg(long, value_name = "N")]
    pub bhk: String,

    /// Locality name
    #[arg(long, value_name = "NAME")]
    pub location: String,

    /// Models to run (can be specified multiple times)
    #[arg(short, long = "model", value_name = "KEY")]
    pub models: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_artifact(value: &str) -> Result<(String, PathBuf), String> {
    let (key, path) = value
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=PATH, got '{}'", value))?;
    let key = key.trim();
    if key.is_empty() || path.trim().is_empty() {
        return Err(format!("expected KEY=PATH, got '{}'", value));
    }
    Ok((key.to_string(), PathBuf::from(path.trim())))
}
