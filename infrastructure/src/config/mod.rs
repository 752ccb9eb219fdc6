//! Configuration file loading for house-price
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables (`PORT`, `DEBUG`, `HOUSE_PRICE_*`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./house-price.toml` or `./.house-price.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/house-price/config.toml`
//! 5. Default values
//!
//! Command-line overrides are applied by the binary on top of the result.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDataConfig, FileModelsConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
