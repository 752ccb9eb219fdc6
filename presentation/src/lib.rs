//! Presentation layer for house-price
//!
//! This crate contains CLI definitions, the HTTP server, the terminal
//! dashboard and console output formatters.

pub mod cli;
pub mod dashboard;
pub mod output;
pub mod server;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, PredictArgs, ServeArgs};
pub use dashboard::{DashboardApp, DashboardState};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use server::{AppState, build_router, serve};
