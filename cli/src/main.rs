//! CLI entrypoint for House Price
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use pricing_application::{
    ArtifactState, ArtifactStore, LoadCatalogUseCase, PipelineConfig, PipelineContext,
};
use pricing_domain::{ModelKey, RawFeatureInput};
use pricing_infrastructure::{ConfigLoader, CsvLocationSource, FileArtifactStore, FileConfig};
use pricing_presentation::{
    Cli, Command, ConsoleFormatter, DashboardApp, PredictArgs, ServeArgs, serve,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let command = cli
        .command
        .clone()
        .unwrap_or(Command::Serve(ServeArgs::default()));

    // Load configuration file(s)
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli, &command);
    config.validate().context("Invalid configuration")?;

    // Initialize logging based on verbosity level; the dashboard owns
    // the terminal so its logs are discarded
    let writer = if matches!(command, Command::Dashboard) {
        BoxMakeWriter::new(std::io::sink)
    } else {
        BoxMakeWriter::new(std::io::stderr)
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(cli.verbose, config.server.debug)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .init();

    info!("Starting House Price");

    // === Dependency Injection ===
    let context = Arc::new(build_context(&config.to_pipeline_config()));

    match command {
        Command::Serve(_) => run_server(&config, context).await,
        Command::Dashboard => DashboardApp::new(context)
            .run()
            .await
            .context("Dashboard terminated with an error"),
        Command::Predict(args) => {
            run_prediction(&context, args);
            Ok(())
        }
    }
}

/// Command-line flags take precedence over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli, command: &Command) {
    if cli.debug {
        config.server.debug = true;
    }
    if let Some(dataset) = &cli.dataset {
        config.data.dataset = dataset.display().to_string();
    }
    for (key, path) in &cli.artifact {
        config
            .models
            .artifacts
            .insert(key.clone(), path.display().to_string());
    }
    if let Command::Serve(args) = command {
        if let Some(host) = &args.host {
            config.server.host = host.clone();
        }
        if let Some(port) = args.port {
            config.server.port = port;
        }
    }
}

fn log_level(verbose: u8, debug: bool) -> &'static str {
    match verbose {
        0 | 1 if debug => "debug",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    }
}

/// Load artifacts and the location catalog once, then freeze them
fn build_context(pipeline: &PipelineConfig) -> PipelineContext {
    let store = FileArtifactStore::load(&pipeline.artifacts);
    for key in store.keys() {
        match store.state(&key) {
            ArtifactState::Loaded => info!("Model {} ready", key),
            ArtifactState::Unavailable(reason) => {
                warn!("Model {} will use fallback prices: {}", key, reason)
            }
        }
    }

    let source = CsvLocationSource::new(&pipeline.dataset);
    let catalog = LoadCatalogUseCase::new(&source).execute();

    info!(
        "{} of {} models loaded, {} locations available",
        store.loaded_count(),
        store.keys().len(),
        catalog.len()
    );

    PipelineContext::new(catalog, Arc::new(store))
        .with_default_models(pipeline.default_models.clone())
}

async fn run_server(config: &FileConfig, context: Arc<PipelineContext>) -> Result<()> {
    let host = config.server.host.as_str();
    let port = config.server.port;

    println!();
    println!("Bangalore House Price Prediction Web App");
    println!("  Running on port {}", port);
    println!("  Debug mode: {}", config.server.debug);
    println!("  Models loaded: {}", context.models_loaded());
    println!("  Locations available: {}", context.locations_available());
    println!();

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;

    serve(listener, context).await.context("Server error")
}

fn run_prediction(context: &PipelineContext, args: PredictArgs) {
    let models = if args.models.is_empty() {
        None
    } else {
        Some(args.models.iter().map(|m| ModelKey::from(m.as_str())).collect())
    };
    let features = RawFeatureInput::new(
        args.sqft.as_str(),
        args.bath.as_str(),
        args.bhk.as_str(),
        args.location.as_str(),
    );

    match context.predict(features, models) {
        Ok(outcome) if args.json => println!("{}", ConsoleFormatter::format_json(&outcome)),
        Ok(outcome) => println!("{}", ConsoleFormatter::format(&outcome)),
        Err(e) => {
            eprint!("{}", ConsoleFormatter::format_error(&e.to_string()));
            std::process::exit(2);
        }
    }
}
