//! # smarthomectl — smarthome command-line front end
//!
//! Composition root that builds a home from configuration and runs one
//! controller operation.
//!
//! ## Responsibilities
//! - Parse CLI arguments and load configuration (file + env vars)
//! - Initialise logging
//! - Register the configured devices with a fresh controller
//! - Dispatch the requested command and print the resulting status strings
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod cli;
mod config;

use anyhow::Context;
use clap::Parser;
use smarthome_app::controller::SmartHomeController;
use smarthome_app::registry::DeviceRegistry;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::{Config, OutputFormat};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let registry: DeviceRegistry = config.devices.iter().cloned().collect();
    tracing::debug!(devices = registry.len(), "home assembled");
    let mut controller = SmartHomeController::with_registry(registry);

    let report = cli
        .command
        .run(&mut controller, &config)
        .context("device operation failed")?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    let rendered = report.render(format).context("failed to render output")?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }

    Ok(())
}
