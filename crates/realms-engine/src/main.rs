//! Developer harness for the Realms production and notification engine.
//!
//! Runs one notification generation pass over a world snapshot read from a
//! JSON file and prints the resulting events as pretty JSON on stdout.
//!
//! # Usage
//!
//! ```text
//! realms-engine <input.json>
//! ```
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `realms-config.yaml` (or `REALMS_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Build the production clock from the labor config
//! 4. Read the input file
//! 5. Run the generation pass and print the events

mod config;
mod error;
mod input;

use std::path::PathBuf;

use realms_notifications::{GenerationInput, NotificationGenerator};
use realms_production::ProductionClock;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::input::EngineInput;

/// Application entry point for the engine harness.
///
/// # Errors
///
/// Returns an error if configuration, input, or the generation pass fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let (config, config_found) = load_config()?;

    // 2. Initialize structured logging. RUST_LOG wins over the config.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("realms-engine starting");
    if !config_found {
        info!("Config file not found, using defaults");
    }

    // 3. Build the production clock.
    let clock = ProductionClock::new(config.labor)?;
    info!(
        cycle_length = clock.cycle_length(),
        precision = clock.config().resource_precision,
        "Production clock initialized"
    );

    // 4. Read the input file.
    let input_path = input_path()?;
    let input = EngineInput::from_file(&input_path)?;
    let reference_time = input.reference_time.unwrap_or_else(wall_clock_seconds);
    info!(
        path = %input_path.display(),
        updates = input.updates.len(),
        reference_time,
        "Input loaded"
    );

    // 5. Generate and print.
    let realm_resources = input.resolved_realm_resources();
    let realm_positions = input.resolved_realm_positions();
    let generator = NotificationGenerator::new(clock, config.bonuses, input.chests);
    let events = generator.generate(&GenerationInput {
        snapshot: &input.snapshot,
        updates: &input.updates,
        realm_resources: &realm_resources,
        realm_positions: &realm_positions,
        reference_time,
    })?;
    info!(events = events.len(), "Generation pass complete");

    println!("{}", serde_json::to_string_pretty(&events)?);
    Ok(())
}

/// Load the engine config from `REALMS_CONFIG` or `realms-config.yaml`.
///
/// Returns the config and whether a file was found. A missing file yields
/// the defaults.
fn load_config() -> Result<(EngineConfig, bool), EngineError> {
    let config_path = config::config_path();
    if config_path.exists() {
        let config = EngineConfig::from_file(&config_path)?;
        Ok((config, true))
    } else {
        Ok((EngineConfig::default(), false))
    }
}

/// The input file path, taken from the first command line argument.
fn input_path() -> Result<PathBuf, EngineError> {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| EngineError::Usage {
            message: "missing input file".to_owned(),
        })
}

/// Current wall clock time in whole seconds since the Unix epoch.
fn wall_clock_seconds() -> u64 {
    let now = chrono::Utc::now().timestamp();
    u64::try_from(now).unwrap_or_else(|_| {
        warn!(now, "wall clock before the epoch, using 0");
        0
    })
}
