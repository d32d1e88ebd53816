//! Error types for the engine harness binary.

use std::path::PathBuf;

/// Top-level error for the engine harness.
///
/// Each variant wraps a specific subsystem error so `main` can propagate
/// everything with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// The configured labor constants were rejected.
    #[error("production error: {source}")]
    Production {
        /// The underlying production error.
        #[from]
        source: realms_production::ProductionError,
    },

    /// The generation pass failed.
    #[error("notification error: {source}")]
    Notification {
        /// The underlying notification error.
        #[from]
        source: realms_notifications::NotificationError,
    },

    /// The input file could not be read.
    #[error("failed to read input {path}: {source}")]
    Io {
        /// Path of the input file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The input file or the output could not be (de)serialized.
    #[error("JSON error: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// The command line was not usable.
    #[error("usage: realms-engine <input.json> ({message})")]
    Usage {
        /// What was wrong with the arguments.
        message: String,
    },
}
