//! Error types for shellflow.

use thiserror::Error;

use crate::cli::CliMode;

/// Main error type for shellflow operations.
#[derive(Error, Debug)]
pub enum Error {
    /// URL resolution errors
    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    /// Flow-level validation and orchestration errors
    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),

    /// Errors surfaced by the injected CLI handler or device hooks
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Errors from the external automation-platform API
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// URL resolution errors.
#[derive(Error, Debug)]
pub enum UrlError {
    /// No URL grammar matched after all fallback attempts
    #[error("Unable to parse URL from '{input}'")]
    Parse { input: String },
}

/// Flow-level errors (bad arguments, missing capabilities).
#[derive(Error, Debug)]
pub enum FlowError {
    /// Configuration type string is not "running" or "startup"
    #[error("Invalid configuration type '{value}', expected 'running' or 'startup'")]
    InvalidConfigurationType { value: String },

    /// Restore method string is not "override" or "append"
    #[error("Invalid restore method '{value}', expected 'override' or 'append'")]
    InvalidRestoreMethod { value: String },

    /// Orchestration custom params payload is not valid JSON
    #[error("Invalid custom params payload: {0}")]
    InvalidCustomParams(#[from] serde_json::Error),

    /// The CLI handler has no definition for the required mode
    #[error("CLI handler configuration is missing, {mode} mode has to be defined")]
    ModeNotConfigured { mode: CliMode },

    /// Operation is not available on this device family
    #[error("{operation} is not supported for the current device")]
    Unsupported { operation: String },
}

/// CLI handler and device hook errors.
#[derive(Error, Debug)]
pub enum CliError {
    /// Failed to open a session in the requested mode
    #[error("Failed to open {mode} session: {message}")]
    SessionFailed { mode: CliMode, message: String },

    /// A device command failed
    #[error("Command '{command}' failed: {message}")]
    CommandFailed { command: String, message: String },
}

/// Automation-platform API errors.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The set-resource-live-status call failed
    #[error("Failed to update live status for '{resource}': {message}")]
    StatusUpdateFailed { resource: String, message: String },
}

/// Result type alias using shellflow's Error.
pub type Result<T> = std::result::Result<T, Error>;
