//! Error types for toolbox operations.
//!
//! This module defines [`ToolboxError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Commands return `ToolboxError` instead of exiting the process
//! - `main` is the only place that turns an error into an exit status
//! - Use `anyhow::Error` (via `ToolboxError::Other`) for unexpected errors
//! - Every error carries a one-line cause; some carry remediation hints

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for toolbox operations.
#[derive(Debug, Error)]
pub enum ToolboxError {
    /// The process was started without a program path.
    #[error("no directory")]
    NoDirectory,

    /// No command identifier was given.
    #[error("no command")]
    NoCommand,

    /// The command identifier did not match any registered command.
    #[error("Command \"{id}\" not found")]
    UnknownCommand { id: String },

    /// A compound command was given a missing or unknown subcommand.
    #[error("{}. Use one of: [{available}]", subcommand_problem(.parent, .id))]
    UnknownSubcommand {
        parent: String,
        id: Option<String>,
        available: String,
    },

    /// An external tool required by a command is not on PATH.
    #[error("{command} requires {dependency}, which was not found on your PATH")]
    MissingDependency { command: String, dependency: String },

    /// A command could not complete.
    #[error("{message}")]
    CommandFailed { message: String, hints: Vec<String> },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn subcommand_problem(parent: &str, id: &Option<String>) -> String {
    match id {
        Some(id) => format!("Unknown {} subcommand \"{}\"", parent, id),
        None => format!("Missing {} subcommand", parent),
    }
}

impl ToolboxError {
    /// A command failure with no remediation hints.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::CommandFailed {
            message: message.into(),
            hints: Vec::new(),
        }
    }

    /// A command failure followed by remediation hints.
    pub fn failed_with_hints(message: impl Into<String>, hints: &[&str]) -> Self {
        Self::CommandFailed {
            message: message.into(),
            hints: hints.iter().map(|h| h.to_string()).collect(),
        }
    }

    /// Remediation hints to print after the error line.
    pub fn hints(&self) -> &[String] {
        match self {
            Self::CommandFailed { hints, .. } => hints,
            _ => &[],
        }
    }

    /// Process exit status for this error.
    ///
    /// Cancellation (status 2 from a subprocess) is reported as an ordinary
    /// failure, so every fatal path exits with 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type alias for toolbox operations.
pub type Result<T> = std::result::Result<T, ToolboxError>;
