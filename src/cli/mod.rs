//! Command-line interface for toolbox.
//!
//! # Architecture
//!
//! - [`args`] - Invocation shape (program path, command id, raw tokens)
//! - [`commands`] - The [`Command`] contract, dispatcher and built-in commands
//! - [`flags`] - Raw `--flag` and `--key=value` scanning
//! - [`help`] - Usage and help text
//! - [`registry`] - Ordered registries for commands and subcommands

pub mod args;
pub mod commands;
pub mod flags;
pub mod help;
pub mod registry;

pub use args::Invocation;
pub use commands::{builtin_commands, report_error, Command, CommandDispatcher, Context};
pub use help::{render_help, render_usage};
pub use registry::{Registry, Scope};
