//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for describing, checking and executing commands.
//!
//! # Architecture
//!
//! Commands are collected into a [`Registry`] by [`builtin_commands`] and
//! dispatched via [`CommandDispatcher`]. The `heroku` command owns a second
//! registry for its subcommands and dispatches through the same code path.

pub mod build;
pub mod clean;
pub mod dispatcher;
pub mod heroku;
pub mod help;
pub mod new;
pub mod run;
pub mod self_update;
pub mod version;
pub mod xcode;

pub use dispatcher::{report_error, Command, CommandDispatcher, Context};

use crate::cli::registry::Registry;
use crate::error::ToolboxError;
use crate::shell::ShellError;

/// All built-in commands, in help order.
pub fn builtin_commands() -> Registry {
    let mut registry: Registry = Registry::new();
    registry.register(Box::new(help::HelpCommand));
    registry.register(Box::new(version::VersionCommand));
    registry.register(Box::new(clean::CleanCommand));
    registry.register(Box::new(build::BuildCommand));
    registry.register(Box::new(run::RunCommand));
    registry.register(Box::new(new::NewCommand));
    registry.register(Box::new(self_update::SelfUpdateCommand));
    registry.register(Box::new(xcode::XcodeCommand));
    registry.register(Box::new(heroku::HerokuCommand::new()));
    registry
}

/// Pick the user-facing message for a failed subprocess.
pub(crate) fn shell_failure(
    err: ShellError,
    cancelled: &str,
    failed: &str,
    hints: &[&str],
) -> ToolboxError {
    tracing::debug!("Subprocess failed: {}", err);
    if err.is_cancelled() {
        ToolboxError::failed(cancelled)
    } else {
        ToolboxError::failed_with_hints(failed, hints)
    }
}
