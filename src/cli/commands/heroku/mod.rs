//! Heroku command implementation.
//!
//! `toolbox heroku` is a compound command: its first argument names a
//! subcommand, which is resolved and run through the same registry dispatch
//! as top-level commands.

pub mod init;
pub mod push;

use crate::cli::registry::Registry;
use crate::error::{Result, ToolboxError};

use super::dispatcher::{Command, Context};

/// Parent id shown in subcommand errors.
const PARENT: &str = "heroku";

/// Command that succeeds only when tracked files match `HEAD`.
const CLEAN_TREE_COMMAND: &str = "git diff --quiet HEAD";

/// The heroku command implementation.
pub struct HerokuCommand {
    subcommands: Registry,
}

impl HerokuCommand {
    /// Create the command with its `init` and `push` subcommands.
    pub fn new() -> Self {
        let mut subcommands: Registry = Registry::subcommands_of(PARENT);
        subcommands.register(Box::new(init::InitCommand));
        subcommands.register(Box::new(push::PushCommand));
        Self { subcommands }
    }

    /// Registered subcommands.
    pub fn subcommands(&self) -> &Registry {
        &self.subcommands
    }
}

impl Default for HerokuCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for HerokuCommand {
    fn id(&self) -> &str {
        PARENT
    }

    fn help(&self) -> &[&str] {
        &[
            "Configures a new Heroku project or pushes to an existing one.",
            "heroku init",
            "heroku push",
        ]
    }

    fn dependencies(&self) -> &[&str] {
        &["git", "heroku"]
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<()> {
        self.subcommands.dispatch(args, ctx)
    }
}

/// Fail unless the working tree has no uncommitted changes.
pub(crate) fn ensure_clean_tree(ctx: &Context<'_>) -> Result<()> {
    ctx.shell.run_quiet(CLEAN_TREE_COMMAND).map_err(|e| {
        tracing::debug!("Working tree check failed: {}", e);
        ToolboxError::failed_with_hints(
            "Found uncommitted changes.",
            &["Commit or stash your changes before continuing."],
        )
    })
}
