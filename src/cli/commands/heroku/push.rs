//! `toolbox heroku push`: deploy committed changes.

use crate::cli::flags;
use crate::error::Result;
use crate::shell::quote;

use super::super::dispatcher::{Command, Context};
use super::super::shell_failure;
use super::ensure_clean_tree;

/// Branch pushed when `--branch` is not given.
const DEFAULT_BRANCH: &str = "master";

/// The heroku push subcommand implementation.
pub struct PushCommand;

impl Command for PushCommand {
    fn id(&self) -> &str {
        "push"
    }

    fn help(&self) -> &[&str] {
        &["Pushes the current branch to Heroku.", "Use --branch=<name> to push another branch."]
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<()> {
        ensure_clean_tree(ctx)?;

        let branch = flags::value(args, "branch")
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_BRANCH);

        ctx.ui.message("Pushing to Heroku...");
        ctx.shell
            .run(&format!("git push heroku {}", quote(branch)))
            .map_err(|e| {
                shell_failure(
                    e,
                    "Push cancelled.",
                    "Could not push to Heroku.",
                    &["Run `toolbox heroku init` if the project has no Heroku app yet."],
                )
            })?;

        ctx.ui.success("Pushed to Heroku.");
        Ok(())
    }
}
