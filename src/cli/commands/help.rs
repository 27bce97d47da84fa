//! Help command implementation.
//!
//! The `toolbox help` command prints usage and every command's description.

use crate::cli::help::render_help;
use crate::error::Result;

use super::dispatcher::{Command, Context};

/// The help command implementation.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn id(&self) -> &str {
        "help"
    }

    fn help(&self) -> &[&str] {
        &["Prints out usage information."]
    }

    fn execute(&self, _args: &[String], ctx: &mut Context<'_>) -> Result<()> {
        let text = render_help(&ctx.directory, ctx.commands);
        ctx.ui.message(&text);
        Ok(())
    }
}
