//! Clean command implementation.
//!
//! The `toolbox clean` command removes fetched packages and build output.

use crate::error::Result;

use super::dispatcher::{Command, Context};
use super::shell_failure;

/// Directories `clean` removes.
const CLEAN_COMMAND: &str = "rm -rf Packages .build";

/// The clean command implementation.
pub struct CleanCommand;

impl Command for CleanCommand {
    fn id(&self) -> &str {
        "clean"
    }

    fn help(&self) -> &[&str] {
        &["Cleans temporary files--usually fixes", "a plethora of bizarre build errors."]
    }

    fn execute(&self, _args: &[String], ctx: &mut Context<'_>) -> Result<()> {
        ctx.ui.message("Cleaning...");
        ctx.shell.run(CLEAN_COMMAND).map_err(|e| {
            shell_failure(e, "Clean cancelled.", "Could not clean project.", &[])
        })?;
        ctx.ui.success("Cleaned.");
        Ok(())
    }
}
