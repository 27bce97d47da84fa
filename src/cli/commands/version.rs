//! Version command implementation.

use crate::error::Result;

use super::dispatcher::{Command, Context};

/// The version command implementation.
pub struct VersionCommand;

impl Command for VersionCommand {
    fn id(&self) -> &str {
        "version"
    }

    fn help(&self) -> &[&str] {
        &["Prints the toolbox version."]
    }

    fn execute(&self, _args: &[String], ctx: &mut Context<'_>) -> Result<()> {
        ctx.ui
            .message(&format!("toolbox {}", env!("CARGO_PKG_VERSION")));
        Ok(())
    }
}
