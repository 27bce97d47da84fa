//! Run command implementation.
//!
//! The `toolbox run` command starts a previously built executable.

use crate::cli::flags;
use crate::error::{Result, ToolboxError};
use crate::shell::{join_command, quote};

use super::dispatcher::{Command, Context};
use super::shell_failure;

/// The run command implementation.
pub struct RunCommand;

impl RunCommand {
    /// Path of the executable relative to the project root.
    pub fn executable_path(release: bool, name: &str) -> String {
        let configuration = if release { "release" } else { "debug" };
        format!(".build/{}/{}", configuration, name)
    }
}

impl Command for RunCommand {
    fn id(&self) -> &str {
        "run"
    }

    fn help(&self) -> &[&str] {
        &[
            "Runs the compiled application.",
            "Use --release to run the release build.",
            "Use --name=<executable> to choose the product to run.",
        ]
    }

    fn dependencies(&self) -> &[&str] {
        &["swift"]
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<()> {
        let release = flags::has(args, "release");
        let name = match flags::value(args, "name") {
            Some("") => return Err(ToolboxError::failed("Missing value for --name.")),
            Some(name) => name.to_string(),
            None => ctx.settings()?.executable.clone(),
        };

        let executable = Self::executable_path(release, &name);
        if !ctx.project_root.join(&executable).is_file() {
            let build = if release {
                "Run `toolbox build --release` first."
            } else {
                "Run `toolbox build` first."
            };
            return Err(ToolboxError::failed_with_hints(
                format!("Could not find executable {}.", executable),
                &[build],
            ));
        }

        ctx.ui.message(&format!("Running {}...", name));
        let command = join_command(
            &quote(&executable),
            &flags::strip(args, &["release", "name"]),
        );
        ctx.shell
            .run(&command)
            .map_err(|e| shell_failure(e, "Run cancelled.", "Could not run project.", &[]))
    }
}
