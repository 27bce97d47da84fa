//! Xcode command implementation.
//!
//! `toolbox xcode` generates an Xcode project for the package, drops the
//! schemes generated for dependencies and opens the project when Xcode is
//! available.

use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

use crate::error::{Result, ToolboxError};
use crate::manifest::read_package_name;
use crate::shell::{is_macos, quote};

use super::dispatcher::{Command, Context};
use super::shell_failure;

/// Command that writes `<name>.xcodeproj`.
const GENERATE_COMMAND: &str = "swift package generate-xcodeproj";

/// The xcode command implementation.
pub struct XcodeCommand;

/// Remove every shared scheme in `project` except the one named `keep`.
///
/// Returns the number of schemes removed.
pub fn remove_extra_schemes(project: &Path, keep: &str) -> io::Result<usize> {
    let schemes = project.join("xcshareddata").join("xcschemes");
    let mut removed = 0;

    for entry in fs::read_dir(&schemes)? {
        let path = entry?.path();
        let is_scheme = path.extension().is_some_and(|ext| ext == "xcscheme");
        let stem = path.file_stem().and_then(|s| s.to_str());
        if is_scheme && stem != Some(keep) {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }

    Ok(removed)
}

impl Command for XcodeCommand {
    fn id(&self) -> &str {
        "xcode"
    }

    fn help(&self) -> &[&str] {
        &["Generates and opens an Xcode project."]
    }

    fn dependencies(&self) -> &[&str] {
        &["swift"]
    }

    fn execute(&self, _args: &[String], ctx: &mut Context<'_>) -> Result<()> {
        ctx.ui.message("Generating Xcode project...");
        ctx.shell.run(GENERATE_COMMAND).map_err(|e| {
            shell_failure(
                e,
                "Generation cancelled.",
                "Could not generate Xcode project.",
                &["Run `toolbox build` to check that the package builds."],
            )
        })?;

        let name = read_package_name(&ctx.project_root)?;
        let project = format!("{}.xcodeproj", name);

        if let Err(e) = remove_extra_schemes(&ctx.project_root.join(&project), &name) {
            warn!("Failed to clean up schemes in {}: {}", project, e);
            ctx.ui
                .warning(&format!("Could not remove extra schemes from {}.", project));
        }

        if !is_macos() {
            ctx.ui
                .success(&format!("Generated {}. Open it in Xcode on macOS.", project));
            return Ok(());
        }

        ctx.ui.message(&format!("Opening {}...", project));
        ctx.shell
            .run(&format!("open {}", quote(&project)))
            .map_err(|e| {
                if e.is_cancelled() {
                    ToolboxError::failed("Open cancelled.")
                } else {
                    ToolboxError::failed(format!("Could not open {}.", project))
                }
            })
    }
}
