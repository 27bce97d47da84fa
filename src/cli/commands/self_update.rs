//! Self-update command implementation.
//!
//! `toolbox self-update` downloads the latest release archive for the host
//! platform, unpacks it in a staging directory and moves the new binary over
//! the one that is running.

use std::env;
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use tracing::{debug, warn};

use crate::error::{Result, ToolboxError};
use crate::shell::quote;

use super::dispatcher::{Command, Context};
use super::shell_failure;

/// Where release archives are published.
pub const RELEASE_URL: &str = "https://github.com/qutheory/vapor-toolbox/releases/latest/download";

/// Name of the binary inside a release archive.
const BINARY_NAME: &str = "toolbox";

/// The self-update command implementation.
pub struct SelfUpdateCommand;

impl SelfUpdateCommand {
    /// Release archive name for the host platform.
    pub fn archive_name() -> String {
        format!("toolbox-{}-{}.tar.gz", env::consts::OS, env::consts::ARCH)
    }

    /// Binary to replace.
    ///
    /// An invocation path with a separator is taken relative to the project
    /// root; a bare name came from PATH, so the running executable is used.
    pub fn install_target(directory: &str, project_root: &Path) -> Result<PathBuf> {
        if directory.contains('/') || directory.contains(MAIN_SEPARATOR) {
            return Ok(project_root.join(directory));
        }
        env::current_exe().map_err(|e| {
            ToolboxError::failed(format!("Could not locate the running toolbox: {}", e))
        })
    }

    fn staging_dir() -> PathBuf {
        env::temp_dir().join(format!("toolbox-update-{}", std::process::id()))
    }
}

impl Command for SelfUpdateCommand {
    fn id(&self) -> &str {
        "self-update"
    }

    fn help(&self) -> &[&str] {
        &["Downloads and installs the latest toolbox."]
    }

    fn dependencies(&self) -> &[&str] {
        &["curl", "tar"]
    }

    fn execute(&self, _args: &[String], ctx: &mut Context<'_>) -> Result<()> {
        let target = Self::install_target(&ctx.directory, &ctx.project_root)?;
        let staging = Self::staging_dir();
        fs::create_dir_all(&staging)?;
        debug!("Staging update in {}", staging.display());

        let result = install(ctx, &staging, &target);

        if let Err(e) = fs::remove_dir_all(&staging) {
            warn!("Failed to remove {}: {}", staging.display(), e);
            ctx.ui.warning(&format!(
                "Could not remove temporary files in {}.",
                staging.display()
            ));
        }

        result?;
        ctx.ui.success("Toolbox updated.");
        Ok(())
    }
}

fn install(ctx: &mut Context<'_>, staging: &Path, target: &Path) -> Result<()> {
    let archive = staging.join(SelfUpdateCommand::archive_name());
    let archive = archive.to_string_lossy();
    let staging_str = staging.to_string_lossy();
    let url = format!("{}/{}", RELEASE_URL, SelfUpdateCommand::archive_name());

    ctx.ui.message("Downloading...");
    ctx.shell
        .run(&format!("curl -L -s -f {} -o {}", quote(&url), quote(&archive)))
        .map_err(|e| {
            shell_failure(
                e,
                "Update cancelled.",
                "Could not download update.",
                &["Check your network connection."],
            )
        })?;

    ctx.shell
        .run(&format!("tar -xzf {} -C {}", quote(&archive), quote(&staging_str)))
        .map_err(|e| shell_failure(e, "Update cancelled.", "Could not extract update.", &[]))?;

    ctx.ui.message("Installing...");
    let binary = staging.join(BINARY_NAME);
    ctx.shell
        .run(&format!(
            "mv -f {} {}",
            quote(&binary.to_string_lossy()),
            quote(&target.to_string_lossy())
        ))
        .map_err(|e| {
            shell_failure(
                e,
                "Update cancelled.",
                "Could not install update.",
                &["Check that you can write to the toolbox binary."],
            )
        })
}
