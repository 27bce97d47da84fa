//! New command implementation.
//!
//! The `toolbox new <name>` command creates a project from a template
//! archive. The archive is downloaded with `curl` next to the new directory,
//! unpacked into it with `tar` and then removed.

use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

use crate::cli::flags;
use crate::error::{Result, ToolboxError};
use crate::shell::quote;
use crate::ui::UserInterface;

use super::dispatcher::{Command, Context};
use super::shell_failure;

/// The new command implementation.
pub struct NewCommand;

impl NewCommand {
    /// Command that downloads `template` to `archive`.
    pub fn download_command(template: &str, archive: &str) -> String {
        format!("curl -L -s -f {} -o {}", quote(template), quote(archive))
    }

    /// Command that unpacks `archive` into `name`, dropping the archive's
    /// top-level directory.
    pub fn extract_command(archive: &str, name: &str) -> String {
        format!(
            "tar -xzf {} --strip-components=1 -C {}",
            quote(archive),
            quote(name)
        )
    }
}

fn positional(args: &[String]) -> Vec<&str> {
    args.iter()
        .map(String::as_str)
        .filter(|arg| !arg.starts_with("--"))
        .collect()
}

/// Best-effort cleanup; a path that is already gone is not an error.
fn remove_path(path: &Path, ui: &mut dyn UserInterface) {
    let removed = if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    match removed {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            warn!("Failed to remove {}: {}", path.display(), e);
            ui.warning(&format!("Could not remove {}.", path.display()));
        }
    }
}

/// Download `template` next to `name` and unpack it into `name`.
///
/// The archive is removed whether or not extraction succeeds.
fn fetch_template(ctx: &mut Context<'_>, template: &str, name: &str) -> Result<()> {
    let archive = format!("{}.tar.gz", name);
    let archive_path = ctx.project_root.join(&archive);

    ctx.ui.message("Cloning template...");
    if let Err(e) = ctx.shell.run(&NewCommand::download_command(template, &archive)) {
        remove_path(&archive_path, ctx.ui);
        return Err(shell_failure(
            e,
            "Download cancelled.",
            "Could not download template.",
            &["Check your network connection and the template URL."],
        ));
    }

    let extracted = ctx.shell.run(&NewCommand::extract_command(&archive, name));
    remove_path(&archive_path, ctx.ui);
    extracted.map_err(|e| {
        shell_failure(e, "Extraction cancelled.", "Could not extract template.", &[])
    })
}

impl Command for NewCommand {
    fn id(&self) -> &str {
        "new"
    }

    fn help(&self) -> &[&str] {
        &[
            "new <project-name>",
            "Clones the template project into a new directory.",
            "Use --template=<url> to start from another archive.",
        ]
    }

    fn dependencies(&self) -> &[&str] {
        &["curl", "tar"]
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<()> {
        let name = match positional(args).as_slice() {
            [name] => name.to_string(),
            _ => return Err(ToolboxError::failed("Invalid number of arguments.")),
        };

        let target = ctx.project_root.join(&name);
        if target.exists() {
            return Err(ToolboxError::failed(format!(
                "Directory \"{}\" already exists.",
                name
            )));
        }

        let template = match flags::value(args, "template") {
            Some("") => return Err(ToolboxError::failed("Missing value for --template.")),
            Some(url) => url.to_string(),
            None => ctx.settings()?.template.clone(),
        };

        fs::create_dir(&target).map_err(|e| {
            ToolboxError::failed(format!("Could not create directory \"{}\": {}", name, e))
        })?;

        if let Err(e) = fetch_template(ctx, &template, &name) {
            remove_path(&target, ctx.ui);
            return Err(e);
        }

        ctx.ui.success(&format!("Project \"{}\" has been created.", name));
        ctx.ui
            .message(&format!("Type `cd {}` to enter the project directory.", name));
        Ok(())
    }
}
