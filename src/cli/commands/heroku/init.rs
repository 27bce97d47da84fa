//! `toolbox heroku init`: create a Heroku app for the project.

use std::fs;

use crate::error::{Result, ToolboxError};
use crate::shell::quote;
use crate::ui::Prompt;

use super::super::dispatcher::{Command, Context};
use super::super::shell_failure;
use super::ensure_clean_tree;

/// Process declaration Heroku starts the app with.
pub const PROCFILE_CONTENTS: &str = "web: App --port=$PORT\n";

const PROCFILE: &str = "Procfile";

/// The heroku init subcommand implementation.
pub struct InitCommand;

impl InitCommand {
    /// `heroku create`, with an app name when one was chosen.
    pub fn create_command(app_name: &str) -> String {
        if app_name.is_empty() {
            "heroku create".to_string()
        } else {
            format!("heroku create {}", quote(app_name))
        }
    }
}

impl Command for InitCommand {
    fn id(&self) -> &str {
        "init"
    }

    fn help(&self) -> &[&str] {
        &["Creates a Heroku app and commits a Procfile."]
    }

    fn execute(&self, _args: &[String], ctx: &mut Context<'_>) -> Result<()> {
        ensure_clean_tree(ctx)?;

        if ctx.shell.run_quiet("git remote get-url heroku").is_ok() {
            return Err(ToolboxError::failed_with_hints(
                "Project is already configured for Heroku.",
                &["Use `git remote remove heroku` to start over."],
            ));
        }

        let custom_name = ctx
            .ui
            .prompt(&Prompt::confirm(
                "custom_name",
                "Would you like to provide a custom Heroku app name?",
                false,
            ))?
            .as_bool()
            .unwrap_or(false);
        let app_name = if custom_name {
            ctx.ui
                .prompt(&Prompt::input("app_name", "Custom app name", None))?
                .as_string()
                .trim()
                .to_string()
        } else {
            String::new()
        };

        let default_buildpack = ctx.settings()?.buildpack.clone();
        let buildpack = ctx
            .ui
            .prompt(&Prompt::input(
                "buildpack",
                "Buildpack",
                Some(default_buildpack.as_str()),
            ))?
            .as_string()
            .trim()
            .to_string();
        let buildpack = if buildpack.is_empty() {
            default_buildpack
        } else {
            buildpack
        };

        ctx.ui.message("Creating Heroku app...");
        ctx.shell
            .run(&Self::create_command(&app_name))
            .map_err(|e| {
                shell_failure(
                    e,
                    "Heroku setup cancelled.",
                    "Could not create Heroku app.",
                    &["Run `heroku login` if you are not logged in."],
                )
            })?;

        ctx.shell
            .run(&format!("heroku buildpacks:set {}", quote(&buildpack)))
            .map_err(|e| {
                shell_failure(e, "Heroku setup cancelled.", "Could not set buildpack.", &[])
            })?;

        fs::write(ctx.project_root.join(PROCFILE), PROCFILE_CONTENTS)
            .map_err(|e| ToolboxError::failed(format!("Could not write {}: {}", PROCFILE, e)))?;

        let commit = ctx
            .shell
            .run("git add Procfile")
            .and_then(|_| ctx.shell.run("git commit -m \"Add Procfile\""));
        commit.map_err(|e| {
            shell_failure(e, "Heroku setup cancelled.", "Could not commit Procfile.", &[])
        })?;

        ctx.ui.success("Heroku app created.");
        ctx.ui
            .message("Use `toolbox heroku push` to deploy your project.");
        Ok(())
    }
}
