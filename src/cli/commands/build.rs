//! Build command implementation.
//!
//! The `toolbox build` command fetches package dependencies and compiles
//! the project with the Swift toolchain.

use crate::cli::flags;
use crate::error::Result;
use crate::shell::join_command;

use super::dispatcher::{Command, Context};
use super::shell_failure;

/// Remediation shown when the compiler fails.
const TOOLCHAIN_HINTS: &[&str] = &[
    "Make sure you are running a Swift toolchain this project supports.",
    "Check it with `swift --version`.",
    "If the error persists, try `toolbox clean` and build again.",
];

/// The build command implementation.
pub struct BuildCommand;

impl BuildCommand {
    /// Compiler invocation for `args`.
    ///
    /// `--release` selects the release configuration; every other token is
    /// forwarded to `swift build`.
    pub fn build_command(args: &[String]) -> String {
        let mut program = String::from("swift build");
        if flags::has(args, "release") {
            program.push_str(" -c release");
        }
        join_command(&program, &flags::strip(args, &["release"]))
    }
}

impl Command for BuildCommand {
    fn id(&self) -> &str {
        "build"
    }

    fn help(&self) -> &[&str] {
        &[
            "Compiles the application.",
            "Use --release for an optimized build.",
        ]
    }

    fn dependencies(&self) -> &[&str] {
        &["swift"]
    }

    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<()> {
        ctx.ui.message("Fetching dependencies...");
        ctx.shell.run("swift build --fetch").map_err(|e| {
            shell_failure(
                e,
                "Fetch cancelled.",
                "Could not fetch dependencies.",
                &["Check your network connection and the dependency URLs in Package.swift."],
            )
        })?;

        ctx.ui.message("Building project...");
        ctx.shell
            .run(&Self::build_command(args))
            .map_err(|e| {
                shell_failure(e, "Build cancelled.", "Could not build project.", TOOLCHAIN_HINTS)
            })?;

        ctx.ui.success("Project built.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::registry::Registry;
    use crate::shell::MockShell;
    use crate::ui::MockUI;
    use std::path::Path;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn debug_build_by_default() {
        assert_eq!(BuildCommand::build_command(&[]), "swift build");
    }

    #[test]
    fn release_flag_selects_configuration() {
        assert_eq!(
            BuildCommand::build_command(&args(&["--release", "-Xswiftc", "-g"])),
            "swift build -c release -Xswiftc -g"
        );
    }

    #[test]
    fn fetches_before_building() {
        let registry = Registry::new();
        let shell = MockShell::new();
        let mut ui = MockUI::new();
        let mut ctx = Context::new("toolbox", Path::new("."), &shell, &mut ui, &registry);

        BuildCommand
            .execute(&args(&["--release"]), &mut ctx)
            .unwrap();

        assert_eq!(
            shell.commands(),
            vec![
                "swift build --fetch".to_string(),
                "swift build -c release".to_string()
            ]
        );
        assert!(ui.has_success("Project built."));
    }

    #[test]
    fn fetch_failure_stops_build() {
        let registry = Registry::new();
        let mut shell = MockShell::new();
        shell.fail_on("swift build --fetch", 1);
        let mut ui = MockUI::new();
        let mut ctx = Context::new("toolbox", Path::new("."), &shell, &mut ui, &registry);

        let err = BuildCommand.execute(&[], &mut ctx).unwrap_err();

        assert_eq!(err.to_string(), "Could not fetch dependencies.");
        assert_eq!(shell.commands().len(), 1);
    }

    #[test]
    fn cancelled_build_is_reported() {
        let registry = Registry::new();
        let mut shell = MockShell::new();
        shell.fail_on("swift build -c", 2);
        let mut ui = MockUI::new();
        let mut ctx = Context::new("toolbox", Path::new("."), &shell, &mut ui, &registry);

        let err = BuildCommand
            .execute(&args(&["--release"]), &mut ctx)
            .unwrap_err();

        assert_eq!(err.to_string(), "Build cancelled.");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn failed_build_suggests_toolchain_checks() {
        let registry = Registry::new();
        let mut shell = MockShell::new();
        shell.fail_on("swift build -c", 1);
        let mut ui = MockUI::new();
        let mut ctx = Context::new("toolbox", Path::new("."), &shell, &mut ui, &registry);

        let err = BuildCommand
            .execute(&args(&["--release"]), &mut ctx)
            .unwrap_err();

        assert_eq!(err.to_string(), "Could not build project.");
        assert!(err.hints().iter().any(|h| h.contains("swift --version")));
    }
}
