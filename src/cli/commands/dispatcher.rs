//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands and subcommands
//! - [`Context`] handed to every command on execution
//! - [`CommandDispatcher`] for routing an invocation to a command

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::Invocation;
use crate::cli::help::render_usage;
use crate::cli::registry::Registry;
use crate::config::Settings;
use crate::error::{Result, ToolboxError};
use crate::shell::{first_missing, DependencyChecker, Shell};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Top-level commands and subcommands share this contract, so both kinds
/// can be held and dispatched by a [`Registry`].
pub trait Command {
    /// Identifier the user types. Never empty, unique within a registry.
    fn id(&self) -> &str;

    /// Usage lines shown under the id in help output.
    fn help(&self) -> &[&str] {
        &[]
    }

    /// External tools that must be on PATH before [`Command::execute`] runs.
    fn dependencies(&self) -> &[&str] {
        &[]
    }

    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `args` - Raw tokens after the command id
    /// * `ctx` - Invocation directory, shell, UI and settings
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<()>;

    /// Help entry: the id and a colon, then each help line indented.
    fn description(&self) -> String {
        let mut out = format!("{}:\n", self.id());
        for line in self.help() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Fail with the first declared dependency `checker` cannot find.
    fn assert_dependencies_satisfied(&self, checker: &dyn DependencyChecker) -> Result<()> {
        match first_missing(checker, self.dependencies()) {
            Some(dependency) => Err(ToolboxError::MissingDependency {
                command: self.id().to_string(),
                dependency: dependency.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Everything a command may touch while it runs.
pub struct Context<'a> {
    /// Program path the process was invoked with.
    pub directory: String,

    /// Directory commands operate in.
    pub project_root: PathBuf,

    /// Process executor and dependency checker.
    pub shell: &'a dyn Shell,

    /// Output and prompts.
    pub ui: &'a mut dyn UserInterface,

    /// Top-level commands, for help output.
    pub commands: &'a Registry,

    settings: Option<Settings>,
}

impl<'a> Context<'a> {
    /// Create a context for one invocation.
    pub fn new(
        directory: &str,
        project_root: &Path,
        shell: &'a dyn Shell,
        ui: &'a mut dyn UserInterface,
        commands: &'a Registry,
    ) -> Self {
        Self {
            directory: directory.to_string(),
            project_root: project_root.to_path_buf(),
            shell,
            ui,
            commands,
            settings: None,
        }
    }

    /// Use `settings` instead of loading them from the project.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Project settings, loaded on first use.
    pub fn settings(&mut self) -> Result<&Settings> {
        if self.settings.is_none() {
            self.settings = Some(Settings::load(&self.project_root)?);
        }
        Ok(self.settings.get_or_insert_with(Settings::default))
    }
}

/// Print `err` the way the process reports a fatal error: the message
/// prefixed with `Error:`, then each hint on its own line.
pub fn report_error(err: &ToolboxError, ui: &mut dyn UserInterface) {
    ui.error(&format!("Error: {}", err));
    for hint in err.hints() {
        ui.hint(hint);
    }
}

/// Routes an invocation to a registered command.
pub struct CommandDispatcher<'r> {
    registry: &'r Registry,
    project_root: PathBuf,
}

impl<'r> CommandDispatcher<'r> {
    /// Create a new dispatcher over `registry` for the given project root.
    pub fn new(registry: &'r Registry, project_root: PathBuf) -> Self {
        Self {
            registry,
            project_root,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command from raw process arguments.
    ///
    /// `argv` includes the program path as its first element. Without a
    /// command id, the usage line is printed and `NoCommand` returned.
    pub fn dispatch(
        &self,
        argv: &[String],
        shell: &dyn Shell,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let invocation = Invocation::parse(argv)?;
        debug!("Dispatching {:?}", invocation);

        let Some(command) = invocation.command.as_deref() else {
            ui.message(&render_usage(&invocation.directory, self.registry));
            return Err(ToolboxError::NoCommand);
        };

        let mut tokens = Vec::with_capacity(invocation.args.len() + 1);
        tokens.push(command.to_string());
        tokens.extend(invocation.args.iter().cloned());

        let mut ctx = Context::new(
            &invocation.directory,
            &self.project_root,
            shell,
            ui,
            self.registry,
        );
        self.registry.dispatch(&tokens, &mut ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockShell;
    use crate::ui::MockUI;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// A call observed by [`Recorder`]: (id, directory, args).
    type Call = (String, String, Vec<String>);

    struct Recorder {
        id: &'static str,
        help: &'static [&'static str],
        dependencies: &'static [&'static str],
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl Command for Recorder {
        fn id(&self) -> &str {
            self.id
        }
        fn help(&self) -> &[&str] {
            self.help
        }
        fn dependencies(&self) -> &[&str] {
            self.dependencies
        }
        fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<()> {
            self.calls.borrow_mut().push((
                self.id.to_string(),
                ctx.directory.clone(),
                args.to_vec(),
            ));
            Ok(())
        }
    }

    fn recorder(
        id: &'static str,
        dependencies: &'static [&'static str],
        calls: &Rc<RefCell<Vec<Call>>>,
    ) -> Box<dyn Command> {
        Box::new(Recorder {
            id,
            help: &[],
            dependencies,
            calls: Rc::clone(calls),
        })
    }

    fn scenario_registry(calls: &Rc<RefCell<Vec<Call>>>) -> Registry {
        let mut registry = Registry::new();
        registry.register(recorder("help", &[], calls));
        registry.register(recorder("build", &["swift"], calls));
        registry.register(recorder("run", &["swift"], calls));
        registry
    }

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn description_without_help_is_id_and_colon() {
        let cmd = Recorder {
            id: "clean",
            help: &[],
            dependencies: &[],
            calls: Rc::default(),
        };
        assert_eq!(cmd.description(), "clean:\n");
    }

    #[test]
    fn description_indents_help_lines() {
        let cmd = Recorder {
            id: "build",
            help: &["a", "b"],
            dependencies: &[],
            calls: Rc::default(),
        };
        assert_eq!(cmd.description(), "build:\n  a\n  b\n");
    }

    #[test]
    fn dependencies_default_to_empty() {
        struct Bare;
        impl Command for Bare {
            fn id(&self) -> &str {
                "bare"
            }
            fn execute(&self, _: &[String], _: &mut Context<'_>) -> Result<()> {
                Ok(())
            }
        }
        assert!(Bare.dependencies().is_empty());
        assert!(Bare.help().is_empty());
        assert!(Bare.assert_dependencies_satisfied(&MockShell::new()).is_ok());
    }

    #[test]
    fn missing_dependency_names_it() {
        let calls = Rc::default();
        let cmd = Recorder {
            id: "new",
            help: &[],
            dependencies: &["curl", "tar"],
            calls: Rc::clone(&calls),
        };
        let mut shell = MockShell::new();
        shell.set_missing("tar");

        let err = cmd.assert_dependencies_satisfied(&shell).unwrap_err();

        match err {
            ToolboxError::MissingDependency {
                command,
                dependency,
            } => {
                assert_eq!(command, "new");
                assert_eq!(dependency, "tar");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn runs_resolved_command_with_directory_and_rest() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let registry = scenario_registry(&calls);
        let dispatcher = CommandDispatcher::new(&registry, PathBuf::from("/project"));
        let shell = MockShell::new();
        let mut ui = MockUI::new();

        dispatcher
            .dispatch(
                &argv(&["/usr/local/bin/toolbox", "run", "--release", "--name=Api"]),
                &shell,
                &mut ui,
            )
            .unwrap();

        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            (
                "run".to_string(),
                "/usr/local/bin/toolbox".to_string(),
                argv(&["--release", "--name=Api"])
            )
        );
        assert_eq!(shell.lookups(), vec!["swift".to_string()]);
    }

    #[test]
    fn missing_command_prints_usage_and_runs_nothing() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let registry = scenario_registry(&calls);
        let dispatcher = CommandDispatcher::new(&registry, PathBuf::from("/project"));
        let shell = MockShell::new();
        let mut ui = MockUI::new();

        let err = dispatcher
            .dispatch(&argv(&["toolbox"]), &shell, &mut ui)
            .unwrap_err();

        assert!(matches!(err, ToolboxError::NoCommand));
        assert_ne!(err.exit_code(), 0);
        assert!(ui.has_message("Usage: toolbox [help|build|run]"));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn missing_program_path_is_no_directory() {
        let registry = Registry::new();
        let dispatcher = CommandDispatcher::new(&registry, PathBuf::from("/project"));
        let mut ui = MockUI::new();

        let err = dispatcher
            .dispatch(&[], &MockShell::new(), &mut ui)
            .unwrap_err();

        assert!(matches!(err, ToolboxError::NoDirectory));
    }

    #[test]
    fn unknown_command_runs_nothing() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let registry = scenario_registry(&calls);
        let dispatcher = CommandDispatcher::new(&registry, PathBuf::from("/project"));
        let mut ui = MockUI::new();

        let err = dispatcher
            .dispatch(&argv(&["toolbox", "deploy"]), &MockShell::new(), &mut ui)
            .unwrap_err();

        assert!(matches!(err, ToolboxError::UnknownCommand { ref id } if id == "deploy"));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn missing_dependency_halts_before_execute() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let registry = scenario_registry(&calls);
        let dispatcher = CommandDispatcher::new(&registry, PathBuf::from("/project"));
        let mut shell = MockShell::new();
        shell.set_missing("swift");
        let mut ui = MockUI::new();

        let err = dispatcher
            .dispatch(&argv(&["toolbox", "build"]), &shell, &mut ui)
            .unwrap_err();

        assert!(err.to_string().contains("swift"));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn settings_load_lazily_from_project_root() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join(".toolbox.yml"), "executable: Api\n").unwrap();
        let registry = Registry::new();
        let shell = MockShell::new();
        let mut ui = MockUI::new();
        let mut ctx = Context::new("toolbox", temp.path(), &shell, &mut ui, &registry);

        assert_eq!(ctx.settings().unwrap().executable, "Api");
    }

    #[test]
    fn injected_settings_skip_loading() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join(".toolbox.yml"), "not: [valid\n").unwrap();
        let registry = Registry::new();
        let shell = MockShell::new();
        let mut ui = MockUI::new();
        let mut ctx = Context::new("toolbox", temp.path(), &shell, &mut ui, &registry)
            .with_settings(Settings::default());

        assert_eq!(ctx.settings().unwrap().executable, "App");
    }

    #[test]
    fn reported_error_lists_hints_after_message() {
        let mut ui = MockUI::new();
        let err =
            ToolboxError::failed_with_hints("Could not build project.", &["Run clean.", "Retry."]);

        report_error(&err, &mut ui);

        assert!(ui.has_error("Error: Could not build project."));
        assert!(ui.has_hint("Run clean."));
        assert_eq!(ui.hints().len(), 2);
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn dispatcher_creation() {
        let registry = Registry::new();
        let dispatcher = CommandDispatcher::new(&registry, PathBuf::from("/test"));
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
    }
}
