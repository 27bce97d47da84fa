//! Mock shell implementation for testing.
//!
//! `MockShell` implements [`Shell`] and [`DependencyChecker`] without
//! spawning anything. It records every command it is asked to run and can be
//! told which tools are missing and which commands should fail.
//!
//! # Example
//!
//! ```
//! use toolbox::shell::{DependencyChecker, MockShell, Shell};
//!
//! let mut shell = MockShell::new();
//! shell.set_missing("heroku");
//! shell.fail_on("swift build", 2);
//!
//! assert!(!shell.is_available("heroku"));
//! assert!(shell.run("swift build").unwrap_err().is_cancelled());
//! assert_eq!(shell.commands(), ["swift build".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::HashSet;

use super::command::{Shell, ShellError, ShellResult};
use super::dependency::DependencyChecker;

/// Recording shell for tests.
///
/// Every tool is available unless marked missing. Commands succeed unless
/// they start with a prefix registered through [`MockShell::fail_on`].
#[derive(Debug, Default)]
pub struct MockShell {
    missing: HashSet<String>,
    failures: Vec<(String, i32)>,
    commands: RefCell<Vec<String>>,
    lookups: RefCell<Vec<String>>,
}

impl MockShell {
    /// Create a shell where every tool is present and every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `tool` as absent from PATH.
    pub fn set_missing(&mut self, tool: &str) {
        self.missing.insert(tool.to_string());
    }

    /// Make commands starting with `prefix` exit with `status`.
    pub fn fail_on(&mut self, prefix: &str, status: i32) {
        self.failures.push((prefix.to_string(), status));
    }

    /// Commands run so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }

    /// Tools looked up so far, in order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }

    /// Check if any recorded command contains `fragment`.
    pub fn has_command(&self, fragment: &str) -> bool {
        self.commands.borrow().iter().any(|c| c.contains(fragment))
    }

    fn record(&self, command: &str) -> ShellResult {
        self.commands.borrow_mut().push(command.to_string());
        match self
            .failures
            .iter()
            .find(|(prefix, _)| command.starts_with(prefix.as_str()))
        {
            Some((_, status)) => Err(ShellError::from_status(Some(*status))),
            None => Ok(()),
        }
    }
}

impl Shell for MockShell {
    fn run(&self, command: &str) -> ShellResult {
        self.record(command)
    }

    fn run_quiet(&self, command: &str) -> ShellResult {
        self.record(command)
    }
}

impl DependencyChecker for MockShell {
    fn is_available(&self, tool: &str) -> bool {
        self.lookups.borrow_mut().push(tool.to_string());
        !self.missing.contains(tool)
    }
}
