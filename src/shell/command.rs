//! Shell command execution.
//!
//! Commands are passed to the platform shell as a single string and run to
//! completion. Output is inherited from the parent unless the caller asks
//! for quiet execution.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::debug;

use super::dependency::DependencyChecker;
use super::platform::ShellType;

/// Exit status a subprocess uses to signal that the user cancelled it.
pub const CANCELLED_STATUS: i32 = 2;

/// Failure reported by the process executor.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The subprocess exited with [`CANCELLED_STATUS`].
    #[error("Operation cancelled")]
    Cancelled,

    /// The subprocess exited with any other failing status.
    ///
    /// `status` is `None` when the process was killed by a signal.
    #[error("Command failed with {}", describe_status(.status))]
    System { status: Option<i32> },

    /// The shell itself could not be started.
    #[error("Could not start shell: {0}")]
    Spawn(#[source] std::io::Error),
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {}", code),
        None => "a signal".to_string(),
    }
}

impl ShellError {
    /// Classify a non-success exit status.
    pub fn from_status(status: Option<i32>) -> Self {
        match status {
            Some(CANCELLED_STATUS) => ShellError::Cancelled,
            status => ShellError::System { status },
        }
    }

    /// Whether the user cancelled the subprocess.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ShellError::Cancelled)
    }
}

/// Result of running a command through the shell.
pub type ShellResult = std::result::Result<(), ShellError>;

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Discard stdout and stderr instead of inheriting them.
    pub quiet: bool,
}

/// Runs command strings synchronously.
pub trait Shell: DependencyChecker {
    /// Run `command`, inheriting the terminal.
    fn run(&self, command: &str) -> ShellResult;

    /// Run `command` with its output discarded.
    fn run_quiet(&self, command: &str) -> ShellResult;
}

/// Quote `arg` for a POSIX shell command string when it needs it.
pub fn quote(arg: &str) -> Cow<'_, str> {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,@+%".contains(c));

    if safe {
        Cow::Borrowed(arg)
    } else {
        Cow::Owned(format!("'{}'", arg.replace('\'', "'\\''")))
    }
}

/// Join `program` and quoted `args` into one command string.
pub fn join_command(program: &str, args: &[String]) -> String {
    let mut command = program.to_string();
    for arg in args {
        command.push(' ');
        command.push_str(&quote(arg));
    }
    command
}

/// Execute a shell command and wait for it.
pub fn execute(command: &str, options: &CommandOptions) -> ShellResult {
    let shell = ShellType::current();

    let mut cmd = Command::new(shell.program());
    cmd.arg(shell.command_flag());
    cmd.arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    if options.quiet {
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());
    } else {
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
    }

    debug!("Running: {}", command);
    let status = cmd.status().map_err(ShellError::Spawn)?;

    if status.success() {
        Ok(())
    } else {
        debug!("Command exited with {:?}: {}", status.code(), command);
        Err(ShellError::from_status(status.code()))
    }
}

/// Execute a command quietly and return success/failure.
pub fn execute_check(command: &str, cwd: Option<&Path>) -> bool {
    let options = CommandOptions {
        cwd: cwd.map(|p| p.to_path_buf()),
        quiet: true,
    };

    execute(command, &options).is_ok()
}

/// [`Shell`] backed by the real platform shell.
#[derive(Debug, Clone)]
pub struct SystemShell {
    cwd: PathBuf,
}

impl SystemShell {
    /// Create a shell that runs commands in `cwd`.
    pub fn new(cwd: &Path) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
        }
    }

    /// Working directory commands run in.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    fn options(&self, quiet: bool) -> CommandOptions {
        CommandOptions {
            cwd: Some(self.cwd.clone()),
            quiet,
        }
    }
}

impl Shell for SystemShell {
    fn run(&self, command: &str) -> ShellResult {
        execute(command, &self.options(false))
    }

    fn run_quiet(&self, command: &str) -> ShellResult {
        execute(command, &self.options(true))
    }
}

impl DependencyChecker for SystemShell {
    fn is_available(&self, tool: &str) -> bool {
        execute_check(&ShellType::current().lookup_command(tool), Some(&self.cwd))
    }
}
