//! Shell command execution and external tool lookup.

pub mod command;
pub mod dependency;
pub mod mock;
pub mod platform;

pub use command::{
    execute, execute_check, join_command, quote, CommandOptions, Shell, ShellError, ShellResult,
    SystemShell, CANCELLED_STATUS,
};
pub use dependency::{first_missing, DependencyChecker};
pub use mock::MockShell;
pub use platform::{is_ci, is_macos, ShellType};
