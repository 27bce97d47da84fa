//! Toolbox - command-line helper for server-side Swift projects.
//!
//! Toolbox wraps the Swift toolchain, `curl`, `tar`, `git` and the Heroku
//! CLI behind a small set of named commands. Each command declares the
//! external tools it needs; the dispatcher checks them before running it.
//!
//! # Modules
//!
//! - [`cli`] - Invocation parsing, command registry and built-in commands
//! - [`config`] - Optional project settings
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Package manifest scanning
//! - [`shell`] - Subprocess execution and dependency lookup
//! - [`ui`] - Terminal output and prompts
//!
//! # Example
//!
//! ```
//! use toolbox::cli::{builtin_commands, Command};
//!
//! let commands = builtin_commands();
//! assert_eq!(commands.lookup("build").map(|c| c.id()), Some("build"));
//! assert!(commands.lookup("deploy").is_none());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod shell;
pub mod ui;

pub use error::{Result, ToolboxError};
