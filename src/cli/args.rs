//! Invocation parsing.
//!
//! Only the shape of the invocation is parsed here: the program path, the
//! command id and the raw tokens after it. Commands interpret their own
//! flags, so every token after the command id is kept verbatim, including
//! `--` and anything that looks like a flag.

use crate::error::{Result, ToolboxError};

/// A parsed process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program path (`argv[0]`), handed to commands as their directory.
    pub directory: String,

    /// Command id, if one was given.
    pub command: Option<String>,

    /// Tokens after the command id.
    pub args: Vec<String>,
}

impl Invocation {
    /// Parse raw process arguments, program path first.
    pub fn parse(argv: &[String]) -> Result<Self> {
        let (directory, rest) = argv.split_first().ok_or(ToolboxError::NoDirectory)?;
        let (command, args) = match rest.split_first() {
            Some((command, args)) => (Some(command.clone()), args.to_vec()),
            None => (None, Vec::new()),
        };

        Ok(Self {
            directory: directory.clone(),
            command,
            args,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn empty_argv_has_no_directory() {
        let err = Invocation::parse(&[]).unwrap_err();
        assert!(matches!(err, ToolboxError::NoDirectory));
    }

    #[test]
    fn program_path_only() {
        let invocation = Invocation::parse(&argv(&["/usr/local/bin/toolbox"])).unwrap();
        assert_eq!(invocation.directory, "/usr/local/bin/toolbox");
        assert_eq!(invocation.command, None);
        assert!(invocation.args.is_empty());
    }

    #[test]
    fn command_and_raw_flags() {
        let invocation =
            Invocation::parse(&argv(&["toolbox", "run", "--release", "--name=Api", "x"])).unwrap();
        assert_eq!(invocation.command.as_deref(), Some("run"));
        assert_eq!(invocation.args, argv(&["--release", "--name=Api", "x"]));
    }

    #[test]
    fn help_flag_reaches_command() {
        let invocation = Invocation::parse(&argv(&["toolbox", "build", "--help"])).unwrap();
        assert_eq!(invocation.command.as_deref(), Some("build"));
        assert_eq!(invocation.args, argv(&["--help"]));
    }

    #[test]
    fn double_dash_is_forwarded() {
        let invocation = Invocation::parse(&argv(&["toolbox", "run", "--", "x"])).unwrap();
        assert_eq!(invocation.command.as_deref(), Some("run"));
        assert_eq!(invocation.args, argv(&["--", "x"]));
    }

    #[test]
    fn double_dash_in_command_position_is_the_id() {
        let invocation = Invocation::parse(&argv(&["toolbox", "--", "run"])).unwrap();
        assert_eq!(invocation.command.as_deref(), Some("--"));
        assert_eq!(invocation.args, argv(&["run"]));
    }

    #[test]
    fn subcommand_tokens_are_kept() {
        let invocation = Invocation::parse(&argv(&["toolbox", "heroku", "init"])).unwrap();
        assert_eq!(invocation.command.as_deref(), Some("heroku"));
        assert_eq!(invocation.args, argv(&["init"]));
    }
}
