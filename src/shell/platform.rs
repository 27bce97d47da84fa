//! Platform-specific shell detection.

/// Shell families commands can be handed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    /// `sh -c` on Unix-like systems.
    Posix,
    /// `cmd /C` on Windows.
    Cmd,
}

impl ShellType {
    /// Shell family for the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            ShellType::Cmd
        } else {
            ShellType::Posix
        }
    }

    /// Executable used to run command strings.
    ///
    /// Always the POSIX `sh`, not `$SHELL`, because command strings and the
    /// `hash` builtin rely on POSIX syntax that fish and friends reject.
    pub fn program(&self) -> String {
        match self {
            ShellType::Posix => "/bin/sh".to_string(),
            ShellType::Cmd => std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string()),
        }
    }

    /// Flag that makes the shell run its next argument as a command.
    pub fn command_flag(&self) -> &'static str {
        match self {
            ShellType::Posix => "-c",
            ShellType::Cmd => "/C",
        }
    }

    /// Command that succeeds silently when `tool` can be found on PATH.
    pub fn lookup_command(&self, tool: &str) -> String {
        match self {
            ShellType::Posix => format!("hash {} 2>/dev/null", tool),
            ShellType::Cmd => format!("where {} >NUL 2>&1", tool),
        }
    }
}

/// Check if running on macOS, where Xcode and `open` are available.
pub fn is_macos() -> bool {
    cfg!(target_os = "macos")
}

/// Check if running in a CI environment.
///
/// Used in `main()` to disable prompts. Checks common CI environment
/// variables: `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`, `TRAVIS`,
/// `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}
