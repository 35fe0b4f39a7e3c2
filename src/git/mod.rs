//! Git operations abstraction layer
//!
//! Two seams separate release-package from git itself:
//!
//! - [CommandExecutor] runs a [GitCommand] and reports its exit status. The
//!   release sequence only ever talks to git through it.
//! - [RepositoryInspector] answers read-only questions about the local
//!   repository for the preflight checks.
//!
//! Implementations:
//!
//! - [system::SystemExecutor]: spawns the `git` binary
//! - [dry_run::DryRunExecutor]: prints commands instead of running them
//! - [mock::MockExecutor]: records calls, for testing
//! - [repository::Git2Repository]: inspector backed by the `git2` crate
//! - [mock::MockRepository]: inspector for testing
//!
//! ```rust
//! # use release_package::git::{CommandExecutor, GitCommand};
//! # fn example<E: CommandExecutor>(executor: &E) -> release_package::Result<()> {
//! let status = executor.run(&GitCommand::new(["fetch", "origin", "--tags"]))?;
//! if !status.success() {
//!     println!("fetch failed: {}", status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod dry_run;
pub mod mock;
pub mod repository;
pub mod system;

pub use dry_run::DryRunExecutor;
pub use mock::{MockExecutor, MockRepository};
pub use repository::Git2Repository;
pub use system::SystemExecutor;

use std::fmt;

use crate::error::Result;

/// A single `git` invocation: its arguments and any environment overrides.
///
/// Arguments are handed to the process as-is, never through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl GitCommand {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GitCommand {
            args: args.into_iter().map(Into::into).collect(),
            envs: Vec::new(),
        }
    }

    /// Set an environment variable for this invocation only
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn envs(&self) -> &[(String, String)] {
        &self.envs
    }
}

/// Renders as a shell-like command line, e.g. `git tag -a v1.2.3 -m 'Version 1.2.3'`.
impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("git")?;
        for arg in &self.args {
            write!(f, " {}", quote_arg(arg))?;
        }
        Ok(())
    }
}

fn quote_arg(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:@=+,".contains(c));

    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Outcome of running a command: its exit code, if it exited normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    code: Option<i32>,
}

impl CommandStatus {
    pub fn from_code(code: i32) -> Self {
        CommandStatus { code: Some(code) }
    }

    pub fn succeeded() -> Self {
        Self::from_code(0)
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for CommandStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        CommandStatus {
            code: status.code(),
        }
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exited with status {}", code),
            None => f.write_str("was terminated by a signal"),
        }
    }
}

/// Runs git commands on behalf of the release sequence.
///
/// ## Error Handling
///
/// A command that runs and exits non-zero is *not* an error at this level: it
/// comes back as a [CommandStatus] for the caller to judge. `Err` is reserved
/// for commands that could not be started at all.
pub trait CommandExecutor: Send + Sync {
    /// Run the command to completion and report how it exited.
    fn run(&self, command: &GitCommand) -> Result<CommandStatus>;
}

/// Read-only queries against the local repository.
pub trait RepositoryInspector {
    /// Short name of the checked-out branch, or `None` for a detached or unborn HEAD
    fn current_branch(&self) -> Result<Option<String>>;

    fn branch_exists(&self, branch: &str) -> Result<bool>;

    /// Whether `path` (relative to the repository root) exists in the branch's tip tree
    fn path_exists_on_branch(&self, branch: &str, path: &str) -> Result<bool>;

    fn tag_exists(&self, tag: &str) -> Result<bool>;

    fn remote_exists(&self, remote: &str) -> Result<bool>;
}
