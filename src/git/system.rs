use std::path::PathBuf;
use std::process::Command;

use crate::error::Result;
use crate::git::{CommandExecutor, CommandStatus, GitCommand};

/// Runs commands with the `git` binary found on `PATH`.
///
/// Standard streams are inherited, so git's own progress and error output go
/// straight to the terminal. Each call blocks until git exits.
#[derive(Debug, Clone, Default)]
pub struct SystemExecutor {
    working_dir: Option<PathBuf>,
}

impl SystemExecutor {
    /// Executor running in the process's current directory
    pub fn new() -> Self {
        SystemExecutor { working_dir: None }
    }

    /// Executor running every command inside `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        SystemExecutor {
            working_dir: Some(dir.into()),
        }
    }
}

impl CommandExecutor for SystemExecutor {
    fn run(&self, command: &GitCommand) -> Result<CommandStatus> {
        let mut cmd = Command::new("git");
        cmd.args(command.args());

        for (key, value) in command.envs() {
            cmd.env(key, value);
        }

        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let status = cmd.status()?;
        Ok(status.into())
    }
}
