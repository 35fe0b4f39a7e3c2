use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use crate::error::{ReleaseError, Result};
use crate::git::{CommandExecutor, CommandStatus, GitCommand, RepositoryInspector};

#[derive(Debug, Clone, Copy)]
enum Failure {
    Status(i32),
    Spawn,
}

/// Mock executor for testing without running git.
///
/// Every call is recorded in order. A failure can be injected at a given
/// zero-based call index; all other calls succeed.
#[derive(Debug, Default)]
pub struct MockExecutor {
    calls: Mutex<Vec<GitCommand>>,
    failures: HashMap<usize, Failure>,
}

impl MockExecutor {
    /// Create an executor where every command succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the call at `index` exit with status 1
    pub fn fail_at(self, index: usize) -> Self {
        self.fail_at_with_code(index, 1)
    }

    pub fn fail_at_with_code(mut self, index: usize, code: i32) -> Self {
        self.failures.insert(index, Failure::Status(code));
        self
    }

    /// Make the call at `index` behave as if git could not be started
    pub fn fail_to_spawn_at(mut self, index: usize) -> Self {
        self.failures.insert(index, Failure::Spawn);
        self
    }

    /// Commands received so far, in call order
    pub fn calls(&self) -> Vec<GitCommand> {
        self.lock().clone()
    }

    /// Commands received so far, rendered as command lines
    pub fn command_lines(&self) -> Vec<String> {
        self.lock().iter().map(ToString::to_string).collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<GitCommand>> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CommandExecutor for MockExecutor {
    fn run(&self, command: &GitCommand) -> Result<CommandStatus> {
        let mut calls = self.lock();
        let index = calls.len();
        calls.push(command.clone());

        match self.failures.get(&index) {
            None => Ok(CommandStatus::succeeded()),
            Some(Failure::Status(code)) => Ok(CommandStatus::from_code(*code)),
            Some(Failure::Spawn) => Err(ReleaseError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "git: command not found",
            ))),
        }
    }
}

/// Mock repository for testing preflight checks without a real repository
#[derive(Debug, Default)]
pub struct MockRepository {
    current_branch: Option<String>,
    branches: HashMap<String, HashSet<String>>,
    tags: HashSet<String>,
    remotes: HashSet<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a branch whose tip tree contains the given paths
    pub fn add_branch<I, S>(&mut self, branch: impl Into<String>, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.branches
            .insert(branch.into(), paths.into_iter().map(Into::into).collect());
    }

    pub fn checkout(&mut self, branch: impl Into<String>) {
        self.current_branch = Some(branch.into());
    }

    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.insert(name.into());
    }

    pub fn add_remote(&mut self, name: impl Into<String>) {
        self.remotes.insert(name.into());
    }
}

impl RepositoryInspector for MockRepository {
    fn current_branch(&self) -> Result<Option<String>> {
        Ok(self.current_branch.clone())
    }

    fn branch_exists(&self, branch: &str) -> Result<bool> {
        Ok(self.branches.contains_key(branch))
    }

    fn path_exists_on_branch(&self, branch: &str, path: &str) -> Result<bool> {
        self.branches
            .get(branch)
            .map(|paths| paths.contains(path))
            .ok_or_else(|| ReleaseError::config(format!("Branch not found: {}", branch)))
    }

    fn tag_exists(&self, tag: &str) -> Result<bool> {
        Ok(self.tags.contains(tag))
    }

    fn remote_exists(&self, remote: &str) -> Result<bool> {
        Ok(self.remotes.contains(remote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_executor_records_calls() {
        let executor = MockExecutor::new();
        executor.run(&GitCommand::new(["fetch"])).unwrap();
        executor.run(&GitCommand::new(["push", "origin"])).unwrap();

        assert_eq!(executor.command_lines(), vec!["git fetch", "git push origin"]);
    }

    #[test]
    fn test_mock_executor_injected_failure() {
        let executor = MockExecutor::new().fail_at_with_code(1, 128);

        assert!(executor.run(&GitCommand::new(["a"])).unwrap().success());
        let status = executor.run(&GitCommand::new(["b"])).unwrap();
        assert_eq!(status.code(), Some(128));
        assert!(executor.run(&GitCommand::new(["c"])).unwrap().success());
        assert_eq!(executor.calls().len(), 3);
    }

    #[test]
    fn test_mock_executor_spawn_failure() {
        let executor = MockExecutor::new().fail_to_spawn_at(0);
        assert!(executor.run(&GitCommand::new(["status"])).is_err());
        assert_eq!(executor.calls().len(), 1);
    }

    #[test]
    fn test_mock_repository() {
        let mut repo = MockRepository::new();
        repo.add_branch("master", ["packages/foo"]);
        repo.checkout("master");
        repo.add_tag("v1.0.0");
        repo.add_remote("origin");

        assert_eq!(repo.current_branch().unwrap().as_deref(), Some("master"));
        assert!(repo.branch_exists("master").unwrap());
        assert!(!repo.branch_exists("trunk").unwrap());
        assert!(repo.path_exists_on_branch("master", "packages/foo").unwrap());
        assert!(!repo.path_exists_on_branch("master", "packages/bar").unwrap());
        assert!(repo.path_exists_on_branch("trunk", "packages/foo").is_err());
        assert!(repo.tag_exists("v1.0.0").unwrap());
        assert!(repo.remote_exists("origin").unwrap());
        assert!(!repo.remote_exists("package").unwrap());
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert_eq!(repo.current_branch().unwrap(), None);
    }
}
