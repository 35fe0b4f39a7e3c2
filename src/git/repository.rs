use git2::{BranchType, ErrorCode, Repository as Git2Repo};
use std::path::Path;

use crate::error::Result;
use crate::git::RepositoryInspector;

/// Read-only view of a local repository through `git2`
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Top level of the working tree, `None` for a bare repository.
    ///
    /// Commands such as `git filter-branch` only run from here, so this is
    /// the directory the release commands must use even when the repository
    /// was discovered from a subdirectory.
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }
}

impl RepositoryInspector for Git2Repository {
    fn current_branch(&self) -> Result<Option<String>> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                return Ok(None)
            }
            Err(e) => return Err(e.into()),
        };

        if !head.is_branch() {
            return Ok(None);
        }

        Ok(head.shorthand().map(str::to_string))
    }

    fn branch_exists(&self, branch: &str) -> Result<bool> {
        match self.repo.find_branch(branch, BranchType::Local) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn path_exists_on_branch(&self, branch: &str, path: &str) -> Result<bool> {
        let tree = self
            .repo
            .find_branch(branch, BranchType::Local)?
            .into_reference()
            .peel_to_tree()?;

        match tree.get_path(Path::new(path)) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn tag_exists(&self, tag: &str) -> Result<bool> {
        match self.repo.find_reference(&format!("refs/tags/{}", tag)) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == ErrorCode::NotFound || e.code() == ErrorCode::InvalidSpec => {
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn remote_exists(&self, remote: &str) -> Result<bool> {
        let remotes = self.repo.remotes()?;
        Ok(remotes.iter().flatten().any(|name| name == remote))
    }
}
