use std::fmt;

/// Non-fatal findings reported before the release commands run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseWarning {
    /// Version passes validation but is not MAJOR.MINOR.PATCH
    NonSemverVersion { version: String },
    /// The repository could not be opened or inspected
    RepositoryUnavailable { reason: String },
    /// The branch to rewrite does not exist locally
    BranchMissing { branch: String },
    /// HEAD is on another branch than the one being rewritten
    BranchNotCheckedOut {
        expected: String,
        actual: Option<String>,
    },
    /// The package directory is absent from the branch
    PackageDirectoryMissing { path: String, branch: String },
    /// The monorepo tag is already present locally
    TagAlreadyExists { tag: String },
    /// A remote with the temporary remote's name is already configured
    RemoteAlreadyConfigured { remote: String },
}

impl fmt::Display for ReleaseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseWarning::NonSemverVersion { version } => {
                write!(
                    f,
                    "Version '{}' is not a MAJOR.MINOR.PATCH semantic version",
                    version
                )
            }
            ReleaseWarning::RepositoryUnavailable { reason } => {
                write!(f, "Could not inspect the repository: {}", reason)
            }
            ReleaseWarning::BranchMissing { branch } => {
                write!(f, "Branch '{}' does not exist locally", branch)
            }
            ReleaseWarning::BranchNotCheckedOut { expected, actual } => match actual {
                Some(actual) => write!(
                    f,
                    "Branch '{}' is checked out, but '{}' is the one being released",
                    actual, expected
                ),
                None => write!(
                    f,
                    "HEAD is not on a branch, but '{}' is the one being released",
                    expected
                ),
            },
            ReleaseWarning::PackageDirectoryMissing { path, branch } => {
                write!(f, "Directory '{}' does not exist on branch '{}'", path, branch)
            }
            ReleaseWarning::TagAlreadyExists { tag } => {
                write!(f, "Tag '{}' already exists", tag)
            }
            ReleaseWarning::RemoteAlreadyConfigured { remote } => {
                write!(f, "A remote named '{}' is already configured", remote)
            }
        }
    }
}
