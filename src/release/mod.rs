//! The package release sequence
//!
//! A release is the fixed list of [ReleaseStep]s, each turned into a git
//! command from a [ReleasePlan] and run in order by the [ReleaseDriver].

pub mod driver;
pub mod plan;

pub use driver::{ReleaseDriver, ReleaseReport};
pub use plan::ReleasePlan;

use std::fmt;

use crate::git::GitCommand;

/// One git command of the release sequence, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseStep {
    TagMonorepo,
    PushMonorepoTag,
    FilterSubdirectory,
    AddPackageRemote,
    PushPackageBranch,
    FetchPackageTags,
    TagPackage,
    PushPackageTag,
    RestoreBranch,
    RemovePackageRemote,
}

impl ReleaseStep {
    pub const ALL: [ReleaseStep; 10] = [
        ReleaseStep::TagMonorepo,
        ReleaseStep::PushMonorepoTag,
        ReleaseStep::FilterSubdirectory,
        ReleaseStep::AddPackageRemote,
        ReleaseStep::PushPackageBranch,
        ReleaseStep::FetchPackageTags,
        ReleaseStep::TagPackage,
        ReleaseStep::PushPackageTag,
        ReleaseStep::RestoreBranch,
        ReleaseStep::RemovePackageRemote,
    ];

    /// Progress line shown while the step runs
    pub fn summary(&self) -> &'static str {
        match self {
            ReleaseStep::TagMonorepo => "Tagging the package version in the main repository",
            ReleaseStep::PushMonorepoTag => "Pushing the package version tag to the main repository",
            ReleaseStep::FilterSubdirectory => "Filtering the branch down to the package directory",
            ReleaseStep::AddPackageRemote => "Adding the package repository remote",
            ReleaseStep::PushPackageBranch => "Pushing the package history to the package repository",
            ReleaseStep::FetchPackageTags => "Fetching existing tags from the package repository",
            ReleaseStep::TagPackage => "Tagging the version in the package repository",
            ReleaseStep::PushPackageTag => "Pushing the version tag to the package repository",
            ReleaseStep::RestoreBranch => "Resetting the branch to its original state",
            ReleaseStep::RemovePackageRemote => "Removing the package repository remote",
        }
    }

    /// Message reported when the step's command fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            ReleaseStep::TagMonorepo => {
                "Could not tag the new package version in the main repository."
            }
            ReleaseStep::PushMonorepoTag => {
                "Could not push the new package version tag to the main repository."
            }
            ReleaseStep::FilterSubdirectory => "Could not filter the branch to the package contents.",
            ReleaseStep::AddPackageRemote => "Could not add the new package repository remote.",
            ReleaseStep::PushPackageBranch => "Could not push to the new package repository.",
            ReleaseStep::FetchPackageTags => "Could not fetch the existing tags of the package.",
            ReleaseStep::TagPackage => "Could not tag the new version in the package repository.",
            ReleaseStep::PushPackageTag => {
                "Could not push the new version tag to the package repository."
            }
            ReleaseStep::RestoreBranch => "Could not reset the repository to its original state.",
            ReleaseStep::RemovePackageRemote => "Could not clean up the package repository remote.",
        }
    }

    /// Whether a failure here leaves the branch rewritten or the temporary
    /// remote configured
    pub fn leaves_repository_modified(&self) -> bool {
        let position = |step: ReleaseStep| ReleaseStep::ALL.iter().position(|s| *s == step);
        position(*self) > position(ReleaseStep::FilterSubdirectory)
    }

    /// Build the git command for this step
    pub fn command(&self, plan: &ReleasePlan) -> GitCommand {
        match self {
            ReleaseStep::TagMonorepo => GitCommand::new([
                "tag",
                "-a",
                plan.monorepo_tag.as_str(),
                "-m",
                plan.monorepo_tag.as_str(),
            ]),
            ReleaseStep::PushMonorepoTag => GitCommand::new([
                "push",
                plan.main_remote.as_str(),
                plan.monorepo_tag.as_str(),
            ]),
            ReleaseStep::FilterSubdirectory => GitCommand::new([
                "filter-branch",
                "-f",
                "--prune-empty",
                "--subdirectory-filter",
                plan.subdirectory.as_str(),
                plan.branch.as_str(),
            ])
            .env("FILTER_BRANCH_SQUELCH_WARNING", "1"),
            ReleaseStep::AddPackageRemote => GitCommand::new([
                "remote",
                "add",
                plan.package_remote.as_str(),
                plan.package_remote_url.as_str(),
            ]),
            ReleaseStep::PushPackageBranch => GitCommand::new([
                "push",
                plan.package_remote.as_str(),
                plan.branch.as_str(),
                "--force",
            ]),
            ReleaseStep::FetchPackageTags => {
                GitCommand::new(["fetch", plan.package_remote.as_str(), "--tags"])
            }
            ReleaseStep::TagPackage => GitCommand::new([
                "tag",
                "-a",
                plan.package_tag.as_str(),
                "-m",
                plan.package_tag_message.as_str(),
            ]),
            ReleaseStep::PushPackageTag => GitCommand::new([
                "push",
                plan.package_remote.as_str(),
                plan.package_tag.as_str(),
            ]),
            ReleaseStep::RestoreBranch => {
                GitCommand::new(["reset", "--hard", plan.original_ref().as_str()])
            }
            ReleaseStep::RemovePackageRemote => {
                GitCommand::new(["remote", "remove", plan.package_remote.as_str()])
            }
        }
    }
}

impl fmt::Display for ReleaseStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.summary())
    }
}
