//! Read-only checks run before the release commands.
//!
//! Every finding is a [ReleaseWarning]; none of them stops the run.

use crate::git::RepositoryInspector;
use crate::release::ReleasePlan;
use crate::warning::ReleaseWarning;

/// Checks that need no repository
pub fn check_inputs(plan: &ReleasePlan) -> Vec<ReleaseWarning> {
    let mut warnings = Vec::new();

    if !plan.version.is_semver() {
        warnings.push(ReleaseWarning::NonSemverVersion {
            version: plan.version.to_string(),
        });
    }

    warnings
}

/// Inspect the repository the release will run against.
///
/// Inspection errors become a single [ReleaseWarning::RepositoryUnavailable]
/// and end the inspection.
pub fn inspect_repository<R: RepositoryInspector + ?Sized>(
    repo: &R,
    plan: &ReleasePlan,
) -> Vec<ReleaseWarning> {
    let mut warnings = Vec::new();

    if let Err(e) = collect_repository_warnings(repo, plan, &mut warnings) {
        log::debug!("Repository inspection failed: {}", e);
        warnings.push(ReleaseWarning::RepositoryUnavailable {
            reason: e.to_string(),
        });
    }

    warnings
}

fn collect_repository_warnings<R: RepositoryInspector + ?Sized>(
    repo: &R,
    plan: &ReleasePlan,
    warnings: &mut Vec<ReleaseWarning>,
) -> crate::Result<()> {
    if repo.branch_exists(&plan.branch)? {
        let current = repo.current_branch()?;
        if current.as_deref() != Some(plan.branch.as_str()) {
            warnings.push(ReleaseWarning::BranchNotCheckedOut {
                expected: plan.branch.clone(),
                actual: current,
            });
        }

        if !repo.path_exists_on_branch(&plan.branch, &plan.subdirectory)? {
            warnings.push(ReleaseWarning::PackageDirectoryMissing {
                path: plan.subdirectory.clone(),
                branch: plan.branch.clone(),
            });
        }
    } else {
        warnings.push(ReleaseWarning::BranchMissing {
            branch: plan.branch.clone(),
        });
    }

    if repo.tag_exists(&plan.monorepo_tag)? {
        warnings.push(ReleaseWarning::TagAlreadyExists {
            tag: plan.monorepo_tag.clone(),
        });
    }

    if repo.remote_exists(&plan.package_remote)? {
        warnings.push(ReleaseWarning::RemoteAlreadyConfigured {
            remote: plan.package_remote.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::git::MockRepository;

    fn plan(package: &str, version: &str) -> ReleasePlan {
        ReleasePlan::new(package, version, &Config::default()).unwrap()
    }

    fn healthy_repo() -> MockRepository {
        let mut repo = MockRepository::new();
        repo.add_branch("master", ["packages/widgets"]);
        repo.checkout("master");
        repo.add_remote("origin");
        repo
    }

    #[test]
    fn test_semver_version_has_no_input_warning() {
        assert!(check_inputs(&plan("widgets", "0.9.1")).is_empty());
    }

    #[test]
    fn test_short_version_warns() {
        assert_eq!(
            check_inputs(&plan("widgets", "1.2")),
            vec![ReleaseWarning::NonSemverVersion {
                version: "1.2".to_string()
            }]
        );
    }

    #[test]
    fn test_healthy_repository_has_no_warnings() {
        assert!(inspect_repository(&healthy_repo(), &plan("widgets", "0.9.1")).is_empty());
    }

    #[test]
    fn test_other_branch_checked_out() {
        let mut repo = healthy_repo();
        repo.add_branch("feature", Vec::<String>::new());
        repo.checkout("feature");

        let warnings = inspect_repository(&repo, &plan("widgets", "0.9.1"));
        assert_eq!(
            warnings,
            vec![ReleaseWarning::BranchNotCheckedOut {
                expected: "master".to_string(),
                actual: Some("feature".to_string()),
            }]
        );
    }

    #[test]
    fn test_missing_package_directory() {
        let warnings = inspect_repository(&healthy_repo(), &plan("gadgets", "0.9.1"));
        assert_eq!(
            warnings,
            vec![ReleaseWarning::PackageDirectoryMissing {
                path: "packages/gadgets".to_string(),
                branch: "master".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_branch_skips_branch_checks() {
        let mut repo = MockRepository::new();
        repo.add_remote("origin");

        let warnings = inspect_repository(&repo, &plan("widgets", "0.9.1"));
        assert_eq!(
            warnings,
            vec![ReleaseWarning::BranchMissing {
                branch: "master".to_string()
            }]
        );
    }

    #[test]
    fn test_existing_tag_and_remote() {
        let mut repo = healthy_repo();
        repo.add_tag("automattic/jetpack-widgets@0.9.1");
        repo.add_remote("package");

        let warnings = inspect_repository(&repo, &plan("widgets", "0.9.1"));
        assert_eq!(
            warnings,
            vec![
                ReleaseWarning::TagAlreadyExists {
                    tag: "automattic/jetpack-widgets@0.9.1".to_string()
                },
                ReleaseWarning::RemoteAlreadyConfigured {
                    remote: "package".to_string()
                },
            ]
        );
    }
}
