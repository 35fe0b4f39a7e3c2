use crate::config::Config;
use crate::domain::{PackageName, TagPattern, TagVersion};
use crate::error::Result;

/// Everything a release run needs, derived once from the two inputs and the
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    pub package: PackageName,
    pub version: TagVersion,
    /// Tag created in the monorepo; also used as its message
    pub monorepo_tag: String,
    pub package_tag: String,
    pub package_tag_message: String,
    pub package_remote_url: String,
    /// Directory whose history becomes the package repository, e.g. "packages/foo"
    pub subdirectory: String,
    pub branch: String,
    pub main_remote: String,
    pub package_remote: String,
}

impl ReleasePlan {
    /// Validate the package name, then the version, and derive the plan.
    ///
    /// Fails with the validation error of the first bad input; nothing has been
    /// run at that point.
    pub fn new(package: &str, version: &str, config: &Config) -> Result<Self> {
        let package = PackageName::parse(package)?;
        let version = TagVersion::parse(version)?;
        Ok(Self::from_parts(package, version, config))
    }

    pub fn from_parts(package: PackageName, version: TagVersion, config: &Config) -> Self {
        let tags = &config.tags;
        let monorepo_tag = TagPattern::new(&tags.monorepo_pattern).format(&package, &version);
        let package_tag = TagPattern::new(&tags.package_pattern).format(&package, &version);
        let package_tag_message =
            TagPattern::new(&tags.package_message).format(&package, &version);
        let package_remote_url =
            TagPattern::new(&config.package_repository.url_template).format_package(&package);

        let packages_dir = config.repository.packages_dir.trim_end_matches('/');
        let subdirectory = format!("{}/{}", packages_dir, package);

        ReleasePlan {
            monorepo_tag,
            package_tag,
            package_tag_message,
            package_remote_url,
            subdirectory,
            branch: config.repository.branch.clone(),
            main_remote: config.repository.main_remote.clone(),
            package_remote: config.package_repository.remote_name.clone(),
            package,
            version,
        }
    }

    /// Ref where the history rewrite keeps the branch's previous tip
    pub fn original_ref(&self) -> String {
        format!("refs/original/refs/heads/{}", self.branch)
    }
}
