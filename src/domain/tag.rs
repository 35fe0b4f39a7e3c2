use crate::domain::{PackageName, TagVersion};
use crate::error::{ReleaseError, Result};

/// Template for tag names, tag messages and remote URLs.
///
/// Recognised placeholders are `{package}` and `{version}`, e.g.
/// `"automattic/jetpack-{package}@{version}"` or `"v{version}"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    pub pattern: String,
}

impl TagPattern {
    pub const PACKAGE: &'static str = "{package}";
    pub const VERSION: &'static str = "{version}";

    /// Create a new tag pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        TagPattern {
            pattern: pattern.into(),
        }
    }

    /// Fill in both placeholders
    /// Example: pattern="automattic/jetpack-{package}@{version}" -> "automattic/jetpack-foo@1.2.3"
    pub fn format(&self, package: &PackageName, version: &TagVersion) -> String {
        self.pattern
            .replace(Self::PACKAGE, package.as_str())
            .replace(Self::VERSION, version.as_str())
    }

    /// Fill in only the package placeholder
    pub fn format_package(&self, package: &PackageName) -> String {
        self.pattern.replace(Self::PACKAGE, package.as_str())
    }

    /// Fail unless the pattern carries the given placeholder
    pub fn require(&self, placeholder: &str, field: &str) -> Result<()> {
        if self.pattern.contains(placeholder) {
            Ok(())
        } else {
            Err(ReleaseError::config(format!(
                "{} '{}' must contain the {} placeholder",
                field, self.pattern, placeholder
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(package: &str, version: &str) -> (PackageName, TagVersion) {
        (
            PackageName::parse(package).unwrap(),
            TagVersion::parse(version).unwrap(),
        )
    }

    #[test]
    fn test_monorepo_tag_format() {
        let (package, version) = inputs("example-package", "1.2.3");
        let pattern = TagPattern::new("automattic/jetpack-{package}@{version}");
        assert_eq!(
            pattern.format(&package, &version),
            "automattic/jetpack-example-package@1.2.3"
        );
    }

    #[test]
    fn test_package_tag_format() {
        let (package, version) = inputs("example-package", "1.2.3");
        assert_eq!(TagPattern::new("v{version}").format(&package, &version), "v1.2.3");
        assert_eq!(
            TagPattern::new("Version {version}").format(&package, &version),
            "Version 1.2.3"
        );
    }

    #[test]
    fn test_format_package_leaves_version_placeholder() {
        let (package, _) = inputs("foo", "1.0.0");
        let pattern = TagPattern::new("https://github.com/Automattic/jetpack-{package}.git");
        assert_eq!(
            pattern.format_package(&package),
            "https://github.com/Automattic/jetpack-foo.git"
        );
    }

    #[test]
    fn test_require_placeholder() {
        assert!(TagPattern::new("v{version}")
            .require(TagPattern::VERSION, "package_pattern")
            .is_ok());

        let err = TagPattern::new("release")
            .require(TagPattern::VERSION, "package_pattern")
            .unwrap_err();
        assert!(err.to_string().contains("package_pattern"));
        assert!(err.to_string().contains("{version}"));
    }
}
