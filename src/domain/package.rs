use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ReleaseError, Result};

static PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("package name pattern is valid"));

/// Name of a package living under the monorepo's packages directory.
///
/// Only ASCII letters, digits and dashes are accepted, so the name is safe to
/// splice into paths, remote URLs and tag names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    /// Validate and wrap a package name (e.g. "example-package")
    pub fn parse(name: &str) -> Result<Self> {
        if PACKAGE_NAME.is_match(name) {
            Ok(PackageName(name.to_string()))
        } else {
            Err(ReleaseError::InvalidPackageName(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["example-package", "widgets", "Foo-Bar-9", "a", "-", "2fa"] {
            let parsed = PackageName::parse(name).unwrap();
            assert_eq!(parsed.as_str(), name);
        }
    }

    #[test]
    fn test_invalid_names() {
        let invalid = [
            "",
            "with space",
            "under_score",
            "slash/name",
            "../escape",
            "dot.name",
            "semi;colon",
            "quote'name",
            "tab\tname",
            "trailing-newline\n",
            "ünïcode",
            "$(whoami)",
        ];

        for name in invalid {
            let err = PackageName::parse(name).unwrap_err();
            assert!(
                matches!(err, ReleaseError::InvalidPackageName(ref n) if n == name),
                "expected rejection of {:?}, got {:?}",
                name,
                err
            );
        }
    }

    #[test]
    fn test_display() {
        let name = PackageName::parse("connection").unwrap();
        assert_eq!(name.to_string(), "connection");
    }
}
