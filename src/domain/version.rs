use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ReleaseError, Result};

static TAG_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.]+$").expect("tag version pattern is valid"));

/// Version string used to build the release tags (e.g. "1.2.3").
///
/// Accepts any non-empty run of digits and dots. Whether the value is also a
/// proper `MAJOR.MINOR.PATCH` version is reported separately by
/// [`TagVersion::is_semver`], since both monorepo and package tags are built
/// from the raw string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagVersion(String);

impl TagVersion {
    pub fn parse(version: &str) -> Result<Self> {
        if TAG_VERSION.is_match(version) {
            Ok(TagVersion(version.to_string()))
        } else {
            Err(ReleaseError::InvalidTagVersion(version.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse as a semantic version, if it is one
    pub fn semver(&self) -> Option<semver::Version> {
        semver::Version::parse(&self.0).ok()
    }

    pub fn is_semver(&self) -> bool {
        self.semver().is_some()
    }
}

impl fmt::Display for TagVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
