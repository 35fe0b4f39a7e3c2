use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::TagPattern;
use crate::error::{ReleaseError, Result};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "release-package.toml";

/// Represents the complete configuration for release-package.
///
/// Every field has a default, and the defaults describe the Jetpack monorepo
/// layout, so running without a configuration file is the normal case.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub package_repository: PackageRepositoryConfig,

    #[serde(default)]
    pub tags: TagsConfig,
}

fn default_branch() -> String {
    "master".to_string()
}

fn default_packages_dir() -> String {
    "packages".to_string()
}

fn default_main_remote() -> String {
    "origin".to_string()
}

/// The monorepo being released from.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RepositoryConfig {
    /// Branch whose history is rewritten and pushed
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Directory holding one subdirectory per package
    #[serde(default = "default_packages_dir")]
    pub packages_dir: String,

    /// Remote receiving the monorepo tag
    #[serde(default = "default_main_remote")]
    pub main_remote: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            branch: default_branch(),
            packages_dir: default_packages_dir(),
            main_remote: default_main_remote(),
        }
    }
}

fn default_remote_name() -> String {
    "package".to_string()
}

fn default_url_template() -> String {
    "https://github.com/Automattic/jetpack-{package}.git".to_string()
}

/// The standalone repository each package is mirrored to.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PackageRepositoryConfig {
    /// Name of the temporary remote added for the run
    #[serde(default = "default_remote_name")]
    pub remote_name: String,

    #[serde(default = "default_url_template")]
    pub url_template: String,
}

impl Default for PackageRepositoryConfig {
    fn default() -> Self {
        PackageRepositoryConfig {
            remote_name: default_remote_name(),
            url_template: default_url_template(),
        }
    }
}

fn default_monorepo_pattern() -> String {
    "automattic/jetpack-{package}@{version}".to_string()
}

fn default_package_pattern() -> String {
    "v{version}".to_string()
}

fn default_package_message() -> String {
    "Version {version}".to_string()
}

/// Tag naming for both repositories.
///
/// The monorepo tag uses its own name as its message.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    #[serde(default = "default_monorepo_pattern")]
    pub monorepo_pattern: String,

    #[serde(default = "default_package_pattern")]
    pub package_pattern: String,

    #[serde(default = "default_package_message")]
    pub package_message: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            monorepo_pattern: default_monorepo_pattern(),
            package_pattern: default_package_pattern(),
            package_message: default_package_message(),
        }
    }
}

impl Config {
    /// Check that names are present and templates carry their placeholders.
    pub fn validate(&self) -> Result<()> {
        let names = [
            ("repository.branch", &self.repository.branch),
            ("repository.packages_dir", &self.repository.packages_dir),
            ("repository.main_remote", &self.repository.main_remote),
            (
                "package_repository.remote_name",
                &self.package_repository.remote_name,
            ),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(ReleaseError::config(format!("{} must not be empty", field)));
            }
        }

        if self.package_repository.remote_name == self.repository.main_remote {
            return Err(ReleaseError::config(format!(
                "package_repository.remote_name '{}' clashes with repository.main_remote",
                self.package_repository.remote_name
            )));
        }

        TagPattern::new(&self.package_repository.url_template)
            .require(TagPattern::PACKAGE, "package_repository.url_template")?;
        TagPattern::new(&self.tags.monorepo_pattern)
            .require(TagPattern::VERSION, "tags.monorepo_pattern")?;
        TagPattern::new(&self.tags.package_pattern)
            .require(TagPattern::VERSION, "tags.package_pattern")?;

        Ok(())
    }
}

/// Resolves which configuration file would be used, if any.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `release-package.toml` in current directory
/// 3. `release-package.toml` in the user config directory
pub fn find_config_file(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration, validated
/// * `Err` - If a file exists but cannot be read, parsed or validated,
///   or if an explicit path does not exist
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config = match find_config_file(config_path) {
        Some(path) => {
            log::debug!("Loading configuration from {}", path.display());
            let config_str = fs::read_to_string(&path).map_err(|e| {
                ReleaseError::config(format!("cannot read {}: {}", path.display(), e))
            })?;
            parse_config(&config_str)?
        }
        None => {
            log::debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    config.validate()?;
    Ok(config)
}

/// Parse configuration from TOML text without validating it.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| ReleaseError::config(e.to_string()))
}
