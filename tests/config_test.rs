// tests/config_test.rs
use release_package::config::{load_config, Config, CONFIG_FILE_NAME};
use release_package::ReleaseError;
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[repository]
branch = "trunk"
packages_dir = "projects/packages"

[tags]
package_pattern = "release-{version}"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.repository.branch, "trunk");
    assert_eq!(config.repository.packages_dir, "projects/packages");
    assert_eq!(config.repository.main_remote, "origin");
    assert_eq!(config.tags.package_pattern, "release-{version}");
    assert_eq!(config.tags.package_message, "Version {version}");
    assert_eq!(config.package_repository, Config::default().package_repository);
}

#[test]
fn test_invalid_template_in_file_is_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[package_repository]\nurl_template = \"https://example.com/fixed.git\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(matches!(err, ReleaseError::Config(_)));
    assert!(err.to_string().contains("{package}"));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let err = load_config(Some("/nonexistent/release-package.toml")).unwrap_err();
    assert!(err.to_string().contains("cannot read"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[repository\n").unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}

#[test]
#[serial]
fn test_file_in_working_directory_is_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[package_repository]\nremote_name = \"mirror\"\n",
    )
    .unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(result.unwrap().package_repository.remote_name, "mirror");
}
