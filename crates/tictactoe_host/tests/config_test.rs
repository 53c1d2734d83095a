//! Tests for loading host configuration.

use std::io::Write;
use tictactoe_host::{HostConfig, JumpPolicy};

#[test]
fn test_from_file_reads_all_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ascending = false\nout_of_range = \"clamp\"").unwrap();

    let config = HostConfig::from_file(file.path()).unwrap();
    assert!(!config.ascending());
    assert_eq!(config.out_of_range(), JumpPolicy::Clamp);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = HostConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, HostConfig::default());
}

#[test]
fn test_invalid_policy_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "out_of_range = \"wrap\"").unwrap();

    let err = HostConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_descending_override() {
    let config = HostConfig::new(true, JumpPolicy::Reject).with_ascending(false);
    assert!(!config.ascending());
}
