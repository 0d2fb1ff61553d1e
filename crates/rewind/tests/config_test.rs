//! Tests for loading configuration from disk.

use rewind::{RewindConfig, BOARD_SIZE_ENV};
use rewind_tictactoe::SortOrder;
use std::io::Write;

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "board_size = 5\nsort_order = \"descending\"").unwrap();

    let config = RewindConfig::from_file(file.path()).unwrap();
    assert_eq!(config, RewindConfig::new(5, SortOrder::Descending));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "board_size = \"big\"").unwrap();

    let err = RewindConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{}", contents).unwrap();
    file
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let config = RewindConfig::load_with(&path, None).unwrap();
    assert_eq!(config, RewindConfig::default());
}

#[test]
fn test_file_used_without_env() {
    let file = config_file("board_size = 5");

    let config = RewindConfig::load_with(file.path(), None).unwrap();
    assert_eq!(*config.board_size(), 5);
}

#[test]
fn test_env_overrides_file() {
    let file = config_file("board_size = 5\nsort_order = \"descending\"");

    let config = RewindConfig::load_with(file.path(), Some("4")).unwrap();
    assert_eq!(config, RewindConfig::new(4, SortOrder::Descending));
}

#[test]
fn test_env_overrides_defaults_when_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let config = RewindConfig::load_with(&path, Some(" 7 ")).unwrap();
    assert_eq!(*config.board_size(), 7);
}

#[test]
fn test_invalid_env_is_error() {
    let file = config_file("board_size = 5");

    let err = RewindConfig::load_with(file.path(), Some("big")).unwrap_err();
    assert!(err.message.contains(BOARD_SIZE_ENV));
}

#[test]
fn test_size_flag_overrides_env_and_file() {
    let file = config_file("board_size = 5");

    let config = RewindConfig::load_with(file.path(), Some("4"))
        .unwrap()
        .with_size_flag(Some(6));
    assert_eq!(*config.board_size(), 6);
}

#[test]
fn test_absent_size_flag_keeps_env() {
    let file = config_file("board_size = 5");

    let config = RewindConfig::load_with(file.path(), Some("4"))
        .unwrap()
        .with_size_flag(None);
    assert_eq!(*config.board_size(), 4);
}
