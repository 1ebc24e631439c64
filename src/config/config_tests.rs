//! Tests for config loading

use std::io::Write;

use tempfile::NamedTempFile;

use super::*;
use crate::tooltip::Placement;

#[test]
fn test_load_explicit_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[tooltip]\nplacement = \"right\"\nshow_delay_ms = 50").unwrap();

    let config = load_config(Some(file.path())).unwrap();

    assert_eq!(config.tooltip.placement, Placement::Right);
    assert_eq!(config.tooltip.show_delay_ms, 50);
}

#[test]
fn test_load_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let result = load_config(Some(&path));

    assert!(matches!(result, Err(HovertipError::ConfigNotFound(p)) if p == path));
}

#[test]
fn test_load_malformed_file_reports_path() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[tooltip\nplacement = ").unwrap();

    let err = load_config(Some(file.path())).unwrap_err();

    match err {
        HovertipError::ConfigParse { path, message } => {
            assert_eq!(path, file.path());
            assert!(!message.is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_parse_empty_config_is_default() {
    let config = parse_config(Path::new("config.toml"), "").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_default_config_path_ends_with_app_dir() {
    if let Some(path) = default_config_path() {
        assert!(path.ends_with("hovertip/config.toml"));
    }
}
