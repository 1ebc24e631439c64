//! Tests for HovertipError type

use super::*;

#[test]
fn test_invalid_selector_error_display() {
    let error = HovertipError::InvalidSelector("div#".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Invalid selector"));
    assert!(msg.contains("div#"));
}

#[test]
fn test_config_not_found_display() {
    let error = HovertipError::ConfigNotFound(PathBuf::from("/nope/config.toml"));
    assert!(error.to_string().contains("/nope/config.toml"));
}

#[test]
fn test_config_parse_display() {
    let error = HovertipError::ConfigParse {
        path: PathBuf::from("config.toml"),
        message: "expected `=`".to_string(),
    };
    let msg = error.to_string();
    assert!(msg.contains("Invalid config file config.toml"));
    assert!(msg.contains("expected `=`"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = HovertipError::from(io_err);
    assert!(matches!(err, HovertipError::Io(_)));
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_error_debug() {
    let error = HovertipError::InvalidSelector(String::new());
    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("InvalidSelector"));
}
