//! Configuration Loading Tests
//!
//! JSON configuration files:
//! - Omitted fields take defaults
//! - Invalid delimiters and names are rejected before use
//! - A loaded config drives the type registry

use std::fs;

use pgmarshal::array::{ArrayValue, ParserKind};
use pgmarshal::config::{ArrayTypeRegistry, ConfigError, MarshalConfig};
use pgmarshal::observability::Severity;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("pgmarshal.json");
    fs::write(&path, body).unwrap();
    path
}

// =============================================================================
// Loading Tests
// =============================================================================

#[test]
fn test_load_full_config() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        &tmp,
        r#"{
            "parser": "reference",
            "log_level": "warn",
            "array_types": [
                { "name": "box", "delimiter": ";" },
                { "name": "tags", "delimiter": "|" },
                { "name": "int4" }
            ]
        }"#,
    );

    let config = MarshalConfig::load(&path).unwrap();
    assert_eq!(config.parser, ParserKind::Reference);
    assert_eq!(config.log_level, Severity::Warn);
    assert_eq!(config.array_types.len(), 3);
    assert_eq!(config.array_types[2].delimiter, ",");
}

#[test]
fn test_load_empty_object_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "{}");

    let config = MarshalConfig::load(&path).unwrap();
    assert_eq!(config.parser, ParserKind::Native);
    assert_eq!(config.log_level, Severity::Info);
    assert!(config.array_types.is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = MarshalConfig::load(tmp.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert_eq!(err.code(), "PGM_CONFIG_IO");
}

#[test]
fn test_malformed_json() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "{ \"parser\": ");
    let err = MarshalConfig::load(&path).unwrap_err();
    assert_eq!(err.code(), "PGM_CONFIG_MALFORMED");
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_invalid_delimiters_rejected() {
    let tmp = TempDir::new().unwrap();
    for delimiter in ["", ";;", "{", "}", "\\\"", "\\\\", " "] {
        let body = format!(
            r#"{{ "array_types": [{{ "name": "t", "delimiter": "{}" }}] }}"#,
            delimiter
        );
        let path = write_config(&tmp, &body);
        let err = MarshalConfig::load(&path).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidDelimiter { .. }),
            "{:?}: {:?}",
            delimiter,
            err
        );
    }
}

#[test]
fn test_duplicate_type_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        &tmp,
        r#"{ "array_types": [{ "name": "a" }, { "name": "a", "delimiter": ";" }] }"#,
    );
    let err = MarshalConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateType(ref name) if name == "a"));
}

// =============================================================================
// Registry Tests
// =============================================================================

#[test]
fn test_registry_from_loaded_config() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        &tmp,
        r#"{ "parser": "reference", "array_types": [{ "name": "tags", "delimiter": "|" }] }"#,
    );
    let config = MarshalConfig::load(&path).unwrap();
    let registry = ArrayTypeRegistry::from_config(&config).unwrap();

    assert_eq!(registry.parser(), ParserKind::Reference);
    let codec = registry.codec_for("tags");
    assert_eq!(codec.parser_name(), "reference");
    assert_eq!(
        codec.decode("{x|y}").unwrap(),
        ArrayValue::Array(vec![ArrayValue::text("x"), ArrayValue::text("y")])
    );

    // Unlisted types fall back to the built-in table
    assert_eq!(registry.codec_for("box").delimiter(), ';');
    assert_eq!(registry.codec_for("text").delimiter(), ',');
}

/// Parser selection, and any fallback warning, happens once per type.
#[test]
fn test_registry_builds_each_codec_once() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        &tmp,
        r#"{ "array_types": [{ "name": "custom", "delimiter": "¦" }] }"#,
    );
    let config = MarshalConfig::load(&path).unwrap();
    let registry = ArrayTypeRegistry::from_config(&config).unwrap();

    let codecs: Vec<_> = (0..3).map(|_| registry.codec_for("custom")).collect();
    assert_eq!(codecs[0].parser_name(), "reference");
    assert!(codecs.iter().all(|codec| codec.shares_parser(&codecs[0])));
    assert_eq!(registry.cached_codecs(), 1);
}
