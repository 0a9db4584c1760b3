use storefront_core::types::{AppConfig, EqualityKind, SearchSettings};
use tempfile::TempDir;

/// Verify a missing config file yields defaults instead of an error.
#[test]
fn test_load_missing_returns_default() {
    let temp = TempDir::new().unwrap();
    let config = AppConfig::load(&AppConfig::path(temp.path())).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.search.debounce_ms, 500);
    assert_eq!(config.search.equality, EqualityKind::Structural);
}

/// Verify settings survive a save/load cycle through config.toml.
#[test]
fn test_save_then_load() {
    let temp = TempDir::new().unwrap();
    let path = AppConfig::path(temp.path());
    let config = AppConfig {
        search: SearchSettings {
            debounce_ms: 250,
            keys: vec!["name".to_string(), "sku".to_string()],
            equality: EqualityKind::Serialized,
        },
    };

    config.save(&path).unwrap();
    let loaded = AppConfig::load(&path).unwrap();

    assert_eq!(loaded, config);
}

/// Verify omitted fields fall back to their defaults.
#[test]
fn test_partial_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let path = AppConfig::path(temp.path());
    std::fs::write(&path, "[search]\nkeys = [\"email\"]\n").unwrap();

    let config = AppConfig::load(&path).unwrap();

    assert_eq!(config.search.keys, vec!["email".to_string()]);
    assert_eq!(config.search.debounce_ms, 500);
    assert_eq!(config.search.equality, EqualityKind::Structural);
}

/// Verify unknown equality names are rejected at parse time.
#[test]
fn test_invalid_equality_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = AppConfig::path(temp.path());
    std::fs::write(&path, "[search]\nequality = \"fuzzy\"\n").unwrap();

    AppConfig::load(&path).unwrap_err();
}

/// Verify validation reports missing and blank search keys.
#[test]
fn test_validate_reports_bad_keys() {
    let mut config = AppConfig::default();
    assert_eq!(config.validate().len(), 1);

    config.search.keys = vec!["name".to_string(), "  ".to_string()];
    let errors = config.validate();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("invalid"));

    let fixed = config.with_defaults_for_invalid();
    assert_eq!(fixed.search.keys, vec!["name".to_string()]);
    assert!(fixed.validate().is_empty());
}

/// Verify configured keys convert into trimmed field names in order.
#[test]
fn test_field_names_in_order() {
    let settings = SearchSettings {
        keys: vec![" name".to_string(), "sku".to_string()],
        ..SearchSettings::default()
    };

    let names = settings.field_names().unwrap();
    let names: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
    assert_eq!(names, ["name", "sku"]);
}

/// Verify equality kinds parse from their display names.
#[test]
fn test_equality_kind_from_str() {
    assert_eq!(
        "structural".parse::<EqualityKind>().unwrap(),
        EqualityKind::Structural
    );
    assert_eq!(
        "serialized".parse::<EqualityKind>().unwrap(),
        EqualityKind::Serialized
    );
    assert!("deep".parse::<EqualityKind>().is_err());
    assert_eq!(EqualityKind::Serialized.to_string(), "serialized");
}
