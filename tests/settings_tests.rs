// ../tests/settings_tests.rs
use deadlight::*;
use tempfile::tempdir;

#[test]
fn test_default_settings() {
    let settings = Settings::new();
    assert_eq!(settings.max_stress, 10);
    assert_eq!(settings.max_threat, 10);
    assert_eq!(settings.max_guts, 5);
    assert!(settings.cascade_wounds);
    assert!(!settings.debug_mode);
    assert_eq!(settings.wound_capacity(3), WoundCapacity::for_grit(3));
}

#[test]
fn test_settings_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("data").join("settings.json");

    let settings = Settings {
        max_stress: 6,
        cascade_wounds: false,
        ..Settings::default()
    };
    settings.save_to_file(&path).expect("Failed to save settings");

    let loaded = Settings::load_settings_from_file(&path).expect("Failed to load settings");
    assert_eq!(loaded, settings);
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"max_stress": 8}"#).expect("Failed to write settings");

    let loaded = Settings::load_settings_from_file(&path).expect("Failed to load settings");
    assert_eq!(loaded.max_stress, 8);
    assert_eq!(loaded.max_guts, 5);
    assert!(loaded.cascade_wounds);
}

#[test]
fn test_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nope.json");

    assert!(matches!(
        Settings::load_settings_from_file(&path),
        Err(GameError::IO(_))
    ));
    assert_eq!(
        Settings::load_or_default(&path).expect("defaults"),
        Settings::default()
    );
}

#[test]
fn test_broken_file_is_a_serialization_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").expect("Failed to write settings");

    assert!(matches!(
        Settings::load_settings_from_file(&path),
        Err(GameError::Serialization(_))
    ));
}
