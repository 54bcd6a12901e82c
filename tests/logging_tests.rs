// ../tests/logging_tests.rs
// The logger is process-wide, so this file holds a single test.
use deadlight::error::LoggingError;
use deadlight::logging::{LOG_FILE, init_at};
use deadlight::*;
use log::Level;
use tempfile::tempdir;

#[test]
fn test_rolls_are_logged_to_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    init_at(dir.path(), Level::Debug).expect("Failed to init logger");

    roll_pool(2, false, &mut ScriptedDice::new([5, 2]));
    log::trace!("not written");

    let log = std::fs::read_to_string(dir.path().join(LOG_FILE)).expect("log file exists");
    assert!(log.contains("DEBUG - Rolled pool of 2"));
    assert!(!log.contains("not written"));

    // A second logger cannot be installed.
    assert!(matches!(
        init_at(dir.path(), Level::Info),
        Err(LoggingError::AlreadySet(_))
    ));
}
