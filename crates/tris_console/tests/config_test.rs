//! Tests for loading match configuration from disk.

use std::io::Write;
use std::time::Duration;
use tris_console::MatchConfig;
use tris_engine::Difficulty;

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "bot_delay_ms = 0\ndifficulty = \"extreme\"\nrounds = 3\nseed = 9"
    )
    .unwrap();

    let config = MatchConfig::from_file(file.path()).unwrap();
    assert_eq!(config.bot_delay(), Duration::ZERO);
    assert_eq!(*config.difficulty(), Difficulty::Extreme);
    assert_eq!(*config.rounds(), Some(3));
    assert_eq!(*config.seed(), Some(9));
}

#[test]
fn test_config_rejects_unknown_difficulty() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "difficulty = \"impossible\"").unwrap();

    let err = MatchConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = MatchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
