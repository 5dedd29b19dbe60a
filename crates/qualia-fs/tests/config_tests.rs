use pretty_assertions::assert_eq;
use qualia_fs::{ConfigStore, Error, QualiaConfig};
use rstest::rstest;
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
struct TestConfig {
    name: String,
    count: i32,
}

#[rstest]
#[case("config.toml", "name = \"test\"\ncount = 42\n")]
#[case("config.json", r#"{"name": "test", "count": 42}"#)]
#[case("config.yaml", "name: test\ncount: 42\n")]
#[case("config.yml", "name: test\ncount: 42\n")]
#[case("CONFIG.TOML", "name = \"test\"\ncount = 42\n")]
fn test_load_by_extension(#[case] file_name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(file_name);
    fs::write(&path, content).unwrap();

    let config: TestConfig = ConfigStore::new().load(&path).unwrap();
    assert_eq!(
        config,
        TestConfig {
            name: "test".into(),
            count: 42
        }
    );
}

#[rstest]
#[case("qualia.toml", "qualities = [\"work\", \"linux\"]\n")]
#[case("qualia.json", r#"{"qualities": ["work", "linux"]}"#)]
#[case("qualia.yaml", "qualities:\n  - work\n  - linux\n")]
fn test_load_qualia_config(#[case] file_name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(file_name);
    fs::write(&path, content).unwrap();

    let config = QualiaConfig::load(&path).unwrap();
    assert_eq!(config.qualities, vec!["work", "linux"]);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("qualia.toml");
    fs::write(&path, "qualities = [").unwrap();

    let err = QualiaConfig::load(&path).unwrap_err();
    match err {
        Error::ConfigParse { format, .. } => assert_eq!(format, "TOML"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = QualiaConfig::load(&temp.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_no_extension_is_unsupported() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("qualia");
    fs::write(&path, "qualities = []").unwrap();

    let err = QualiaConfig::load(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));
}
