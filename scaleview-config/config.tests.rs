use ratatui_core::style::Color;
use std::path::PathBuf;

use crate::themes::TextColors;

use super::*;

fn temp_config_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{APP_NAME}-{}-{name}.yaml", std::process::id()))
}

#[test]
fn deserialize_partial_config_test() {
    let config: Config = serde_yaml::from_str("unknown_value: \"-\"").unwrap();
    assert_eq!("-", config.unknown_value);
    assert_eq!(TableColors::default(), config.colors);

    let config: Config = serde_yaml::from_str("colors:\n  incomplete: red").unwrap();
    assert_eq!("", config.unknown_value);
    assert_eq!(TextColors::new(Color::Red), config.colors.incomplete);
}

#[tokio::test]
async fn load_or_create_default_creates_missing_file_test() {
    let path = temp_config_path("missing");
    let _ = tokio::fs::remove_file(&path).await;

    let config: Config = load_or_create_default(&path).await.unwrap();
    assert_eq!(Config::default(), config);
    assert!(path.exists());

    let loaded = Config::load_from(&path).await.unwrap();
    assert_eq!(config, loaded);

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn load_or_create_default_keeps_invalid_file_test() {
    let path = temp_config_path("invalid");
    tokio::fs::write(&path, "colors: [1, 2").await.unwrap();

    let config: Config = load_or_create_default(&path).await.unwrap();
    assert_eq!(Config::default(), config);
    assert!(Config::load_from(&path).await.is_err());

    let _ = tokio::fs::remove_file(&path).await;
}
