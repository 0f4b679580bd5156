use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::themes::TableColors;

#[cfg(test)]
#[path = "./config.tests.rs"]
mod config_tests;

pub const APP_NAME: &str = "scaleview";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Possible errors from configuration files manipulation.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Cannot read/write configuration file.
    #[error("cannot read/write configuration file")]
    IoError(#[from] std::io::Error),

    /// Cannot serialize/deserialize configuration.
    #[error("cannot serialize/deserialize configuration")]
    SerializationError(#[from] serde_yaml::Error),
}

/// Configurations that can be saved to and load from a file.
pub trait Persistable<T> {
    /// Returns the default configuration path.
    fn default_path() -> PathBuf;

    /// Loads configuration from the provided file.
    fn load(path: &Path) -> impl Future<Output = Result<T, ConfigError>> + Send;

    /// Saves configuration to the provided file.
    fn save(&self, path: &Path) -> impl Future<Output = Result<(), ConfigError>> + Send;
}

/// Application configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Text displayed in place of a value that is missing in the resource.
    #[serde(default)]
    pub unknown_value: String,

    #[serde(default)]
    pub colors: TableColors,
}

impl Config {
    /// Loads the configuration from the default file or creates a default one if the file does not exist.
    pub async fn load_or_create() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }

        load_or_create_default(&path).await
    }

    /// Loads the configuration from the provided file.\
    /// **Note** that unlike [`Config::load_or_create`] it never falls back to defaults.
    pub async fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load(path).await
    }
}

impl Persistable<Config> for Config {
    /// Returns the default configuration path: `HOME/.scaleview/config.yaml`.
    fn default_path() -> PathBuf {
        match std::env::home_dir() {
            Some(path) => path.join(format!(".{APP_NAME}")).join("config.yaml"),
            None => PathBuf::from("config.yaml"),
        }
    }

    async fn load(path: &Path) -> Result<Config, ConfigError> {
        let mut file = File::open(path).await?;

        let mut config_str = String::new();
        file.read_to_string(&mut config_str).await?;

        Ok(serde_yaml::from_str::<Config>(&config_str)?)
    }

    async fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let config_str = serde_yaml::to_string(self)?;

        let mut file = File::create(path).await?;
        file.write_all(config_str.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}

async fn load_or_create_default<T: Persistable<T> + Default>(path: &Path) -> Result<T, ConfigError> {
    match T::load(path).await {
        Ok(configuration) => Ok(configuration),
        Err(ConfigError::SerializationError(error)) => {
            tracing::error!("Cannot deserialize config: {}", error);
            Ok(T::default())
        },
        Err(error) => {
            tracing::warn!("Cannot load config, creating default one: {}", error);
            let configuration = T::default();
            configuration.save(path).await?;
            Ok(configuration)
        },
    }
}
