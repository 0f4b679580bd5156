pub use self::config::{APP_NAME, APP_VERSION, Config, ConfigError, Persistable};

pub mod themes;

mod config;
