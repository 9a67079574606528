mod config_content_provider;
mod config_manager;
mod config_serializer;
mod error;
mod game_config;
mod validate;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use error::ConfigError;
pub use game_config::{GameConfig, GameMode, PlayerKind};
pub use validate::Validate;
