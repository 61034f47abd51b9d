use shopbook_config::ConfigError;
use shopbook_core::CoreError;
use thiserror::Error;

/// Unified error type across the config, core, and storage layers.
#[derive(Debug, Error)]
pub enum ShopbookError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ConfigError> for ShopbookError {
    fn from(err: ConfigError) -> Self {
        ShopbookError::Config(err.to_string())
    }
}
