use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Stores user-configurable preferences and metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Book opened when the caller does not name one.
    #[serde(default = "Config::default_book_value")]
    pub default_book: String,

    /// How a sale's total is recomputed on a quantity update. Parsed by
    /// the core's `SaleRepricing::from_config_value`; the reference
    /// system's ambiguous arithmetic is available as
    /// `legacy-old-times-new`.
    #[serde(default = "Config::default_sale_repricing_value")]
    pub sale_repricing: String,

    #[serde(default = "Config::default_backup_retention")]
    pub backup_retention: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for books and backups. Defaults to
    /// the platform data directory under `shopbook`.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_book: Self::default_book_value(),
            sale_repricing: Self::default_sale_repricing_value(),
            backup_retention: Self::default_backup_retention(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn default_book_value() -> String {
        "shop".into()
    }

    pub fn default_sale_repricing_value() -> String {
        "unit-times-new".into()
    }

    pub fn default_backup_retention() -> usize {
        5
    }

    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("shopbook")
    }

    pub fn books_dir(&self) -> PathBuf {
        self.resolve_data_dir().join("books")
    }

    pub fn backups_dir(&self) -> PathBuf {
        self.resolve_data_dir().join("backups")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.default_book, "shop");
        assert_eq!(config.sale_repricing, "unit-times-new");
        assert_eq!(config.backup_retention, 5);
    }

    #[test]
    fn explicit_data_dir_wins() {
        let config = Config {
            data_dir: Some(PathBuf::from("/srv/shop")),
            ..Config::default()
        };
        assert_eq!(config.books_dir(), PathBuf::from("/srv/shop/books"));
        assert_eq!(config.backups_dir(), PathBuf::from("/srv/shop/backups"));
    }

    #[test]
    fn partial_config_files_fill_in_defaults() {
        let config: Config = serde_json::from_str(r#"{"default_book":"corner"}"#).expect("parse");
        assert_eq!(config.default_book, "corner");
        assert_eq!(config.sale_repricing, "unit-times-new");
    }
}
