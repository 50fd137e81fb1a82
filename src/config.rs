use crate::error::{CatalogueError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 永続化するユーザ設定（~/.config/photo-catalogue/config.json）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 価格表示に使う通貨記号
    pub currency_symbol: String,
    /// 既定のドキュメントタイトル
    pub default_title: String,
    /// generateの既定最低在庫数
    pub default_min_stock: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "R".into(),
            default_title: "Photo Catalogue".into(),
            default_min_stock: 0.0,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CatalogueError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-catalogue").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.currency_symbol, "R");
        assert_eq!(config.default_min_stock, 0.0);
    }

    #[test]
    fn test_config_roundtrip_json() {
        let config = Config {
            currency_symbol: "$".into(),
            default_title: "Catalogue".into(),
            default_min_stock: 5.0,
        };
        let json = serde_json::to_string(&config).unwrap();
        let restored: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.currency_symbol, "$");
        assert_eq!(restored.default_min_stock, 5.0);
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let restored: Config = serde_json::from_str(r#"{"currency_symbol": "€"}"#).unwrap();
        // 欠けたフィールドは既定値になる
        assert_eq!(restored.currency_symbol, "€");
        assert_eq!(restored.default_title, "Photo Catalogue");
    }
}
