use crate::error::{CornerDetectError, Result};
use corner_detect_common::{normalize_base_url, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ベースURLを上書きする環境変数
pub const BASE_URL_ENV: &str = "CORNER_DETECT_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

impl Config {
    /// 設定ファイル → 環境変数（`BASE_URL_ENV`）→ 明示指定の順に上書きする
    ///
    /// 明示指定がある場合、設定ファイルや環境変数が壊れていても既定値から始める。
    pub fn resolve(path: &Path, env: Option<String>, explicit: Option<&str>) -> Result<Self> {
        let loaded = Self::load_from(path).and_then(|mut config| {
            config.apply_override(env)?;
            Ok(config)
        });

        let mut config = match (loaded, explicit) {
            (Ok(config), _) => config,
            (Err(e), Some(_)) => {
                log::warn!("設定を読み込めないため既定値を使います: {}", e);
                Self::default()
            }
            (Err(e), None) => return Err(e),
        };

        if let Some(url) = explicit {
            config.set_base_url(url)?;
        }
        Ok(config)
    }

    /// 環境変数の値で上書きする（空文字は無視）
    pub fn apply_override(&mut self, url: Option<String>) -> Result<()> {
        if let Some(url) = url {
            if !url.trim().is_empty() {
                self.base_url = normalize_base_url(&url)?;
            }
        }
        Ok(())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&content)?;
        config.base_url = normalize_base_url(&config.base_url)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CornerDetectError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("corner-detect").join("config.json"))
    }

    /// ベースURLを検証してから設定する（保存はしない）
    pub fn set_base_url(&mut self, url: &str) -> Result<()> {
        self.base_url = normalize_base_url(url)?;
        Ok(())
    }
}
