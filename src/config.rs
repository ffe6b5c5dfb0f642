use crate::error::{MatcherError, Result};
use product_matcher_common::DEFAULT_DESCRIPTION_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 商品名スコアのデフォルト閾値（0〜100）
pub const DEFAULT_TITLE_THRESHOLD: u8 = 70;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vendor_catalog: PathBuf,
    pub reference_catalog: PathBuf,
    pub output: PathBuf,
    pub description_threshold: f64,
    pub title_threshold: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vendor_catalog: PathBuf::from("comp1.csv"),
            reference_catalog: PathBuf::from("comp21.csv"),
            output: PathBuf::from("price_comparison_result_filtered.csv"),
            description_threshold: DEFAULT_DESCRIPTION_THRESHOLD,
            title_threshold: DEFAULT_TITLE_THRESHOLD,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MatcherError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("product-matcher").join("config.json"))
    }

    /// 閾値の範囲チェック
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.description_threshold) {
            return Err(MatcherError::Config(format!(
                "説明文の閾値は0.0〜1.0で指定してください: {}",
                self.description_threshold
            )));
        }
        if self.title_threshold > 100 {
            return Err(MatcherError::Config(format!(
                "商品名の閾値は0〜100で指定してください: {}",
                self.title_threshold
            )));
        }
        Ok(())
    }

    pub fn set_description_threshold(&mut self, threshold: f64) -> Result<()> {
        self.description_threshold = threshold;
        self.validate()
    }

    pub fn set_title_threshold(&mut self, threshold: u8) -> Result<()> {
        self.title_threshold = threshold;
        self.validate()
    }
}
