use crate::error::{Result, RuleCheckError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// 解析サービスのURLを上書きする環境変数
pub const ENDPOINT_ENV: &str = "RULE_CHECK_ENDPOINT";

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 解析サービスのベースURL（`/analyze` は付けない）
    pub endpoint: String,
    /// 未設定ならHTTPクライアント既定のまま
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_seconds: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RuleCheckError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("rule-check").join("config.json"))
    }

    /// 送信先のベースURL（環境変数を優先）
    pub fn resolve_endpoint(&self) -> String {
        match std::env::var(ENDPOINT_ENV) {
            Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => self.endpoint.clone(),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        let endpoint = endpoint.trim().to_string();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(RuleCheckError::Config(format!(
                "URLは http:// または https:// で始まる必要があります: {}",
                endpoint
            )));
        }
        self.endpoint = endpoint;
        Ok(())
    }
}
