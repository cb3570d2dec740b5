//! ビルド時設定

/// 解析サービスの既定URL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// 解析サービスのベースURL（ビルド時に `RULE_CHECK_ENDPOINT` で上書き可）
pub fn api_base_url() -> &'static str {
    option_env!("RULE_CHECK_ENDPOINT")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
}
