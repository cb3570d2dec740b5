//! エラー型定義
//!
//! UI境界で終端する4種類のエラー。どれも自動リトライはしない。

use thiserror::Error;

/// 通信失敗時の説明が空だった場合のフォールバック
pub const FALLBACK_TRANSPORT_MESSAGE: &str = "Network Error";

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// ファイル未選択（通信は発生しない）
    #[error("Please upload a PDF (2–10 pages)")]
    MissingFile,

    /// 解析サービスが返したエラーメッセージ
    #[error("{0}")]
    Service(String),

    /// 通信失敗・不正レスポンス・エラーペイロードなしの非2xx
    #[error("{0}")]
    Transport(String),

    /// クリップボードへの書き込み失敗
    #[error("Copy failed: {0}")]
    ClipboardUnavailable(String),
}

impl CheckError {
    /// 通信エラーを生成（空の説明はフォールバック文言に置換）
    pub fn transport(description: impl Into<String>) -> Self {
        let description = description.into();
        if description.trim().is_empty() {
            CheckError::Transport(FALLBACK_TRANSPORT_MESSAGE.to_string())
        } else {
            CheckError::Transport(description)
        }
    }

    /// クリップボードエラーを生成
    pub fn clipboard(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        if reason.trim().is_empty() {
            CheckError::ClipboardUnavailable("clipboard unavailable".to_string())
        } else {
            CheckError::ClipboardUnavailable(reason)
        }
    }

    /// 画面に表示するメッセージ
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, CheckError>;
