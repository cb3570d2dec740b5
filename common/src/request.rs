//! リクエスト組み立てとレスポンス解釈
//!
//! 送信形式: `POST {base}/analyze`（multipart, 4パート）
//! - `pdf`: 文書ファイル
//! - `rule1` / `rule2` / `rule3`: ルール文（未入力は空文字）

use crate::error::{CheckError, Result};
use crate::input::{DocumentHandle, Submission};
use crate::types::AnalysisResult;
use serde_json::Value;

/// 解析エンドポイントのパス
pub const ANALYZE_PATH: &str = "/analyze";

/// ファイルパートのフィールド名
pub const FILE_FIELD: &str = "pdf";

/// ルールパートのフィールド名
pub const RULE_FIELDS: [&str; 3] = ["rule1", "rule2", "rule3"];

/// ベースURLから解析エンドポイントのURLを組み立てる
pub fn analyze_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), ANALYZE_PATH)
}

/// multipartの1パート
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart<'a, F> {
    File { name: &'static str, file: &'a F },
    Text { name: &'static str, value: &'a str },
}

impl<F> FormPart<'_, F> {
    pub fn name(&self) -> &'static str {
        match self {
            FormPart::File { name, .. } | FormPart::Text { name, .. } => *name,
        }
    }
}

impl<F: DocumentHandle> Submission<F> {
    /// 送信用のパート列（ファイル、ルール1〜3の順で常に4件）
    pub fn form_parts(&self) -> Vec<FormPart<'_, F>> {
        let mut parts = Vec::with_capacity(1 + RULE_FIELDS.len());
        parts.push(FormPart::File {
            name: FILE_FIELD,
            file: &self.file,
        });
        for (name, value) in RULE_FIELDS.iter().zip(self.rules.iter()) {
            parts.push(FormPart::Text {
                name: *name,
                value: value.as_str(),
            });
        }
        parts
    }
}

/// HTTPレスポンスを解析結果またはエラーに変換
///
/// エラーメッセージの優先順位:
/// 1. ボディの `error` フィールド
/// 2. ボディの `detail` フィールド（サービスのフレームワーク既定のエラー形式）
/// 3. ステータスコードを含む通信エラー文言
pub fn interpret_response(status: u16, body: &str) -> Result<AnalysisResult> {
    if (200..300).contains(&status) {
        return AnalysisResult::from_json(body);
    }

    if let Some(message) = service_error_message(body) {
        return Err(CheckError::Service(message));
    }

    Err(CheckError::transport(format!(
        "Request failed with status code {}",
        status
    )))
}

/// ボディからサービスのエラーメッセージを取り出す（空文字は無視）
pub fn service_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["error", "detail"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|message| !message.is_empty())
        .map(str::to_string)
}
