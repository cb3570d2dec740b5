//! 解析結果の型定義
//!
//! 解析サービスのレスポンスを受信時に一度だけ正規化する:
//! - AnalysisResult: レスポンス全体（受信したままのJSONも保持）
//! - ResultBody: 判定リスト or 不明な形状のフォールバック
//! - RuleVerdict: ルール1件分の判定
//!
//! 欠損・不正な値はここで既定値に変換し、表示側では分岐しない。

use crate::error::{CheckError, Result};
use serde_json::{Map, Value};

/// ルール1件分の判定結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleVerdict {
    /// 評価されたルール文
    pub rule: String,
    /// 判定（PASS / FAIL / その他の任意文字列）
    pub status: String,
    /// 根拠（表示用文字列に変換済み）
    pub evidence: String,
    /// 判定理由
    pub reasoning: String,
    /// 確信度（数値でなければ0）
    pub confidence: f64,
}

impl RuleVerdict {
    /// JSON値から判定を生成
    ///
    /// オブジェクト以外の要素でも行は省略せず、全フィールド既定値の判定を返す。
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        Self {
            rule: text_field(obj, "rule"),
            status: text_field(obj, "status"),
            evidence: evidence_text(obj.get("evidence")),
            reasoning: text_field(obj, "reasoning"),
            confidence: confidence_value(obj.get("confidence")),
        }
    }
}

/// メタ情報
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultMeta {
    /// ページ数
    pub pages_count: Option<u64>,
    /// 使用モデル
    pub model: Option<String>,
    /// サービス側で受け取ったファイル名
    pub filename: Option<String>,
}

impl ResultMeta {
    fn from_value(value: Option<&Value>) -> Self {
        let Some(obj) = value.and_then(Value::as_object) else {
            return Self::default();
        };

        Self {
            pages_count: obj.get("pagesCount").and_then(Value::as_u64),
            model: obj.get("model").and_then(Value::as_str).map(str::to_string),
            filename: obj.get("filename").and_then(Value::as_str).map(str::to_string),
        }
    }
}

/// 結果本体
#[derive(Debug, Clone, PartialEq)]
pub enum ResultBody {
    /// 想定どおりの判定リスト（順序は保持）
    RuleVerdicts(Vec<RuleVerdict>),
    /// 判定リスト以外の任意のJSON（そのまま表示）
    Opaque(Value),
}

impl ResultBody {
    fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Array(items)) => {
                ResultBody::RuleVerdicts(items.iter().map(RuleVerdict::from_value).collect())
            }
            Some(other) => ResultBody::Opaque(other.clone()),
            None => ResultBody::Opaque(Value::Null),
        }
    }
}

/// 解析サービスのレスポンス
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub meta: ResultMeta,
    pub body: ResultBody,
    raw: Value,
}

impl AnalysisResult {
    /// JSON値から生成（オブジェクト以外は不正レスポンス）
    pub fn from_value(raw: Value) -> Result<Self> {
        if !raw.is_object() {
            return Err(CheckError::transport(format!(
                "Malformed response: expected a JSON object, got {}",
                json_kind(&raw)
            )));
        }

        let meta = ResultMeta::from_value(raw.get("meta"));
        let body = ResultBody::from_value(raw.get("result"));
        Ok(Self { meta, body, raw })
    }

    /// JSON文字列から生成
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(text)
            .map_err(|e| CheckError::transport(format!("Malformed response: {}", e)))?;
        Self::from_value(raw)
    }

    /// 受信したままのJSON
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// 判定リスト（フォールバック形状ならNone）
    pub fn verdicts(&self) -> Option<&[RuleVerdict]> {
        match &self.body {
            ResultBody::RuleVerdicts(verdicts) => Some(verdicts.as_slice()),
            ResultBody::Opaque(_) => None,
        }
    }
}

fn text_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn evidence_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn confidence_value(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|c| c.is_finite()).unwrap_or(0.0)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
