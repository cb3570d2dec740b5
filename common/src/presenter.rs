//! 結果表示モデル
//!
//! AnalysisResult を画面表示用の値（表の行 or 生JSON）に変換する。
//! 元の結果は変更しない。

use crate::error::{CheckError, Result};
use crate::types::{AnalysisResult, ResultBody, RuleVerdict};

/// ページ数が不明なときの表示
pub const UNKNOWN_PAGES_LABEL: &str = "—";

/// モデル名が不明なときの表示
pub const DEFAULT_MODEL_LABEL: &str = "local";

/// 判定の表示区分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Pass,
    Fail,
    /// PASS/FAIL以外（空文字・未知の値を含む）
    Other,
}

impl StatusCategory {
    /// 判定文字列から区分を決める（`PASS` / `FAIL` の完全一致のみ）
    pub fn from_status(status: &str) -> Self {
        match status {
            "PASS" => StatusCategory::Pass,
            "FAIL" => StatusCategory::Fail,
            _ => StatusCategory::Other,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StatusCategory::Pass => "status-pass",
            StatusCategory::Fail => "status-fail",
            StatusCategory::Other => "status-other",
        }
    }
}

/// 確信度をバー幅（%）に変換。0〜100に丸め、非数は0
pub fn confidence_percent(confidence: f64) -> f64 {
    if !confidence.is_finite() {
        return 0.0;
    }
    let percent = (confidence * 100.0).clamp(0.0, 100.0);
    // 0.92 * 100 = 92.00000000000001 のような誤差を落とす
    (percent * 100.0).round() / 100.0
}

/// 確信度の数値ラベル
pub fn confidence_label(confidence: f64) -> String {
    let confidence = if confidence.is_finite() { confidence } else { 0.0 };
    format!("{:.2}", confidence)
}

/// 表の1行
#[derive(Debug, Clone, PartialEq)]
pub struct VerdictRow {
    /// 1始まりの表示番号
    pub index: usize,
    pub index_label: String,
    pub rule: String,
    pub status_label: String,
    pub category: StatusCategory,
    pub evidence: String,
    pub reasoning: String,
    pub confidence_label: String,
    pub bar_percent: f64,
}

impl VerdictRow {
    fn new(position: usize, verdict: &RuleVerdict) -> Self {
        let index = position + 1;
        Self {
            index,
            index_label: format!("rule #{}", index),
            rule: verdict.rule.clone(),
            status_label: verdict.status.clone(),
            category: StatusCategory::from_status(&verdict.status),
            evidence: verdict.evidence.clone(),
            reasoning: verdict.reasoning.clone(),
            confidence_label: confidence_label(verdict.confidence),
            bar_percent: confidence_percent(verdict.confidence),
        }
    }

    /// バーのインラインスタイル
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.bar_percent)
    }
}

/// 結果本体の表示
#[derive(Debug, Clone, PartialEq)]
pub enum BodyView {
    Table(Vec<VerdictRow>),
    /// 判定リスト以外はJSONをそのまま表示
    Raw(String),
}

/// 結果全体の表示
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub pages_label: String,
    pub model_label: String,
    pub filename: Option<String>,
    pub body: BodyView,
}

impl ResultView {
    pub fn render(result: &AnalysisResult) -> Self {
        let pages_label = result
            .meta
            .pages_count
            .map(|n| n.to_string())
            .unwrap_or_else(|| UNKNOWN_PAGES_LABEL.to_string());
        let model_label = result
            .meta
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL_LABEL.to_string());

        let body = match &result.body {
            ResultBody::RuleVerdicts(verdicts) => BodyView::Table(
                verdicts
                    .iter()
                    .enumerate()
                    .map(|(i, v)| VerdictRow::new(i, v))
                    .collect(),
            ),
            ResultBody::Opaque(value) => BodyView::Raw(
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
            ),
        };

        Self {
            pages_label,
            model_label,
            filename: result.meta.filename.clone(),
            body,
        }
    }

    pub fn rows(&self) -> &[VerdictRow] {
        match &self.body {
            BodyView::Table(rows) => rows.as_slice(),
            BodyView::Raw(_) => &[],
        }
    }
}

/// クリップボード用テキスト（受信したJSON全体を2スペースインデントで整形）
pub fn serialize_for_clipboard(result: &AnalysisResult) -> Result<String> {
    serde_json::to_string_pretty(result.raw()).map_err(|e| CheckError::clipboard(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn render(value: Value) -> ResultView {
        ResultView::render(&AnalysisResult::from_value(value).unwrap())
    }

    #[test]
    fn test_single_pass_row() {
        let view = render(json!({
            "meta": {"pagesCount": 3, "model": "local"},
            "result": [{
                "rule": "must have a date",
                "status": "PASS",
                "evidence": "2024-01-01",
                "reasoning": "date found",
                "confidence": 0.92
            }]
        }));

        assert_eq!(view.pages_label, "3");
        assert_eq!(view.model_label, "local");
        let rows = view.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].index_label, "rule #1");
        assert_eq!(rows[0].category, StatusCategory::Pass);
        assert_eq!(rows[0].confidence_label, "0.92");
        assert_eq!(rows[0].bar_percent, 92.0);
        assert_eq!(rows[0].bar_style(), "width: 92%");
    }

    #[test]
    fn test_rows_keep_order_and_index() {
        let view = render(json!({
            "result": [
                {"rule": "z", "status": "FAIL"},
                {"rule": "a", "status": "PASS"},
                {"rule": "m", "status": "UNKNOWN"}
            ]
        }));

        let rows = view.rows();
        assert_eq!(rows.len(), 3);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.index, i + 1);
            assert_eq!(row.index_label, format!("rule #{}", i + 1));
        }
        assert_eq!(rows[0].rule, "z");
        assert_eq!(rows[2].rule, "m");
    }

    #[test]
    fn test_status_categories() {
        assert_eq!(StatusCategory::from_status("PASS"), StatusCategory::Pass);
        assert_eq!(StatusCategory::from_status("FAIL"), StatusCategory::Fail);
        assert_eq!(StatusCategory::from_status("pass"), StatusCategory::Other);
        assert_eq!(StatusCategory::from_status(" FAIL "), StatusCategory::Other);
        assert_eq!(StatusCategory::from_status("UNKNOWN"), StatusCategory::Other);
        assert_eq!(StatusCategory::from_status("error"), StatusCategory::Other);
        assert_eq!(StatusCategory::from_status(""), StatusCategory::Other);

        assert_ne!(
            StatusCategory::Pass.css_class(),
            StatusCategory::Fail.css_class()
        );
        assert_ne!(
            StatusCategory::Other.css_class(),
            StatusCategory::Fail.css_class()
        );
    }

    #[test]
    fn test_other_status_keeps_row_and_label() {
        let view = render(json!({"result": [{"rule": "r"}, {"status": "UNKNOWN"}]}));
        let rows = view.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].status_label, "");
        assert_eq!(rows[0].category, StatusCategory::Other);
        assert_eq!(rows[1].status_label, "UNKNOWN");
    }

    #[test]
    fn test_lowercase_status_keeps_raw_label() {
        let view = render(json!({"result": [{"rule": "r", "status": "pass"}]}));
        let row = &view.rows()[0];
        assert_eq!(row.status_label, "pass");
        assert_eq!(row.category, StatusCategory::Other);
        assert_eq!(row.category.css_class(), "status-other");
    }

    #[test]
    fn test_missing_confidence_is_zero() {
        let view = render(json!({
            "result": [
                {"rule": "a"},
                {"rule": "b", "confidence": null},
                {"rule": "c", "confidence": "very sure"}
            ]
        }));

        for row in view.rows() {
            assert_eq!(row.confidence_label, "0.00");
            assert_eq!(row.bar_percent, 0.0);
            assert_eq!(row.bar_style(), "width: 0%");
        }
    }

    #[test]
    fn test_confidence_clamped() {
        assert_eq!(confidence_percent(1.5), 100.0);
        assert_eq!(confidence_percent(-0.3), 0.0);
        assert_eq!(confidence_percent(f64::NAN), 0.0);
        assert_eq!(confidence_percent(f64::INFINITY), 0.0);
        assert_eq!(confidence_label(f64::NAN), "0.00");
    }

    #[test]
    fn test_meta_defaults() {
        let view = render(json!({"result": []}));
        assert_eq!(view.pages_label, "—");
        assert_eq!(view.model_label, "local");
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_opaque_body_is_raw_dump() {
        let view = render(json!({"result": {"summary": "ok", "score": 1}}));
        match view.body {
            BodyView::Raw(text) => {
                let parsed: Value = serde_json::from_str(&text).unwrap();
                assert_eq!(parsed, json!({"summary": "ok", "score": 1}));
            }
            BodyView::Table(_) => panic!("expected raw body"),
        }
    }

    #[test]
    fn test_clipboard_text_is_lossless() {
        let payload = json!({
            "meta": {"pagesCount": 2, "filename": "doc.pdf"},
            "result": [{"rule": "r", "status": "PASS", "confidence": "n/a", "extra": true}]
        });
        let result = AnalysisResult::from_value(payload.clone()).unwrap();

        let text = serialize_for_clipboard(&result).unwrap();
        assert!(text.contains("\n  \"meta\""));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, payload);
    }
}
