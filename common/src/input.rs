//! 入力管理
//!
//! 対象ファイル1件とルール文3件を保持する。
//! ファイルの種類・サイズ・ページ数は検証しない（解析サービス側で判定）。

use crate::error::{CheckError, Result};

/// ファイル選択ダイアログに渡すMIMEタイプ（ヒントのみ、検証はしない）
pub const DOCUMENT_MIME: &str = "application/pdf";

/// アップロード対象として扱えるファイル
///
/// CLIではメモリ上のバイト列、ブラウザでは `web_sys::File` が実装する。
pub trait DocumentHandle: Clone {
    fn file_name(&self) -> String;
}

/// メモリ上に読み込んだ文書ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl DocumentFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

impl DocumentHandle for DocumentFile {
    fn file_name(&self) -> String {
        self.name.clone()
    }
}

/// ルール欄（1〜3）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleSlot {
    One,
    Two,
    Three,
}

impl RuleSlot {
    pub const ALL: [RuleSlot; 3] = [RuleSlot::One, RuleSlot::Two, RuleSlot::Three];

    /// 1始まりの番号から変換
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            1 => Some(RuleSlot::One),
            2 => Some(RuleSlot::Two),
            3 => Some(RuleSlot::Three),
            _ => None,
        }
    }

    /// 1始まりの番号
    pub fn index(self) -> usize {
        self.offset() + 1
    }

    fn offset(self) -> usize {
        match self {
            RuleSlot::One => 0,
            RuleSlot::Two => 1,
            RuleSlot::Three => 2,
        }
    }
}

/// 送信時点の入力スナップショット
///
/// 送信後に入力欄が編集されても、送信中のリクエストには影響しない。
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<F> {
    pub file: F,
    pub rules: [String; 3],
}

/// 入力コントローラ
#[derive(Debug, Clone)]
pub struct InputController<F> {
    file: Option<F>,
    rules: [String; 3],
}

impl<F> Default for InputController<F> {
    fn default() -> Self {
        Self {
            file: None,
            rules: Default::default(),
        }
    }
}

impl<F: DocumentHandle> InputController<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    /// ファイルを設定（Noneで解除）
    pub fn set_file(&mut self, file: Option<F>) {
        self.file = file;
    }

    /// ドロップされたファイルを受け取る
    ///
    /// 複数ある場合は先頭のみ採用。空なら何もしない。
    pub fn accept_dropped<I>(&mut self, files: I) -> bool
    where
        I: IntoIterator<Item = F>,
    {
        match files.into_iter().next() {
            Some(file) => {
                self.file = Some(file);
                true
            }
            None => false,
        }
    }

    /// ファイル選択ダイアログの結果を受け取る
    ///
    /// キャンセル（None）は選択済みファイルを消さない。
    pub fn accept_picked(&mut self, picked: Option<F>) -> bool {
        self.accept_dropped(picked)
    }

    pub fn set_rule(&mut self, slot: RuleSlot, text: impl Into<String>) {
        self.rules[slot.offset()] = text.into();
    }

    pub fn rule(&self, slot: RuleSlot) -> &str {
        &self.rules[slot.offset()]
    }

    pub fn rules(&self) -> &[String; 3] {
        &self.rules
    }

    /// 送信前の検証
    ///
    /// ファイル未設定のみがエラー。空のルールはそのまま送る。
    pub fn validate_for_submit(&self) -> Result<Submission<F>> {
        let file = self.file.clone().ok_or(CheckError::MissingFile)?;
        Ok(Submission {
            file,
            rules: self.rules.clone(),
        })
    }

    /// ファイルとルールを全てクリア
    pub fn clear(&mut self) {
        self.file = None;
        self.rules = Default::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str) -> DocumentFile {
        DocumentFile::new(name, b"%PDF-1.4".to_vec())
    }

    #[test]
    fn test_validate_without_file() {
        let mut input: InputController<DocumentFile> = InputController::new();
        input.set_rule(RuleSlot::One, "must have a date");
        assert_eq!(input.validate_for_submit().unwrap_err(), CheckError::MissingFile);
    }

    #[test]
    fn test_validate_with_blank_rules() {
        let mut input = InputController::new();
        input.set_file(Some(doc("doc.pdf")));

        let submission = input.validate_for_submit().unwrap();
        assert_eq!(submission.file.name, "doc.pdf");
        assert_eq!(submission.rules, [String::new(), String::new(), String::new()]);
    }

    #[test]
    fn test_drop_takes_first_file() {
        let mut input = InputController::new();
        assert!(input.accept_dropped(vec![doc("a.pdf"), doc("b.pdf")]));
        assert_eq!(input.file().unwrap().name, "a.pdf");
    }

    #[test]
    fn test_empty_drop_is_noop() {
        let mut input = InputController::new();
        input.set_file(Some(doc("keep.pdf")));
        assert!(!input.accept_dropped(Vec::new()));
        assert_eq!(input.file().unwrap().name, "keep.pdf");
    }

    #[test]
    fn test_cancelled_picker_keeps_file() {
        let mut input = InputController::new();
        input.set_file(Some(doc("keep.pdf")));
        assert!(!input.accept_picked(None));
        assert_eq!(input.file().unwrap().name, "keep.pdf");

        assert!(input.accept_picked(Some(doc("new.pdf"))));
        assert_eq!(input.file().unwrap().name, "new.pdf");
    }

    #[test]
    fn test_rules_are_independent() {
        let mut input: InputController<DocumentFile> = InputController::new();
        input.set_rule(RuleSlot::Two, "second");
        assert_eq!(input.rule(RuleSlot::One), "");
        assert_eq!(input.rule(RuleSlot::Two), "second");
        assert_eq!(input.rule(RuleSlot::Three), "");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut input = InputController::new();
        input.set_file(Some(doc("doc.pdf")));
        input.set_rule(RuleSlot::One, "before");

        let submission = input.validate_for_submit().unwrap();
        input.set_rule(RuleSlot::One, "after");
        assert_eq!(submission.rules[0], "before");
    }

    #[test]
    fn test_slot_index_roundtrip() {
        for slot in RuleSlot::ALL {
            assert_eq!(RuleSlot::from_index(slot.index()), Some(slot));
        }
        assert_eq!(RuleSlot::from_index(0), None);
        assert_eq!(RuleSlot::from_index(4), None);
    }
}
