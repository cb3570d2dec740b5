//! 結果コピーのテスト

use rule_check::clipboard::{copy_result, ClipboardWriter};
use rule_check_common::{AnalysisResult, CheckError, CheckSession, DocumentFile};
use serde_json::json;
use std::cell::RefCell;

struct MemoryClipboard {
    contents: RefCell<Option<String>>,
    fail_with: Option<String>,
}

impl MemoryClipboard {
    fn new() -> Self {
        Self {
            contents: RefCell::new(None),
            fail_with: None,
        }
    }

    fn broken(reason: &str) -> Self {
        Self {
            contents: RefCell::new(None),
            fail_with: Some(reason.to_string()),
        }
    }
}

impl ClipboardWriter for MemoryClipboard {
    async fn write_text(&self, text: &str) -> rule_check_common::Result<()> {
        if let Some(reason) = &self.fail_with {
            return Err(CheckError::clipboard(reason.clone()));
        }
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

fn session_with_result() -> CheckSession<DocumentFile> {
    let mut session = CheckSession::new();
    session.set_file(Some(DocumentFile::new("doc.pdf", vec![0u8; 4])));
    let pending = session.begin_submit().unwrap();
    let result = AnalysisResult::from_value(json!({
        "meta": {"pagesCount": 1},
        "result": [{"rule": "r", "status": "FAIL", "confidence": 0.1}]
    }))
    .unwrap();
    session.complete_submit(pending.ticket, Ok(result));
    session
}

#[tokio::test]
async fn test_copy_writes_pretty_json_and_sets_indicator() {
    let clipboard = MemoryClipboard::new();
    let mut session = session_with_result();

    let ticket = copy_result(&mut session, &clipboard).await.unwrap();

    assert!(ticket.is_some());
    assert!(session.is_copied());
    let text = clipboard.contents.borrow().clone().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["result"][0]["status"], "FAIL");
    assert!(text.contains("\n  "));

    assert!(session.expire_copied(ticket.unwrap()));
    assert!(!session.is_copied());
}

#[tokio::test]
async fn test_copy_without_result_is_noop() {
    let clipboard = MemoryClipboard::new();
    let mut session: CheckSession<DocumentFile> = CheckSession::new();

    let ticket = copy_result(&mut session, &clipboard).await.unwrap();

    assert!(ticket.is_none());
    assert!(clipboard.contents.borrow().is_none());
    assert!(session.error().is_none());
}

#[tokio::test]
async fn test_copy_failure_surfaces_as_error() {
    let clipboard = MemoryClipboard::broken("clipboard locked");
    let mut session = session_with_result();

    let err = copy_result(&mut session, &clipboard).await.unwrap_err();

    assert!(matches!(err, CheckError::ClipboardUnavailable(_)));
    assert_eq!(session.error(), Some("Copy failed: clipboard locked"));
    assert!(!session.is_copied());
}
