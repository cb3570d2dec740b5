//! ルール入力

use crate::error::{Result, RuleCheckError};
use dialoguer::Input;
use rule_check_common::{CheckSession, DocumentFile, RuleSlot};

/// 対話的にルール1〜3を入力（空欄可）
///
/// コマンドライン引数の値を初期値として表示する。
pub fn prompt_rules(session: &mut CheckSession<DocumentFile>) -> Result<()> {
    for slot in RuleSlot::ALL {
        let current = session.input().rule(slot).to_string();
        let text: String = Input::new()
            .with_prompt(format!("Rule {}", slot.index()))
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| RuleCheckError::Prompt(e.to_string()))?;
        session.set_rule(slot, text.trim());
    }
    Ok(())
}

/// 引数のルールをセッションに設定
pub fn apply_rules(session: &mut CheckSession<DocumentFile>, rules: [&str; 3]) {
    for (slot, text) in RuleSlot::ALL.into_iter().zip(rules) {
        session.set_rule(slot, text);
    }
}

/// PDFファイルを読み込んでセッションに設定
pub fn load_document(
    session: &mut CheckSession<DocumentFile>,
    path: &std::path::Path,
) -> Result<()> {
    if !path.is_file() {
        return Err(RuleCheckError::FileNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "document.pdf".to_string());

    session.set_file(Some(DocumentFile::new(name, bytes)));
    Ok(())
}
