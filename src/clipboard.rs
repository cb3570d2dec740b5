//! クリップボード連携
//!
//! OS標準のコマンド（pbcopy / clip / wl-copy / xclip）に標準入力で渡す。
//! 書き込み途中で失敗した場合はプロセスを終了させ、部分的な内容を残さない。

use rule_check_common::{CheckError, CheckSession, CopyTicket, DocumentFile};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// テキストの書き込み先
#[allow(async_fn_in_trait)]
pub trait ClipboardWriter {
    async fn write_text(&self, text: &str) -> rule_check_common::Result<()>;
}

/// OSのクリップボードコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemClipboard {
    program: String,
    args: Vec<String>,
}

impl SystemClipboard {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// 実行環境に合ったコマンドを選ぶ
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", &[])
        } else if cfg!(target_os = "windows") {
            Self::new("clip", &[])
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Self::new("wl-copy", &[])
        } else {
            Self::new("xclip", &["-selection", "clipboard"])
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: &str) -> rule_check_common::Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| CheckError::clipboard(format!("`{}` を起動できません: {}", self.program, e)))?;

        let Some(mut stdin) = child.stdin.take() else {
            let _ = child.kill().await;
            return Err(CheckError::clipboard("標準入力を開けません"));
        };

        if let Err(e) = stdin.write_all(text.as_bytes()).await {
            // stdinを閉じる前に止めて、途中までの内容を確定させない
            let _ = child.kill().await;
            return Err(CheckError::clipboard(e.to_string()));
        }
        drop(stdin);

        let status = child
            .wait()
            .await
            .map_err(|e| CheckError::clipboard(e.to_string()))?;
        if !status.success() {
            return Err(CheckError::clipboard(format!(
                "`{}` が異常終了しました ({})",
                self.program, status
            )));
        }
        Ok(())
    }
}

/// 現在の結果をコピーし、セッションの表示状態を更新する
///
/// - 結果がなければ何もしない（`Ok(None)`）
/// - 失敗はセッションのエラー表示にも反映される
pub async fn copy_result<C: ClipboardWriter>(
    session: &mut CheckSession<DocumentFile>,
    clipboard: &C,
) -> rule_check_common::Result<Option<CopyTicket>> {
    let Some(pending) = session.clipboard_text() else {
        return Ok(None);
    };

    let written = match pending.text {
        Ok(text) => clipboard.write_text(&text).await,
        Err(err) => Err(err),
    };

    match written {
        Ok(()) => Ok(session.copy_succeeded(pending.request)),
        Err(err) => {
            session.copy_failed(pending.request, &err);
            Err(err)
        }
    }
}
