//! チェックセッション
//!
//! 画面状態を1つの構造体にまとめ、全ての遷移をメソッドとして定義する。
//!
//! 送信は2段階:
//! 1. `begin_submit` で検証・状態遷移・チケット発行
//! 2. 通信完了後に `complete_submit` で結果を反映
//!
//! 最新のチケット以外（リセット後や再送信後に届いた応答）は破棄する。

use crate::error::{CheckError, Result};
use crate::input::{DocumentHandle, InputController, RuleSlot, Submission};
use crate::types::AnalysisResult;
use std::time::Duration;

/// 「Copied!」表示を自動で消すまでの時間
pub const COPIED_TOAST_DURATION: Duration = Duration::from_millis(2000);

/// リクエスト状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl RequestState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::InFlight => "in-flight",
            RequestState::Succeeded => "succeeded",
            RequestState::Failed => "failed",
        }
    }
}

/// 送信ごとの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

impl SubmissionTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// 送信待ちのリクエスト
#[derive(Debug, Clone)]
pub struct PendingSubmission<F> {
    pub ticket: SubmissionTicket,
    pub submission: Submission<F>,
}

/// 応答の反映結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    /// リセットまたは新しい送信により破棄
    Superseded,
}

/// コピー要求。書き込み開始時点の結果の世代を持つ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyRequest(u64);

/// 書き込み待ちのコピー
#[derive(Debug, Clone)]
pub struct PendingCopy {
    pub request: CopyRequest,
    pub text: Result<String>,
}

/// 「Copied!」表示のタイマー識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTicket(u64);

/// 「Copied!」表示
///
/// タイマーを実際に止める代わりに世代番号で無効化する。
/// 状態が変わるたびに世代を進め、古いタイマーの発火は無視される。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopiedIndicator {
    live: bool,
    generation: u64,
}

impl CopiedIndicator {
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// 表示を開始（既存のタイマーは無効になる）
    pub fn arm(&mut self) -> CopyTicket {
        self.generation += 1;
        self.live = true;
        CopyTicket(self.generation)
    }

    /// タイマー発火。世代が一致するときだけ表示を消す
    pub fn expire(&mut self, ticket: CopyTicket) -> bool {
        if self.live && ticket.0 == self.generation {
            self.live = false;
            true
        } else {
            false
        }
    }

    /// 即座に消す
    pub fn clear(&mut self) {
        self.generation += 1;
        self.live = false;
    }
}

/// チェックセッション
#[derive(Debug, Clone)]
pub struct CheckSession<F> {
    input: InputController<F>,
    state: RequestState,
    result: Option<AnalysisResult>,
    error: Option<String>,
    copied: CopiedIndicator,
    latest_submission: u64,
    /// 結果の表示が変わるたびに進む（リセット・応答反映・失敗）
    result_generation: u64,
}

impl<F> Default for CheckSession<F> {
    fn default() -> Self {
        Self {
            input: InputController::default(),
            state: RequestState::Idle,
            result: None,
            error: None,
            copied: CopiedIndicator::default(),
            latest_submission: 0,
            result_generation: 0,
        }
    }
}

impl<F: DocumentHandle> CheckSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &InputController<F> {
        &self.input
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_copied(&self) -> bool {
        self.copied.is_live()
    }

    /// 送信ボタンを押せるか（送信中は無効）
    pub fn is_submit_enabled(&self) -> bool {
        self.state != RequestState::InFlight
    }

    /// ファイルを設定（エラー表示は消える）
    pub fn set_file(&mut self, file: Option<F>) {
        self.input.set_file(file);
        self.error = None;
    }

    pub fn remove_file(&mut self) {
        self.input.set_file(None);
    }

    /// ドロップされたファイルを受け取る（先頭のみ）
    pub fn accept_dropped<I>(&mut self, files: I) -> bool
    where
        I: IntoIterator<Item = F>,
    {
        let accepted = self.input.accept_dropped(files);
        if accepted {
            self.error = None;
        }
        accepted
    }

    /// ファイル選択ダイアログの結果を受け取る（キャンセルは無視）
    pub fn accept_picked(&mut self, picked: Option<F>) -> bool {
        let accepted = self.input.accept_picked(picked);
        if accepted {
            self.error = None;
        }
        accepted
    }

    pub fn set_rule(&mut self, slot: RuleSlot, text: impl Into<String>) {
        self.input.set_rule(slot, text);
    }

    /// 送信開始
    ///
    /// ファイル未設定なら通信せずに失敗し、エラーを表示する。
    pub fn begin_submit(&mut self) -> Result<PendingSubmission<F>> {
        self.latest_submission += 1;

        match self.input.validate_for_submit() {
            Ok(submission) => {
                self.error = None;
                self.state = RequestState::InFlight;
                let ticket = SubmissionTicket(self.latest_submission);
                tracing::debug!(ticket = ticket.id(), "submission started");
                Ok(PendingSubmission { ticket, submission })
            }
            Err(err) => {
                tracing::debug!(error = %err, "submission rejected before sending");
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// 通信完了。最新の送信の応答だけを反映する
    pub fn complete_submit(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<AnalysisResult>,
    ) -> Settlement {
        if ticket.0 != self.latest_submission || self.state != RequestState::InFlight {
            tracing::debug!(
                ticket = ticket.id(),
                latest = self.latest_submission,
                "discarding superseded response"
            );
            return Settlement::Superseded;
        }

        match outcome {
            Ok(result) => {
                tracing::debug!(ticket = ticket.id(), "submission succeeded");
                self.result = Some(result);
                self.error = None;
                self.copied.clear();
                self.result_generation += 1;
                self.state = RequestState::Succeeded;
            }
            Err(err) => {
                tracing::debug!(ticket = ticket.id(), error = %err, "submission failed");
                self.fail(&err);
            }
        }
        Settlement::Applied
    }

    fn fail(&mut self, err: &CheckError) {
        self.result = None;
        self.error = Some(err.user_message());
        self.copied.clear();
        self.result_generation += 1;
        self.state = RequestState::Failed;
    }

    /// 入力・結果・エラー・「Copied!」表示を一括でクリア
    ///
    /// 送信中の応答は以後破棄される。
    pub fn reset(&mut self) {
        self.input.clear();
        self.result = None;
        self.error = None;
        self.copied.clear();
        self.state = RequestState::Idle;
        self.latest_submission += 1;
        self.result_generation += 1;
    }

    /// コピーを開始する（結果がなければNone＝何もしない）
    ///
    /// 書き込み完了時は返り値の `request` を `copy_succeeded` / `copy_failed` に渡す。
    pub fn clipboard_text(&self) -> Option<PendingCopy> {
        let result = self.result.as_ref()?;
        Some(PendingCopy {
            request: CopyRequest(self.result_generation),
            text: crate::presenter::serialize_for_clipboard(result),
        })
    }

    fn is_current_copy(&self, request: CopyRequest) -> bool {
        request.0 == self.result_generation && self.result.is_some()
    }

    /// コピー成功。タイマーには返り値のチケットを渡す
    ///
    /// 書き込み中に結果が変わっていれば何もしない。
    pub fn copy_succeeded(&mut self, request: CopyRequest) -> Option<CopyTicket> {
        if !self.is_current_copy(request) {
            tracing::debug!("discarding copy completion for a stale result");
            return None;
        }
        Some(self.copied.arm())
    }

    /// コピー失敗をエラー表示にする（表示中の結果は残す）
    ///
    /// 書き込み中に結果が変わっていれば何もしない。
    pub fn copy_failed(&mut self, request: CopyRequest, err: &CheckError) -> bool {
        if !self.is_current_copy(request) {
            tracing::debug!(error = %err, "discarding copy failure for a stale result");
            return false;
        }
        tracing::debug!(error = %err, "copy failed");
        self.copied.clear();
        self.error = Some(err.user_message());
        true
    }

    /// 「Copied!」タイマー発火
    pub fn expire_copied(&mut self, ticket: CopyTicket) -> bool {
        self.copied.expire(ticket)
    }
}
