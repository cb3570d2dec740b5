//! 解析サービスとの通信
//!
//! 送信は `CheckSession` の2段階APIで行う。
//! 通信手段は `AnalysisTransport` で差し替え可能（テストではモックを使う）。

mod http;

pub use http::HttpTransport;

use rule_check_common::{
    AnalysisResult, CheckSession, DocumentFile, Settlement, Submission,
};

/// 解析リクエストの送信手段
#[allow(async_fn_in_trait)]
pub trait AnalysisTransport {
    /// 1回だけ送信する（リトライしない）
    async fn analyze(
        &self,
        submission: &Submission<DocumentFile>,
    ) -> rule_check_common::Result<AnalysisResult>;
}

/// 現在の入力を送信し、応答をセッションに反映する
///
/// ファイル未設定なら通信せずにエラーを返す。
pub async fn submit<T: AnalysisTransport>(
    session: &mut CheckSession<DocumentFile>,
    transport: &T,
) -> rule_check_common::Result<Settlement> {
    let pending = session.begin_submit()?;
    tracing::info!(
        file = %pending.submission.file.name,
        bytes = pending.submission.file.bytes.len(),
        "sending document for analysis"
    );

    let outcome = transport.analyze(&pending.submission).await;
    if let Err(err) = &outcome {
        tracing::warn!(error = %err, "analysis request failed");
    }

    Ok(session.complete_submit(pending.ticket, outcome))
}
