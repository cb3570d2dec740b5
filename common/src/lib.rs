//! PDF Rule Checker Common Library
//!
//! CLIとWeb(WASM)で共有される入力管理・送信状態・結果表示モデル

pub mod error;
pub mod types;
pub mod input;
pub mod request;
pub mod session;
pub mod presenter;

pub use error::{CheckError, Result};
pub use types::{AnalysisResult, ResultBody, ResultMeta, RuleVerdict};
pub use input::{DocumentFile, DocumentHandle, InputController, RuleSlot, Submission, DOCUMENT_MIME};
pub use request::{analyze_url, interpret_response, FormPart, FILE_FIELD, RULE_FIELDS};
pub use session::{
    CheckSession, CopiedIndicator, CopyRequest, CopyTicket, PendingCopy, PendingSubmission, RequestState, Settlement,
    SubmissionTicket, COPIED_TOAST_DURATION,
};
pub use presenter::{serialize_for_clipboard, BodyView, ResultView, StatusCategory, VerdictRow};
