//! 解析サービスへの送信（fetch + FormData）

use super::js_error_message;
use crate::document::PdfFile;
use rule_check_common::{
    analyze_url, interpret_response, AnalysisResult, CheckError, FormPart, Submission,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

/// 1回だけ送信し、応答を解析結果またはエラーに変換する
pub async fn analyze(
    base_url: &str,
    submission: &Submission<PdfFile>,
) -> Result<AnalysisResult, CheckError> {
    let (status, body) = post_form(&analyze_url(base_url), submission)
        .await
        .map_err(|e| CheckError::transport(js_error_message(&e)))?;
    interpret_response(status, &body)
}

async fn post_form(url: &str, submission: &Submission<PdfFile>) -> Result<(u16, String), JsValue> {
    let form = build_form_data(submission)?;

    // Content-Typeはブラウザがboundary付きで設定する
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let status = resp.status();
    let body = JsFuture::from(resp.text()?)
        .await?
        .as_string()
        .unwrap_or_default();
    Ok((status, body))
}

fn build_form_data(submission: &Submission<PdfFile>) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    for part in submission.form_parts() {
        match part {
            FormPart::File { name, file } => {
                form.append_with_blob_and_filename(name, file.file(), &file.file().name())?
            }
            FormPart::Text { name, value } => form.append_with_str(name, value)?,
        }
    }
    Ok(form)
}
