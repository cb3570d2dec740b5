//! navigator.clipboard への書き込み

use super::js_error_message;
use rule_check_common::CheckError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub async fn write_text(text: &str) -> Result<(), CheckError> {
    write_text_js(text)
        .await
        .map_err(|e| CheckError::clipboard(js_error_message(&e)))
}

async fn write_text_js(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let navigator = window.navigator();

    // 非セキュアコンテキストでは navigator.clipboard が存在しない
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(JsValue::from_str("clipboard API is not available"));
    }

    let write: js_sys::Function =
        js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    let promise: js_sys::Promise = write.call1(&clipboard, &JsValue::from_str(text))?.dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}
