//! ブラウザAPI連携

pub mod analyze;
pub mod clipboard;

use wasm_bindgen::{JsCast, JsValue};

/// JS例外から表示用メッセージを取り出す
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
