//! アップロードエリアコンポーネント

use leptos::html::Input;
use leptos::prelude::*;
use rule_check_common::DOCUMENT_MIME;
use web_sys::{DragEvent, Event, HtmlInputElement, MouseEvent};
use wasm_bindgen::JsCast;
use crate::app::SessionSignal;
use crate::document::{files_in, PdfFile};

#[component]
pub fn UploadArea(session: SessionSignal) -> impl IntoView {
    let (is_dragover, set_is_dragover) = signal(false);
    let file_input: NodeRef<Input> = NodeRef::new();

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        let files = ev.data_transfer().map(|dt| files_in(dt.files())).unwrap_or_default();
        session.update(|s| {
            s.accept_dropped(files);
        });
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    // 隠しinputでファイル選択ダイアログを開く
    let on_click = move |_: MouseEvent| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_change = move |ev: Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let picked: Option<PdfFile> = files_in(input.files()).into_iter().next();
        session.update(|s| {
            s.accept_picked(picked);
        });
        // 同じファイルを選び直しても change が発火するようにする
        input.set_value("");
    };

    let on_remove = move |ev: MouseEvent| {
        ev.stop_propagation();
        session.update(|s| s.remove_file());
    };

    let file_name = move || {
        session.with(|s| s.input().file().map(|f| f.file().name()))
    };

    view! {
        <div class="form-group">
            <label>"Upload PDF (2–10 pages)"</label>
            <div
                class=move || if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:click=on_click
            >
                <input
                    type="file"
                    accept=DOCUMENT_MIME
                    style="display: none"
                    node_ref=file_input
                    on:change=on_change
                />
                {move || match file_name() {
                    Some(name) => view! {
                        <div class="upload-file">
                            <span class="file-name">{name}</span>
                            <button type="button" class="btn btn-link" on:click=on_remove>
                                "Remove"
                            </button>
                        </div>
                    }.into_any(),
                    None => view! {
                        <div class="upload-placeholder">
                            <p>"Drag & drop your PDF here"</p>
                            <p class="text-muted">"or click to browse"</p>
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
