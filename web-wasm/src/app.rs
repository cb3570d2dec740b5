//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use rule_check_common::{CheckSession, CopyTicket, COPIED_TOAST_DURATION};
use web_sys::SubmitEvent;
use crate::api::{analyze, clipboard};
use crate::components::{
    header::Header,
    upload_area::UploadArea,
    rule_inputs::RuleInputs,
    results_panel::ResultsPanel,
    copied_toast::CopiedToast,
};
use crate::config::api_base_url;
use crate::document::PdfFile;

/// アプリケーションの状態（web_sys::File を含むためローカルストレージのシグナル）
pub type SessionSignal = RwSignal<CheckSession<PdfFile>, LocalStorage>;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let session: SessionSignal = RwSignal::new_local(CheckSession::new());

    // 送信ハンドラ
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let pending = match session.try_update(|s| s.begin_submit()) {
            Some(Ok(pending)) => pending,
            // ファイル未選択のエラーはセッションに反映済み
            _ => return,
        };

        spawn_local(async move {
            let outcome = analyze::analyze(api_base_url(), &pending.submission).await;
            if let Err(err) = &outcome {
                web_sys::console::error_1(&err.to_string().into());
            }
            session.try_update(|s| s.complete_submit(pending.ticket, outcome));
        });
    };

    // コピーハンドラ
    let on_copy = move |_| {
        let Some(pending) = session.with_untracked(|s| s.clipboard_text()) else {
            return;
        };
        let request = pending.request;

        spawn_local(async move {
            let written = match pending.text {
                Ok(text) => clipboard::write_text(&text).await,
                Err(err) => Err(err),
            };
            match written {
                Ok(()) => {
                    if let Some(Some(ticket)) = session.try_update(|s| s.copy_succeeded(request)) {
                        schedule_copied_expiry(session, ticket);
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("copy failed: {}", err).into());
                    session.try_update(|s| s.copy_failed(request, &err));
                }
            }
        });
    };

    let on_reset = move |_| session.update(|s| s.reset());

    let is_busy = move || !session.with(|s| s.is_submit_enabled());
    let error_message = move || session.with(|s| s.error().map(str::to_string));

    view! {
        <div class="container">
            <Header />

            <main class="main-grid">
                <form class="card check-form" on:submit=on_submit>
                    <UploadArea session=session />
                    <RuleInputs session=session />

                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary" disabled=is_busy>
                            {move || if is_busy() { "Checking..." } else { "Check Document" }}
                        </button>
                        <button type="button" class="btn btn-secondary" on:click=on_reset>
                            "Reset"
                        </button>
                    </div>

                    {move || error_message().map(|message| view! {
                        <div class="error-message">{message}</div>
                    })}

                    <footer class="text-muted">
                        "Tip: use concise rules. The checker returns evidence, reasoning and a confidence score."
                    </footer>
                </form>

                <section>
                    <ResultsPanel session=session />
                    <div class="result-actions">
                        <button class="btn btn-secondary" on:click=on_copy>
                            "Copy Results"
                        </button>
                    </div>
                    <CopiedToast session=session />
                </section>
            </main>
        </div>
    }
}

/// 一定時間後に「Copied!」を消す。その間に状態が変わっていれば何もしない
fn schedule_copied_expiry(session: SessionSignal, ticket: CopyTicket) {
    let millis = COPIED_TOAST_DURATION.as_millis() as u32;
    gloo::timers::callback::Timeout::new(millis, move || {
        session.try_update(|s| s.expire_copied(ticket));
    })
    .forget();
}
