//! 「Copied!」トースト

use leptos::prelude::*;
use crate::app::SessionSignal;

#[component]
pub fn CopiedToast(session: SessionSignal) -> impl IntoView {
    view! {
        <Show when=move || session.with(|s| s.is_copied())>
            <div class="toast">"Copied!"</div>
        </Show>
    }
}
