//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"PDF Rule Checker"</h1>
            <p class="text-muted">"Fast, visual & explainable document checks"</p>
        </header>
    }
}
