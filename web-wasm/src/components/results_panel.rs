//! 結果パネル

use leptos::prelude::*;
use rule_check_common::{BodyView, ResultView, VerdictRow};
use crate::app::SessionSignal;

#[component]
pub fn ResultsPanel(session: SessionSignal) -> impl IntoView {
    let view_model = move || session.with(|s| s.result().map(ResultView::render));

    view! {
        <div class="card results">
            <h2>"Results"</h2>
            {move || match view_model() {
                Some(result) => render_result(result).into_any(),
                None => view! {
                    <p class="text-muted empty-state">
                        "No results yet. Upload a PDF and enter rules, then click Check Document."
                    </p>
                }.into_any(),
            }}
        </div>
    }
}

fn render_result(result: ResultView) -> impl IntoView {
    let filename = result.filename.clone();
    let body = match result.body {
        BodyView::Table(rows) => view! {
            <table class="results-table">
                <thead>
                    <tr>
                        <th>"Rule"</th>
                        <th>"Status"</th>
                        <th>"Evidence"</th>
                        <th>"Reasoning"</th>
                        <th>"Confidence"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(render_row).collect_view()}
                </tbody>
            </table>
        }.into_any(),
        BodyView::Raw(text) => view! { <pre class="raw-result">{text}</pre> }.into_any(),
    };

    view! {
        <div class="result-meta">
            <span>"Pages: "<strong>{result.pages_label}</strong></span>
            <span>"Model: "<strong>{result.model_label}</strong></span>
            {filename.map(|name| view! { <span class="text-muted">{name}</span> })}
        </div>
        {body}
    }
}

fn render_row(row: VerdictRow) -> impl IntoView {
    let bar_style = row.bar_style();
    let badge_class = format!("status-badge {}", row.category.css_class());

    view! {
        <tr>
            <td>
                <div class="text-muted">{row.index_label}</div>
                <div>{row.rule}</div>
            </td>
            <td><span class=badge_class>{row.status_label}</span></td>
            <td class="evidence">{row.evidence}</td>
            <td class="reasoning">{row.reasoning}</td>
            <td>
                <div>{row.confidence_label}</div>
                <div class="confidence-track">
                    <div class="confidence-bar" style=bar_style></div>
                </div>
            </td>
        </tr>
    }
}
