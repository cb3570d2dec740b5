//! ルール入力欄

use leptos::prelude::*;
use rule_check_common::RuleSlot;
use crate::app::SessionSignal;

const PLACEHOLDERS: [&str; 3] = [
    "Rule 1 — e.g. Document must contain a purpose section",
    "Rule 2 — e.g. Must mention at least one date",
    "Rule 3 — e.g. Define at least one term",
];

#[component]
pub fn RuleInputs(session: SessionSignal) -> impl IntoView {
    let inputs = RuleSlot::ALL
        .into_iter()
        .zip(PLACEHOLDERS)
        .map(|(slot, placeholder)| {
            view! {
                <input
                    type="text"
                    class="rule-input"
                    placeholder=placeholder
                    prop:value=move || session.with(|s| s.input().rule(slot).to_string())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        session.update(|s| s.set_rule(slot, text));
                    }
                />
            }
        })
        .collect_view();

    view! {
        <div class="form-group">
            <label>"Rules (custom)"</label>
            {inputs}
        </div>
    }
}
