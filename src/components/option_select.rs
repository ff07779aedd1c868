//! Option Select Component
//!
//! Labelled drop-down over a fixed value set.

use leptos::prelude::*;

/// `(value, label)` pairs for each member of a value set
pub fn options_of<T>(
    all: &[T],
    value: fn(&T) -> &'static str,
    label: fn(&T) -> &'static str,
) -> Vec<(&'static str, &'static str)> {
    all.iter().map(|item| (value(item), label(item))).collect()
}

#[component]
pub fn OptionSelect(
    #[prop(into)] label: String,
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select class="field-select" on:change=move |ev| on_change.run(event_target_value(&ev))>
                {options.into_iter().map(|(val, text)| {
                    view! {
                        <option value=val prop:selected=move || value.get() == val>
                            {text}
                        </option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}
