//! Theme Toggle Component

use leptos::prelude::*;

use feedpulse_core::Theme;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store();

    let on_toggle = move |_| {
        // What is on screen stands in for a preference never stored
        let shown = Theme::from_dark(store.dark().get_untracked());
        if let Some(next) = ctx.update(|app| app.toggle_theme(shown)) {
            log::debug!("Theme switched to {}", next.as_str());
        }
    };

    view! {
        <button
            class="theme-toggle"
            title=move || if store.dark().get() { "Switch to light mode" } else { "Switch to dark mode" }
            on:click=on_toggle
        >
            {move || if store.dark().get() { "☀" } else { "☾" }}
        </button>
    }
}
