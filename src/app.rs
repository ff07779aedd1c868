//! FeedPulse Frontend App
//!
//! Builds the controller, provides it to the tree, and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use feedpulse_core::{FeedPulse, FeedPulseConfig};

use crate::components::{
    ActivityLog, DataTools, FeedbackFormDialog, FeedbackInbox, QuickTips, StatsHeader, ThemeToggle, ToastHost,
};
use crate::context::AppContext;
use crate::notify::ToastNotifier;
use crate::storage::AppStorage;
use crate::store::{AppState, AppStateStoreFields};
use crate::theme::{apply_theme, prefers_dark};

/// Element id of an optional inline JSON config override
pub const CONFIG_ELEMENT_ID: &str = "feedpulse-config";

/// Defaults, overridden by `<script id="feedpulse-config" type="application/json">`
pub fn load_config() -> FeedPulseConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => FeedPulseConfig::from_json(&raw).unwrap_or_else(|e| {
            web_sys::console::warn_1(&format!("[FeedPulse] Bad config, using defaults: {}", e).into());
            FeedPulseConfig::default()
        }),
        _ => FeedPulseConfig::default(),
    }
}

#[component]
pub fn App(config: FeedPulseConfig) -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let notifier = ToastNotifier::new(store, config.toast_timeout());
    let app = FeedPulse::init(AppStorage::open(), notifier, config);
    let dark = app.theme().map(|theme| theme.is_dark()).unwrap_or_else(prefers_dark);

    let ctx = AppContext::new(app, store);
    provide_context(ctx);
    store.dark().set(dark);
    ctx.sync();

    Effect::new(move |_| apply_theme(store.dark().get()));

    on_cleanup(move || ctx.flush());

    view! {
        <div class="app-layout">
            <header class="app-header">
                <div class="brand">
                    <h1>"FeedPulse"</h1>
                    <p class="tagline">"Client feedback, sorted."</p>
                </div>
                <ThemeToggle />
            </header>

            <StatsHeader />

            <div class="app-body">
                <main class="main-content">
                    <FeedbackInbox />
                </main>
                <div class="sidebar">
                    <DataTools />
                    <QuickTips />
                    <ActivityLog />
                </div>
            </div>

            <footer class="app-footer">
                {move || format!("{} feedback items stored in this browser", store.stats().get().total)}
            </footer>

            <FeedbackFormDialog />
            <ToastHost />
        </div>
    }
}
