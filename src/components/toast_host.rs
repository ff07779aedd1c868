//! Toast Host Component
//!
//! Stack of notifications, newest on top. Click to dismiss early.

use leptos::prelude::*;

use feedpulse_core::NotificationLevel;

use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields};

pub fn toast_class(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Success => "toast toast-success",
        NotificationLevel::Info => "toast toast-info",
        NotificationLevel::Error => "toast toast-error",
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast_class(toast.level) on:click=move |_| store_dismiss_toast(&store, id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
