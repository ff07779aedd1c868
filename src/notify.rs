//! Toast Notifier
//!
//! Turns core notifications into toasts that dismiss themselves.

use std::time::Duration;

use leptos::task::spawn_local;

use feedpulse_core::{Notification, Notifier};

use crate::store::{store_dismiss_toast, store_push_toast, AppStore};

#[derive(Clone, Copy)]
pub struct ToastNotifier {
    store: AppStore,
    timeout: Duration,
}

impl ToastNotifier {
    pub fn new(store: AppStore, timeout: Duration) -> Self {
        Self { store, timeout }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        let id = store_push_toast(&self.store, notification);
        let store = self.store;
        let timeout = self.timeout;
        spawn_local(async move {
            gloo_timers::future::sleep(timeout).await;
            store_dismiss_toast(&store, id);
        });
    }
}
