//! Application Context
//!
//! The controller, held once for the whole app and shared via the Leptos
//! Context API.

use leptos::prelude::*;

use feedpulse_core::transfer::SimulatedTransfer;
use feedpulse_core::FeedPulse;

use crate::notify::ToastNotifier;
use crate::storage::AppStorage;
use crate::store::{store_sync, AppStore};
use crate::timers::GlooSleeper;

/// The application object as the browser runs it
pub type Controller = FeedPulse<AppStorage, ToastNotifier>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    app: StoredValue<Controller>,
    store: AppStore,
}

impl AppContext {
    pub fn new(app: Controller, store: AppStore) -> Self {
        Self {
            app: StoredValue::new(app),
            store,
        }
    }

    pub fn store(&self) -> AppStore {
        self.store
    }

    /// Read from the controller
    pub fn with<U>(&self, f: impl FnOnce(&Controller) -> U) -> U {
        self.app.with_value(f)
    }

    /// Read from the controller; `None` once the app is disposed
    pub fn try_with<U>(&self, f: impl FnOnce(&Controller) -> U) -> Option<U> {
        self.app.try_with_value(f)
    }

    /// Mutate the controller, then refresh the store
    pub fn update<U>(&self, f: impl FnOnce(&mut Controller) -> U) -> Option<U> {
        let out = self.app.try_update_value(f);
        self.sync();
        out
    }

    /// Push controller state into the store
    pub fn sync(&self) {
        let store = self.store;
        self.app.try_with_value(|app| store_sync(&store, app));
    }

    /// Write everything to storage; a no-op once the app is disposed
    pub fn flush(&self) {
        if let Some(Err(e)) = self.app.try_update_value(|app| app.flush()) {
            log::error!("Flush failed: {}", e);
        }
    }

    /// Import/export service with the configured latency
    pub fn transfer(&self) -> SimulatedTransfer<GlooSleeper> {
        let delay = self.with(|app| app.config().transfer_delay());
        SimulatedTransfer::new(GlooSleeper, delay)
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use feedpulse_core::{FeedPulseConfig, MemoryStore};
    use reactive_stores::Store;

    use crate::store::AppState;

    #[test]
    fn test_reads_after_dispose_are_skipped() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::new());
            let app = FeedPulse::init(
                AppStorage::Memory(MemoryStore::new()),
                ToastNotifier::new(store, Duration::ZERO),
                FeedPulseConfig::default(),
            );
            let ctx = AppContext::new(app, store);
            assert_eq!(ctx.try_with(|app| app.items().len()), Some(3));

            ctx.app.dispose();
            assert_eq!(ctx.try_with(|app| app.items().len()), None);
            ctx.sync();
            ctx.flush();
        });
    }
}
