//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`, with an in-memory fallback
//! for browsers that refuse to hand it out (private mode, sandboxed frames).

use wasm_bindgen::JsValue;

use feedpulse_core::error::{FeedPulseError, Result};
use feedpulse_core::{KeyValueStore, MemoryStore};

fn js_error(context: &str, e: JsValue) -> FeedPulseError {
    FeedPulseError::Storage(format!("{}: {:?}", context, e))
}

/// `window.localStorage`, looked up on every call
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Result<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| FeedPulseError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| js_error("localStorage denied", e))?
            .ok_or_else(|| FeedPulseError::Storage("localStorage unavailable".to_string()))
    }

    pub fn available() -> bool {
        Self::local().is_ok()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::local()?
            .get_item(key)
            .map_err(|e| js_error("getItem", e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        Self::local()?
            .set_item(key, value)
            .map_err(|e| js_error("setItem", e))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        Self::local()?
            .remove_item(key)
            .map_err(|e| js_error("removeItem", e))
    }
}

/// Whichever medium the browser allowed
pub enum AppStorage {
    Browser(BrowserStorage),
    Memory(MemoryStore),
}

impl AppStorage {
    pub fn open() -> Self {
        if BrowserStorage::available() {
            AppStorage::Browser(BrowserStorage)
        } else {
            log::warn!("localStorage unavailable, changes will not survive a reload");
            AppStorage::Memory(MemoryStore::new())
        }
    }
}

impl KeyValueStore for AppStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            AppStorage::Browser(storage) => storage.get(key),
            AppStorage::Memory(storage) => storage.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            AppStorage::Browser(storage) => storage.set(key, value),
            AppStorage::Memory(storage) => storage.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match self {
            AppStorage::Browser(storage) => storage.remove(key),
            AppStorage::Memory(storage) => storage.remove(key),
        }
    }
}
