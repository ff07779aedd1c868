//! Console Logging
//!
//! Installs the rolling logger with a sink that writes to the browser console.

use log::Level;
use rolling_logger::{LogLine, Sink};
use wasm_bindgen::JsValue;

pub fn init(capacity: usize) {
    let sink: Sink = Box::new(|line: &LogLine| {
        let text = JsValue::from_str(&line.to_string());
        match line.level {
            Level::Error => web_sys::console::error_1(&text),
            Level::Warn => web_sys::console::warn_1(&text),
            Level::Info => web_sys::console::info_1(&text),
            Level::Debug | Level::Trace => web_sys::console::log_1(&text),
        }
    });

    if let Err(e) = rolling_logger::init_logger("FeedPulse", capacity, sink) {
        web_sys::console::warn_1(&format!("[FeedPulse] {}", e).into());
    }
}
