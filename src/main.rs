//! FeedPulse Frontend Entry Point

mod app;
mod components;
mod context;
mod logging;
mod notify;
mod storage;
mod store;
mod theme;
mod timers;

use app::{load_config, App};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = load_config();
    logging::init(config.log_capacity);
    mount_to_body(move || view! { <App config=config /> });
}
