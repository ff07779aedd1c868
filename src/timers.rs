//! Browser Timers
//!
//! `Sleeper` backed by `setTimeout`, for the simulated import/export delay.

use std::time::Duration;

use async_trait::async_trait;

use feedpulse_core::transfer::Sleeper;

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooSleeper;

#[async_trait(?Send)]
impl Sleeper for GlooSleeper {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
