//! Timer seam for the simulated save - WASM-first

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

/// Waits for a number of milliseconds without blocking the event loop
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep_ms(&self, millis: u32);
}

/// Browser timer backed by `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooSleeper;

#[async_trait(?Send)]
impl Sleeper for GlooSleeper {
    async fn sleep_ms(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}
