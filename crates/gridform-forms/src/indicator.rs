//! Transient success indicator.
//!
//! [`SuccessIndicator`] becomes visible when a submission succeeds and hides
//! itself after a fixed delay. The delay runs as a tokio task owned by the
//! indicator: showing it again restarts the delay, and [`dismiss`] or dropping
//! the indicator cancels the pending task.
//!
//! [`dismiss`]: SuccessIndicator::dismiss

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// A self-dismissing success indicator.
#[derive(Debug)]
pub struct SuccessIndicator {
    text: String,
    // 0 when hidden, otherwise the generation of the `show` that revealed it.
    shown: Arc<AtomicU64>,
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

impl SuccessIndicator {
    /// Creates a hidden indicator with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: Arc::new(AtomicU64::new(0)),
            generation: 0,
            timer: None,
        }
    }

    /// Returns the indicator text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` while the indicator is shown.
    pub fn is_visible(&self) -> bool {
        self.shown.load(Ordering::Acquire) != 0
    }

    /// Shows the indicator and schedules it to hide after `duration`.
    ///
    /// A pending hide from an earlier call is cancelled first. Outside a tokio
    /// runtime nothing can be scheduled, and the indicator stays visible until
    /// [`dismiss`](Self::dismiss) is called.
    pub fn show(&mut self, duration: Duration) {
        self.cancel_timer();
        self.generation += 1;
        let generation = self.generation;
        self.shown.store(generation, Ordering::Release);

        match Handle::try_current() {
            Ok(handle) => {
                let shown = Arc::clone(&self.shown);
                self.timer = Some(handle.spawn(async move {
                    tokio::time::sleep(duration).await;
                    // Only hide if no later `show` took over.
                    let _ = shown.compare_exchange(generation, 0, Ordering::AcqRel, Ordering::Acquire);
                }));
            }
            Err(_) => {
                tracing::warn!("no tokio runtime; success indicator will not auto-dismiss");
            }
        }
    }

    /// Hides the indicator now and cancels any pending hide.
    pub fn dismiss(&mut self) {
        self.cancel_timer();
        self.shown.store(0, Ordering::Release);
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for SuccessIndicator {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
