//! Copy acknowledgement state

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::warn;

use super::Clipboard;
use crate::error::ClipboardError;

pub const COPIED_TOOLTIP: &str = "Copied!";
pub const COPY_TOOLTIP: &str = "Copy to clipboard";

/// `copied` flag owned by a view.
///
/// Every copy sets the flag and schedules its own reset; resets are never
/// cancelled or merged, so the first pending reset clears the flag even if
/// another copy happened since. Reset timers only hold a weak reference and
/// do nothing once the owner is dropped.
#[derive(Debug)]
pub struct CopyState {
    copied: Arc<AtomicBool>,
    reset_after: Duration,
}

impl CopyState {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            copied: Arc::new(AtomicBool::new(false)),
            reset_after,
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied.load(Ordering::SeqCst)
    }

    pub fn tooltip(&self) -> &'static str {
        if self.is_copied() {
            COPIED_TOOLTIP
        } else {
            COPY_TOOLTIP
        }
    }

    /// Set the flag and schedule its reset. Requires a tokio runtime.
    pub fn mark_copied(&self) -> JoinHandle<()> {
        self.copied.store(true, Ordering::SeqCst);

        let flag = Arc::downgrade(&self.copied);
        let delay = self.reset_after;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(flag) = flag.upgrade() {
                flag.store(false, Ordering::SeqCst);
            }
        })
    }

    /// Write `text` in the background and acknowledge immediately.
    ///
    /// The flag does not wait for the write; failures are only logged. The
    /// returned handle resolves with the write result for callers that need it.
    pub fn copy(
        &self,
        clipboard: Arc<dyn Clipboard>,
        text: String,
    ) -> JoinHandle<Result<(), ClipboardError>> {
        let write = tokio::spawn(async move {
            let result = clipboard.write_text(&text).await;
            if let Err(e) = &result {
                warn!(error = %e, "Clipboard write failed");
            }
            result
        });

        self.mark_copied();
        write
    }
}
