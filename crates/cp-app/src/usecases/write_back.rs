use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, warn};

use cp_core::clipboard::{ContentMap, Entry};
use cp_core::ports::PasteboardPort;

use super::PasteboardPoller;

/// Put a history entry back on the pasteboard.
///
/// Once the clear succeeds the poller's baseline is moved past it, so the
/// written data is not captured again as a new entry. A failed clear leaves
/// the baseline untouched.
pub struct WriteBackUseCase {
    pasteboard: Arc<dyn PasteboardPort>,
}

impl WriteBackUseCase {
    pub fn new(pasteboard: Arc<dyn PasteboardPort>) -> Self {
        Self { pasteboard }
    }

    /// Write `entry`, or exactly the representations of `overrides` when it
    /// is non-empty. Returns how many representations were written.
    ///
    /// Individual representations are best-effort: a failing kind is logged
    /// and skipped.
    pub fn execute(
        &self,
        entry: &Entry,
        overrides: &ContentMap,
        poller: &mut PasteboardPoller,
    ) -> Result<usize> {
        let source = if overrides.is_empty() {
            &entry.content
        } else {
            overrides
        };

        self.pasteboard
            .clear_contents()
            .context("clear pasteboard before write-back")?;
        poller.expect_self_write();

        let mut written = 0;
        for (kind, bytes) in source.iter() {
            match self.pasteboard.write(kind, bytes) {
                Ok(()) => written += 1,
                Err(err) => warn!(%kind, error = %err, "failed to write representation"),
            }
        }

        debug!(
            alias = %entry.alias,
            written,
            overridden = !overrides.is_empty(),
            "wrote entry back to pasteboard"
        );
        Ok(written)
    }
}
