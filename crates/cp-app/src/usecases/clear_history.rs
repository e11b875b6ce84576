use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use cp_core::clipboard::History;
use cp_core::ports::PasteboardPort;

use super::PasteboardPoller;

/// Clear the pasteboard and every unpinned history entry.
pub struct ClearHistoryUseCase {
    pasteboard: Arc<dyn PasteboardPort>,
}

impl ClearHistoryUseCase {
    pub fn new(pasteboard: Arc<dyn PasteboardPort>) -> Self {
        Self { pasteboard }
    }

    pub fn execute(&self, history: &mut History, poller: &mut PasteboardPoller) -> Result<()> {
        self.pasteboard
            .clear_contents()
            .context("clear pasteboard")?;
        poller.resync()?;

        let before = history.len();
        history.clear();
        info!(
            removed = before - history.len(),
            kept_pinned = history.len(),
            "cleared history"
        );
        Ok(())
    }
}
