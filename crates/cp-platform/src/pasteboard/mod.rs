mod common;
#[cfg(target_os = "macos")]
mod macos;

pub use common::ClipboardRsPasteboard;
#[cfg(target_os = "macos")]
pub use macos::MacPasteboard;

// macOS exposes a native change counter and arbitrary UTIs.
#[cfg(target_os = "macos")]
pub use macos::MacPasteboard as SystemPasteboard;

#[cfg(not(target_os = "macos"))]
pub use common::ClipboardRsPasteboard as SystemPasteboard;

use cp_core::ports::PasteboardPort;
use std::sync::Arc;

/// The general pasteboard adapter for the running platform.
pub fn system_pasteboard() -> anyhow::Result<Arc<dyn PasteboardPort>> {
    #[cfg(target_os = "macos")]
    {
        Ok(Arc::new(MacPasteboard::new()))
    }
    #[cfg(not(target_os = "macos"))]
    {
        Ok(Arc::new(ClipboardRsPasteboard::new()?))
    }
}
