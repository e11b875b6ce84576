//! System pasteboard port.
//!
//! Representations are addressed by [`ContentKind`]. The change counter is
//! the only signal the poller uses to tell new content apart from content it
//! has already seen, including its own writes.

use crate::clipboard::{ChangeCount, ContentKind};
use crate::ports::errors::PasteboardError;

pub trait PasteboardPort: Send + Sync {
    /// Current value of the OS change counter.
    fn change_count(&self) -> Result<ChangeCount, PasteboardError>;

    /// Raw bytes of one representation. `Ok(None)` when the pasteboard does
    /// not currently hold that kind.
    fn read(&self, kind: ContentKind) -> Result<Option<Vec<u8>>, PasteboardError>;

    /// Remove every representation. Bumps the OS change counter by one.
    fn clear_contents(&self) -> Result<(), PasteboardError>;

    /// Add one representation to the current pasteboard contents.
    fn write(&self, kind: ContentKind, bytes: &[u8]) -> Result<(), PasteboardError>;
}
