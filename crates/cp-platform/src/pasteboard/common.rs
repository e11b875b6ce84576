//! `clipboard-rs` backed pasteboard for platforms without NSPasteboard.
//!
//! clipboard-rs has no change counter, so one is synthesised: the readable
//! representations are fingerprinted with blake3 and the counter moves
//! whenever the fingerprint does. Writes made through this adapter are
//! absorbed into the fingerprint so they only count once, on clear.

use anyhow::anyhow;
use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat, RustImageData};
use cp_core::clipboard::{ChangeCount, ContentKind};
use cp_core::ports::{PasteboardError, PasteboardPort};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, debug_span, trace};

type ClipboardResult<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

struct State {
    ctx: ClipboardContext,
    fingerprint: blake3::Hash,
    counter: i64,
}

pub struct ClipboardRsPasteboard {
    state: Mutex<State>,
}

impl ClipboardRsPasteboard {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = ClipboardContext::new()
            .map_err(|e| anyhow!("Failed to create clipboard context: {}", e))?;
        let fingerprint = fingerprint(&ctx);
        Ok(Self {
            state: Mutex::new(State {
                ctx,
                fingerprint,
                counter: 0,
            }),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, PasteboardError> {
        self.state
            .lock()
            .map_err(|_| PasteboardError::Unavailable("clipboard context lock poisoned".into()))
    }
}

fn read_kind(ctx: &ClipboardContext, kind: ContentKind) -> ClipboardResult<Option<Vec<u8>>> {
    let bytes = match kind {
        ContentKind::PlainText if ctx.has(ContentFormat::Text) => ctx.get_text()?.into_bytes(),
        ContentKind::Html if ctx.has(ContentFormat::Html) => ctx.get_html()?.into_bytes(),
        ContentKind::Rtf if ctx.has(ContentFormat::Rtf) => ctx.get_rich_text()?.into_bytes(),
        ContentKind::FileUrl if ctx.has(ContentFormat::Files) => {
            match ctx.get_files()?.into_iter().next() {
                Some(file) => file.into_bytes(),
                None => return Ok(None),
            }
        }
        ContentKind::Png if ctx.has(ContentFormat::Image) => {
            ctx.get_image()?.to_png()?.get_bytes().to_vec()
        }
        ContentKind::PlainText
        | ContentKind::Html
        | ContentKind::Rtf
        | ContentKind::FileUrl
        | ContentKind::Png => return Ok(None),
        other => {
            let format = other.type_identifier();
            if !ctx.has(ContentFormat::Other(format.to_string())) {
                return Ok(None);
            }
            ctx.get_buffer(format)?
        }
    };
    Ok(Some(bytes))
}

fn write_kind(ctx: &ClipboardContext, kind: ContentKind, bytes: &[u8]) -> ClipboardResult<()> {
    let as_text = || String::from_utf8(bytes.to_vec());
    match kind {
        ContentKind::PlainText => ctx.set_text(as_text()?),
        ContentKind::Html => ctx.set_html(as_text()?),
        ContentKind::Rtf => ctx.set_rich_text(as_text()?),
        ContentKind::FileUrl => ctx.set_files(vec![as_text()?]),
        ContentKind::Png => ctx.set_image(RustImageData::from_bytes(bytes)?),
        other => ctx.set_buffer(other.type_identifier(), bytes.to_vec()),
    }
}

fn fingerprint(ctx: &ClipboardContext) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    for kind in ContentKind::ALL {
        if let Ok(Some(bytes)) = read_kind(ctx, kind) {
            hasher.update(&[kind.index() as u8]);
            hasher.update(&(bytes.len() as u64).to_le_bytes());
            hasher.update(&bytes);
        }
    }
    hasher.finalize()
}

impl PasteboardPort for ClipboardRsPasteboard {
    fn change_count(&self) -> Result<ChangeCount, PasteboardError> {
        let mut state = self.lock()?;
        let current = fingerprint(&state.ctx);
        if current != state.fingerprint {
            state.fingerprint = current;
            state.counter += 1;
            trace!(counter = state.counter, "clipboard fingerprint changed");
        }
        Ok(ChangeCount(state.counter))
    }

    fn read(&self, kind: ContentKind) -> Result<Option<Vec<u8>>, PasteboardError> {
        let span = debug_span!("platform.common.read_pasteboard", kind = %kind);
        span.in_scope(|| {
            let state = self.lock()?;
            read_kind(&state.ctx, kind).map_err(|e| PasteboardError::Read {
                kind,
                message: e.to_string(),
            })
        })
    }

    fn clear_contents(&self) -> Result<(), PasteboardError> {
        let mut state = self.lock()?;
        state
            .ctx
            .clear()
            .map_err(|e| PasteboardError::Unavailable(e.to_string()))?;
        state.counter += 1;
        state.fingerprint = fingerprint(&state.ctx);
        debug!(counter = state.counter, "cleared clipboard");
        Ok(())
    }

    fn write(&self, kind: ContentKind, bytes: &[u8]) -> Result<(), PasteboardError> {
        let span = debug_span!(
            "platform.common.write_pasteboard",
            kind = %kind,
            size_bytes = bytes.len(),
        );
        span.in_scope(|| {
            let mut state = self.lock()?;
            write_kind(&state.ctx, kind, bytes).map_err(|e| PasteboardError::Write {
                kind,
                message: e.to_string(),
            })?;
            state.fingerprint = fingerprint(&state.ctx);
            Ok(())
        })
    }
}
