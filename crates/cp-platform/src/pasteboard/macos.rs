//! `NSPasteboard generalPasteboard` adapter.
//!
//! Every call grabs the general pasteboard afresh inside its own autorelease
//! pool; nothing Objective-C is held across calls.

use cocoa::base::{id, nil, BOOL, NO};
use cocoa::foundation::{NSInteger, NSString, NSUInteger};
use cp_core::clipboard::{ChangeCount, ContentKind};
use cp_core::ports::{PasteboardError, PasteboardPort};
use objc::rc::autoreleasepool;
use objc::{class, msg_send, sel, sel_impl};
use std::ffi::c_void;
use tracing::{debug_span, trace};

pub struct MacPasteboard;

impl MacPasteboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MacPasteboard {
    fn default() -> Self {
        Self::new()
    }
}

unsafe fn general_pasteboard() -> Result<id, PasteboardError> {
    let pb: id = msg_send![class!(NSPasteboard), generalPasteboard];
    if pb == nil {
        return Err(PasteboardError::Unavailable(
            "generalPasteboard returned nil".to_string(),
        ));
    }
    Ok(pb)
}

/// Autoreleased `NSString` for a pasteboard type.
unsafe fn pasteboard_type(kind: ContentKind) -> id {
    let string: id = NSString::alloc(nil).init_str(kind.type_identifier());
    msg_send![string, autorelease]
}

impl PasteboardPort for MacPasteboard {
    fn change_count(&self) -> Result<ChangeCount, PasteboardError> {
        autoreleasepool(|| unsafe {
            let pb = general_pasteboard()?;
            let count: NSInteger = msg_send![pb, changeCount];
            Ok(ChangeCount(count as i64))
        })
    }

    fn read(&self, kind: ContentKind) -> Result<Option<Vec<u8>>, PasteboardError> {
        let span = debug_span!("platform.macos.read_pasteboard", kind = %kind);
        span.in_scope(|| {
            autoreleasepool(|| unsafe {
                let pb = general_pasteboard()?;
                let ty = pasteboard_type(kind);
                let data: id = msg_send![pb, dataForType: ty];
                if data == nil {
                    return Ok(None);
                }

                let length: NSUInteger = msg_send![data, length];
                if length == 0 {
                    return Ok(Some(Vec::new()));
                }

                let bytes: *const c_void = msg_send![data, bytes];
                if bytes.is_null() {
                    return Err(PasteboardError::Read {
                        kind,
                        message: "NSData has no backing bytes".to_string(),
                    });
                }

                let buf = std::slice::from_raw_parts(bytes as *const u8, length as usize).to_vec();
                trace!(size_bytes = buf.len(), "read representation");
                Ok(Some(buf))
            })
        })
    }

    fn clear_contents(&self) -> Result<(), PasteboardError> {
        autoreleasepool(|| unsafe {
            let pb = general_pasteboard()?;
            let _: NSInteger = msg_send![pb, clearContents];
            Ok(())
        })
    }

    fn write(&self, kind: ContentKind, bytes: &[u8]) -> Result<(), PasteboardError> {
        let span = debug_span!(
            "platform.macos.write_pasteboard",
            kind = %kind,
            size_bytes = bytes.len(),
        );
        span.in_scope(|| {
            autoreleasepool(|| unsafe {
                let pb = general_pasteboard()?;
                let ty = pasteboard_type(kind);
                let data: id = msg_send![
                    class!(NSData),
                    dataWithBytes: bytes.as_ptr() as *const c_void
                    length: bytes.len() as NSUInteger
                ];
                if data == nil {
                    return Err(PasteboardError::Write {
                        kind,
                        message: "failed to allocate NSData".to_string(),
                    });
                }

                let ok: BOOL = msg_send![pb, setData: data forType: ty];
                if ok == NO {
                    return Err(PasteboardError::Write {
                        kind,
                        message: "setData:forType: was rejected".to_string(),
                    });
                }
                Ok(())
            })
        })
    }
}
