use cocoa::base::{id, nil};
use cocoa::foundation::NSString;
use cp_core::ports::FrontmostAppPort;
use objc::rc::autoreleasepool;
use objc::{class, msg_send, sel, sel_impl};
use std::ffi::CStr;
use std::path::PathBuf;

/// `NSWorkspace.sharedWorkspace.frontmostApplication.bundleURL.path`
#[derive(Debug, Default)]
pub struct WorkspaceFrontmostApp;

impl WorkspaceFrontmostApp {
    pub fn new() -> Self {
        Self
    }
}

impl FrontmostAppPort for WorkspaceFrontmostApp {
    fn frontmost_location(&self) -> Option<PathBuf> {
        autoreleasepool(|| unsafe {
            let workspace: id = msg_send![class!(NSWorkspace), sharedWorkspace];
            let front_app: id = msg_send![workspace, frontmostApplication];
            if front_app == nil {
                return None;
            }

            let bundle_url: id = msg_send![front_app, bundleURL];
            if bundle_url == nil {
                return None;
            }

            let path: id = msg_send![bundle_url, path];
            if path == nil {
                return None;
            }

            let utf8 = NSString::UTF8String(path);
            if utf8.is_null() {
                return None;
            }
            let path = CStr::from_ptr(utf8).to_string_lossy().into_owned();
            Some(PathBuf::from(path))
        })
    }
}
