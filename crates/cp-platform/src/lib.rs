//! # cp-platform
//!
//! Platform-specific implementations for CopyPad.
//!
//! This crate contains the adapters that talk to the operating system:
//! the general pasteboard, the frontmost application, login items and the
//! accessibility trust check.

pub mod app_dirs;
pub mod autostart;
pub mod frontmost;
pub mod pasteboard;
pub mod permissions;

pub use app_dirs::DirsAppDirsAdapter;
pub use autostart::LoginItemAutostart;
pub use frontmost::SystemFrontmostApp;
pub use pasteboard::{system_pasteboard, ClipboardRsPasteboard, SystemPasteboard};
pub use permissions::AccessibilityPermission;
