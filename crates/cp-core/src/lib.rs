//! # cp-core
//!
//! Core domain models for CopyPad: pasteboard content kinds, history
//! entries and their ordering rules, per-application capture restrictions,
//! and the ports implemented by the platform and infrastructure crates.
//!
//! This crate contains pure logic without any OS or filesystem access.

pub mod app_dirs;
pub mod clipboard;
pub mod config;
pub mod ids;
pub mod ports;
pub mod restriction;

pub use clipboard::{ChangeCount, ContentKind, ContentMap, DisplayKind, Entry, History, HistoryError};
pub use config::AppConfig;
pub use ids::{AppId, EntryId};
pub use restriction::{InstalledApp, RestrictionSet};
