//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the platform or
//! infrastructure adapters. The core stays free of OS and filesystem
//! dependencies; `cp-platform` and `cp-infra` implement these traits.
//!
//! Every port is `Send + Sync` so adapters can be shared as
//! `Arc<dyn Port>` inside `AppDeps`.

pub mod app_catalog;
pub mod app_dirs;
pub mod autostart;
mod clock;
pub mod errors;
pub mod frontmost_app;
pub mod pasteboard;
pub mod permission;
pub mod restriction_store;

pub use app_catalog::AppCatalogPort;
pub use app_dirs::AppDirsPort;
pub use autostart::AutostartPort;
pub use clock::*;
pub use errors::{
    AppCatalogError, AppDirsError, AutostartError, PasteboardError, RestrictionStoreError,
};
pub use frontmost_app::FrontmostAppPort;
pub use pasteboard::PasteboardPort;
pub use permission::PermissionPort;
pub use restriction_store::RestrictionStorePort;
