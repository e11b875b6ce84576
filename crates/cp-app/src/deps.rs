//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for [`crate::CopyPad`] construction. Not a builder:
//! no defaults, no optional fields, no hidden logic.

use std::sync::Arc;
use cp_core::ports::*;

/// Application dependency grouping (parameter grouping only)
/// 应用依赖分组（仅参数打包）
pub struct AppDeps {
    // Pasteboard dependencies / 剪贴板依赖
    pub pasteboard: Arc<dyn PasteboardPort>,
    pub frontmost_app: Arc<dyn FrontmostAppPort>,

    // Restriction dependencies / 应用限制依赖
    pub app_catalog: Arc<dyn AppCatalogPort>,
    pub restriction_store: Arc<dyn RestrictionStorePort>,

    // System dependencies / 系统依赖
    pub autostart: Arc<dyn AutostartPort>,
    pub permission: Arc<dyn PermissionPort>,
    pub clock: Arc<dyn ClockPort>,
}
