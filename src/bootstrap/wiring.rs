//! # Dependency Injection / 依赖注入模块
//!
//! The only place that depends on `cp-infra`, `cp-platform` and `cp-app` at
//! once. It picks the concrete adapters, wraps them in `Arc<dyn Port>` and
//! hands them to [`AppDeps`]. No business decisions are made here.
//!
//! 这里只负责组装，不做决策。

use std::path::PathBuf;
use std::sync::Arc;

use cp_app::{AppDeps, AppPaths};
use cp_core::config::AppConfig;
use cp_core::ports::AutostartPort;
use cp_infra::{DirectoryAppCatalog, FileDefaultsStore, JsonRestrictionRepository, SystemClock};
use cp_platform::autostart::DEFAULT_APP_NAME;
use cp_platform::{
    system_pasteboard, AccessibilityPermission, LoginItemAutostart, SystemFrontmostApp,
};
use tracing::{debug, info_span};

use super::config::resolve_applications_dir;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Pasteboard initialization failed: {0}")]
    PasteboardInit(String),

    #[error("Autostart initialization failed: {0}")]
    AutostartInit(String),
}

fn create_autostart(program: std::io::Result<PathBuf>) -> WiringResult<Arc<dyn AutostartPort>> {
    let program = program.map_err(|e| WiringError::AutostartInit(e.to_string()))?;
    let login_item = LoginItemAutostart::new(DEFAULT_APP_NAME, &program)
        .map_err(|e| WiringError::AutostartInit(e.to_string()))?;
    Ok(Arc::new(login_item))
}

/// Wire all dependencies together
/// 将所有依赖连接在一起
///
/// Restrictions persist in `paths.defaults_path`; the catalog scans the
/// resolved applications directory.
pub fn wire_dependencies(config: &AppConfig, paths: &AppPaths) -> WiringResult<AppDeps> {
    let _span = info_span!("bootstrap.wire_dependencies").entered();

    let pasteboard =
        system_pasteboard().map_err(|e| WiringError::PasteboardInit(format!("{e:#}")))?;

    let defaults = Arc::new(FileDefaultsStore::new(paths.defaults_path.clone()));
    let applications_dir = resolve_applications_dir(config);
    debug!(
        defaults = %paths.defaults_path.display(),
        applications_dir = %applications_dir.display(),
        "wiring adapters"
    );

    let deps = AppDeps {
        // Pasteboard dependencies / 剪贴板依赖
        pasteboard,
        frontmost_app: Arc::new(SystemFrontmostApp::new()),

        // Restriction dependencies / 应用限制依赖
        app_catalog: Arc::new(DirectoryAppCatalog::new(applications_dir)),
        restriction_store: Arc::new(JsonRestrictionRepository::new(defaults)),

        // System dependencies / 系统依赖
        autostart: create_autostart(std::env::current_exe())?,
        permission: Arc::new(AccessibilityPermission::new()),
        clock: Arc::new(SystemClock),
    };

    Ok(deps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wiring_error_display() {
        let err = WiringError::PasteboardInit("no display".to_string());
        assert!(err.to_string().contains("Pasteboard initialization"));
        assert!(err.to_string().contains("no display"));
    }

    #[test]
    fn test_wiring_error_autostart() {
        let err = WiringError::AutostartInit("home unavailable".to_string());
        assert!(err.to_string().contains("Autostart initialization"));
    }

    #[test]
    fn unknown_executable_path_is_a_wiring_error() {
        let missing = Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));

        let err = create_autostart(missing).err().unwrap();

        assert!(matches!(err, WiringError::AutostartInit(_)));
    }

    #[test]
    fn executable_path_becomes_login_item() {
        let autostart = create_autostart(Ok(PathBuf::from("/usr/local/bin/copypad")));

        assert!(autostart.is_ok());
    }
}
