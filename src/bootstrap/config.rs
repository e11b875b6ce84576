//! # Configuration Loader / 配置加载器
//!
//! Reads the TOML config file into the [`AppConfig`] DTO, then resolves the
//! values the DTO leaves empty. Loading accepts whatever is in the file;
//! defaults are applied only by the `resolve_*` functions below.
//!
//! 加载只负责读取事实，默认值由 `resolve_*` 函数决定。

use anyhow::Context;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use cp_core::app_dirs::AppDirs;
use cp_core::config::AppConfig;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(300);
pub const DEFAULT_APPLICATIONS_DIR: &str = "/Applications";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Like [`load_config`], but a missing file yields [`AppConfig::empty`].
/// A file that exists and fails to parse is still an error.
pub fn load_config_or_empty(config_path: &Path) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        info!(path = %config_path.display(), "no config file, using defaults");
        return Ok(AppConfig::empty());
    }
    load_config(config_path.to_path_buf())
}

pub fn resolve_poll_interval(config: &AppConfig) -> Duration {
    match config.poll_interval_ms {
        0 => DEFAULT_POLL_INTERVAL,
        ms => Duration::from_millis(ms),
    }
}

pub fn resolve_applications_dir(config: &AppConfig) -> PathBuf {
    if config.applications_dir.as_os_str().is_empty() {
        PathBuf::from(DEFAULT_APPLICATIONS_DIR)
    } else {
        config.applications_dir.clone()
    }
}

/// `[storage] data_dir` when set, else the platform app data root.
pub fn resolve_data_root(config: &AppConfig, dirs: &AppDirs) -> PathBuf {
    if config.data_dir.as_os_str().is_empty() {
        dirs.app_data_root.clone()
    } else {
        config.data_dir.clone()
    }
}
