//! # Configuration DTO / 配置数据结构
//!
//! Maps the TOML config file onto [`AppConfig`]. Data only: missing keys are
//! recorded as empty facts (`0`, `""`, `false`). Defaults and validation
//! belong to the bootstrap layer that consumes this struct.
//!
//! 此模块只包含数据结构定义，默认值计算由 bootstrap 层负责。

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Register the daemon as a login item.
    pub launch_at_login: bool,

    /// Pasteboard sampling period in milliseconds (0 when unset).
    pub poll_interval_ms: u64,

    /// Directory scanned for installed applications (empty when unset).
    pub applications_dir: PathBuf,

    /// Data directory override (empty when unset).
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Negative intervals are recorded as `0`, i.e. unset.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section = |name: &str, key: &str| toml_value.get(name).and_then(|s| s.get(key));

        Ok(Self {
            launch_at_login: section("general", "launch_at_login")
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            poll_interval_ms: section("capture", "poll_interval_ms")
                .and_then(|v| v.as_integer())
                .and_then(|v| u64::try_from(v).ok())
                .unwrap_or(0),
            applications_dir: PathBuf::from(
                section("restrictions", "applications_dir")
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            data_dir: PathBuf::from(
                section("storage", "data_dir")
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            launch_at_login: false,
            poll_interval_ms: 0,
            applications_dir: PathBuf::new(),
            data_dir: PathBuf::new(),
        }
    }

    /// Config pointing at an explicit data directory, everything else empty.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            ..Self::empty()
        }
    }
}
