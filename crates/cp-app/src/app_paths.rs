use std::path::PathBuf;

use cp_core::app_dirs::AppDirs;

/// Concrete file locations under the app data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_path: PathBuf,
    pub defaults_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self::from_data_root(dirs.app_data_root.clone())
    }

    /// Paths for an explicit data directory, e.g. `[storage] data_dir`.
    pub fn from_data_root(root: PathBuf) -> Self {
        Self {
            config_path: root.join("config.toml"),
            defaults_path: root.join("defaults.json"),
            logs_dir: root.join("logs"),
        }
    }
}
