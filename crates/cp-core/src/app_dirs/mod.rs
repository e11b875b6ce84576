use std::path::PathBuf;

/// Platform directories resolved for the running profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}
