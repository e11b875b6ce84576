use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ids::AppId;

/// An application bundle that can opt out of capture.
///
/// Serialized with the field names of the persisted restriction list:
/// `{id, name, url, isEnabled}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledApp {
    pub id: AppId,
    /// Bundle name without the `.app` suffix.
    pub name: String,
    #[serde(rename = "url")]
    pub location: PathBuf,
    #[serde(rename = "isEnabled")]
    pub enabled: bool,
}

impl InstalledApp {
    /// Freshly discovered application, restriction disabled.
    pub fn discovered(name: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            id: AppId::new(),
            name: name.into(),
            location: location.into(),
            enabled: false,
        }
    }

    pub fn is_located_at(&self, location: &Path) -> bool {
        self.location.as_path() == location
    }
}
