use crate::ports::errors::AppCatalogError;
use crate::restriction::InstalledApp;

/// Source of restriction candidates.
pub trait AppCatalogPort: Send + Sync {
    /// Installed applications, sorted by name, all restrictions disabled.
    fn installed_apps(&self) -> Result<Vec<InstalledApp>, AppCatalogError>;
}
