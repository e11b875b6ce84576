use crate::ports::errors::RestrictionStoreError;
use crate::restriction::InstalledApp;

/// Persistence for the restriction list.
pub trait RestrictionStorePort: Send + Sync {
    /// Previously saved list. Empty when nothing was saved yet.
    fn load(&self) -> Result<Vec<InstalledApp>, RestrictionStoreError>;

    /// Replace the saved list. Must be idempotent.
    fn save(&self, apps: &[InstalledApp]) -> Result<(), RestrictionStoreError>;
}
