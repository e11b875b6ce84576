use cp_core::ports::{RestrictionStoreError, RestrictionStorePort};
use cp_core::restriction::InstalledApp;
use std::sync::Arc;

use crate::defaults::FileDefaultsStore;

/// Defaults key holding the saved restriction list.
pub const RESTRICTIONS_KEY: &str = "ApplicationsToggleState";

/// Restriction list stored as a JSON array under [`RESTRICTIONS_KEY`].
pub struct JsonRestrictionRepository {
    store: Arc<FileDefaultsStore>,
}

impl JsonRestrictionRepository {
    pub fn new(store: Arc<FileDefaultsStore>) -> Self {
        Self { store }
    }
}

fn classify(err: anyhow::Error) -> RestrictionStoreError {
    if err.downcast_ref::<serde_json::Error>().is_some() {
        RestrictionStoreError::Corrupt(format!("{err:#}"))
    } else {
        RestrictionStoreError::Storage(format!("{err:#}"))
    }
}

impl RestrictionStorePort for JsonRestrictionRepository {
    fn load(&self) -> Result<Vec<InstalledApp>, RestrictionStoreError> {
        let apps = self
            .store
            .get::<Vec<InstalledApp>>(RESTRICTIONS_KEY)
            .map_err(classify)?
            .unwrap_or_default();
        tracing::debug!(count = apps.len(), "loaded saved restrictions");
        Ok(apps)
    }

    fn save(&self, apps: &[InstalledApp]) -> Result<(), RestrictionStoreError> {
        self.store.set(RESTRICTIONS_KEY, &apps).map_err(classify)?;
        tracing::debug!(count = apps.len(), "saved restrictions");
        Ok(())
    }
}
