use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use cp_core::ports::{AppCatalogPort, RestrictionStoreError, RestrictionStorePort};
use cp_core::restriction::{InstalledApp, RestrictionSet};

/// Owns the live restriction set and its persistence.
///
/// Toggles apply to subsequent polls immediately; they reach disk only on
/// [`RestrictionsController::save`].
pub struct RestrictionsController {
    catalog: Arc<dyn AppCatalogPort>,
    store: Arc<dyn RestrictionStorePort>,
    set: RestrictionSet,
}

impl RestrictionsController {
    /// Enumerate installed applications and merge the saved flags.
    pub fn load(
        catalog: Arc<dyn AppCatalogPort>,
        store: Arc<dyn RestrictionStorePort>,
    ) -> Result<Self> {
        let mut controller = Self {
            catalog,
            store,
            set: RestrictionSet::default(),
        };
        controller.reload()?;
        Ok(controller)
    }

    /// Re-enumerate applications and re-merge the saved flags. Unsaved
    /// toggles are discarded.
    pub fn reload(&mut self) -> Result<()> {
        let catalog = match self.catalog.installed_apps() {
            Ok(apps) => apps,
            Err(err) => {
                warn!(error = %err, "application enumeration failed, restriction list is empty");
                Vec::new()
            }
        };

        let saved = match self.store.load() {
            Ok(saved) => saved,
            Err(RestrictionStoreError::Corrupt(reason)) => {
                warn!(%reason, "saved restrictions unreadable, starting from none");
                Vec::new()
            }
            Err(err) => return Err(err).context("load saved restrictions"),
        };

        self.set = RestrictionSet::merge_saved(catalog, &saved);
        info!(
            applications = self.set.len(),
            restricted = self.set.enabled_count(),
            "restrictions loaded"
        );
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.store
            .save(self.set.apps())
            .context("save restrictions")?;
        info!(restricted = self.set.enabled_count(), "restrictions saved");
        Ok(())
    }

    pub fn is_restricted(&self, location: &Path) -> bool {
        self.set.is_restricted(location)
    }

    pub fn list_applications(&self) -> Vec<InstalledApp> {
        self.set.list_applications()
    }

    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> bool {
        self.set.set_enabled(name, enabled)
    }

    pub fn toggle(&mut self, name: &str) -> Option<bool> {
        self.set.toggle(name)
    }

    pub fn set(&self) -> &RestrictionSet {
        &self.set
    }
}
