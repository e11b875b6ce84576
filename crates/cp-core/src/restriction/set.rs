use std::path::Path;

use super::InstalledApp;

/// Applications the user may exclude from capture.
///
/// Order is the catalog order; [`RestrictionSet::list_applications`] presents
/// enabled restrictions first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictionSet {
    apps: Vec<InstalledApp>,
}

impl RestrictionSet {
    pub fn new(apps: Vec<InstalledApp>) -> Self {
        Self { apps }
    }

    /// Combine a fresh catalog with a previously saved list.
    ///
    /// Apps are matched by name and only the `enabled` flag is carried over.
    /// Saved apps that are no longer installed are dropped.
    pub fn merge_saved(catalog: Vec<InstalledApp>, saved: &[InstalledApp]) -> Self {
        let apps = catalog
            .into_iter()
            .map(|mut app| {
                if let Some(previous) = saved.iter().find(|s| s.name == app.name) {
                    app.enabled = previous.enabled;
                }
                app
            })
            .collect();
        Self { apps }
    }

    /// Whether capture is suppressed for an application at `location`.
    pub fn is_restricted(&self, location: &Path) -> bool {
        self.apps
            .iter()
            .any(|app| app.enabled && app.is_located_at(location))
    }

    /// Enabled restrictions first, each group in catalog order.
    pub fn list_applications(&self) -> Vec<InstalledApp> {
        let (mut enabled, disabled): (Vec<_>, Vec<_>) =
            self.apps.iter().cloned().partition(|app| app.enabled);
        enabled.extend(disabled);
        enabled
    }

    /// Returns `false` when no application carries `name`.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> bool {
        match self.apps.iter_mut().find(|app| app.name == name) {
            Some(app) => {
                app.enabled = enabled;
                true
            }
            None => false,
        }
    }

    pub fn toggle(&mut self, name: &str) -> Option<bool> {
        let app = self.apps.iter_mut().find(|app| app.name == name)?;
        app.enabled = !app.enabled;
        Some(app.enabled)
    }

    pub fn apps(&self) -> &[InstalledApp] {
        &self.apps
    }

    pub fn enabled_count(&self) -> usize {
        self.apps.iter().filter(|app| app.enabled).count()
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}
