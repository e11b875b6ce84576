use cp_core::ports::{AppCatalogError, AppCatalogPort};
use cp_core::restriction::InstalledApp;
use std::fs;
use std::path::PathBuf;

const APP_BUNDLE_EXTENSION: &str = "app";

/// Lists the `*.app` bundles of a single directory, non-recursively.
pub struct DirectoryAppCatalog {
    dir: PathBuf,
}

impl DirectoryAppCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl AppCatalogPort for DirectoryAppCatalog {
    fn installed_apps(&self) -> Result<Vec<InstalledApp>, AppCatalogError> {
        let read_dir = fs::read_dir(&self.dir).map_err(|source| AppCatalogError::Enumerate {
            dir: self.dir.display().to_string(),
            source,
        })?;

        let mut apps: Vec<InstalledApp> = read_dir
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .is_some_and(|ext| ext == APP_BUNDLE_EXTENSION)
            })
            .filter_map(|path| {
                let name = path.file_stem()?.to_string_lossy().into_owned();
                Some(InstalledApp::discovered(name, path))
            })
            .collect();

        apps.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(dir = %self.dir.display(), count = apps.len(), "enumerated applications");
        Ok(apps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_app_bundles_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("Safari.app")).unwrap();
        fs::create_dir(dir.path().join("Mail.app")).unwrap();
        fs::create_dir(dir.path().join("Utilities")).unwrap();
        fs::write(dir.path().join("readme.txt"), "x").unwrap();

        let apps = DirectoryAppCatalog::new(dir.path()).installed_apps().unwrap();

        let names: Vec<_> = apps.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Mail", "Safari"]);
        assert_eq!(apps[0].location, dir.path().join("Mail.app"));
        assert!(apps.iter().all(|a| !a.enabled));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let catalog = DirectoryAppCatalog::new(dir.path().join("nope"));

        assert!(matches!(
            catalog.installed_apps(),
            Err(AppCatalogError::Enumerate { .. })
        ));
    }
}
