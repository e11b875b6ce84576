//! In-memory port fakes shared by the cp-app integration tests.

#![allow(dead_code)]

use cp_app::AppDeps;
use cp_core::clipboard::{ChangeCount, ContentKind, ContentMap};
use cp_core::ports::*;
use cp_core::restriction::InstalledApp;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Pasteboard that behaves like NSPasteboard: only `clear_contents` and
/// external copies move the counter.
#[derive(Default)]
pub struct FakePasteboard {
    count: Mutex<i64>,
    content: Mutex<ContentMap>,
    failing_writes: Mutex<Vec<ContentKind>>,
    failing_clear: Mutex<bool>,
}

impl FakePasteboard {
    /// Simulate another application copying `content`.
    pub fn external_copy(&self, content: ContentMap) {
        *self.content.lock().unwrap() = content;
        *self.count.lock().unwrap() += 1;
    }

    pub fn copy_text(&self, text: &str) {
        self.external_copy(ContentMap::single(ContentKind::PlainText, text));
    }

    pub fn contents(&self) -> ContentMap {
        self.content.lock().unwrap().clone()
    }

    pub fn count(&self) -> i64 {
        *self.count.lock().unwrap()
    }

    pub fn fail_writes_of(&self, kind: ContentKind) {
        self.failing_writes.lock().unwrap().push(kind);
    }

    pub fn fail_clears(&self) {
        *self.failing_clear.lock().unwrap() = true;
    }
}

impl PasteboardPort for FakePasteboard {
    fn change_count(&self) -> Result<ChangeCount, PasteboardError> {
        Ok(ChangeCount(self.count()))
    }

    fn read(&self, kind: ContentKind) -> Result<Option<Vec<u8>>, PasteboardError> {
        Ok(self.content.lock().unwrap().get(kind).map(<[u8]>::to_vec))
    }

    fn clear_contents(&self) -> Result<(), PasteboardError> {
        if *self.failing_clear.lock().unwrap() {
            return Err(PasteboardError::Unavailable("pasteboard busy".to_string()));
        }
        *self.content.lock().unwrap() = ContentMap::new();
        *self.count.lock().unwrap() += 1;
        Ok(())
    }

    fn write(&self, kind: ContentKind, bytes: &[u8]) -> Result<(), PasteboardError> {
        if self.failing_writes.lock().unwrap().contains(&kind) {
            return Err(PasteboardError::Write {
                kind,
                message: "rejected".to_string(),
            });
        }
        self.content.lock().unwrap().insert(kind, bytes.to_vec());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeFrontmost {
    location: Mutex<Option<PathBuf>>,
}

impl FakeFrontmost {
    pub fn bring_to_front(&self, location: &str) {
        *self.location.lock().unwrap() = Some(PathBuf::from(location));
    }
}

impl FrontmostAppPort for FakeFrontmost {
    fn frontmost_location(&self) -> Option<PathBuf> {
        self.location.lock().unwrap().clone()
    }
}

pub struct FixedCatalog(pub Vec<InstalledApp>);

impl FixedCatalog {
    pub fn standard() -> Self {
        Self(vec![
            InstalledApp::discovered("Mail", "/Applications/Mail.app"),
            InstalledApp::discovered("Passwords", "/Applications/Passwords.app"),
            InstalledApp::discovered("Safari", "/Applications/Safari.app"),
        ])
    }
}

impl AppCatalogPort for FixedCatalog {
    fn installed_apps(&self) -> Result<Vec<InstalledApp>, AppCatalogError> {
        Ok(self
            .0
            .iter()
            .map(|app| InstalledApp::discovered(app.name.clone(), app.location.clone()))
            .collect())
    }
}

#[derive(Default)]
pub struct MemoryRestrictionStore {
    pub saved: Mutex<Vec<InstalledApp>>,
}

impl RestrictionStorePort for MemoryRestrictionStore {
    fn load(&self) -> Result<Vec<InstalledApp>, RestrictionStoreError> {
        Ok(self.saved.lock().unwrap().clone())
    }

    fn save(&self, apps: &[InstalledApp]) -> Result<(), RestrictionStoreError> {
        *self.saved.lock().unwrap() = apps.to_vec();
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeAutostart {
    pub enabled: Mutex<bool>,
}

impl AutostartPort for FakeAutostart {
    fn is_enabled(&self) -> Result<bool, AutostartError> {
        Ok(*self.enabled.lock().unwrap())
    }

    fn enable(&self) -> Result<(), AutostartError> {
        *self.enabled.lock().unwrap() = true;
        Ok(())
    }

    fn disable(&self) -> Result<(), AutostartError> {
        *self.enabled.lock().unwrap() = false;
        Ok(())
    }
}

pub struct Trusted(pub bool);

impl PermissionPort for Trusted {
    fn is_accessibility_trusted(&self) -> bool {
        self.0
    }
}

pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

/// Handles on the fakes behind an [`AppDeps`].
pub struct Harness {
    pub pasteboard: Arc<FakePasteboard>,
    pub frontmost: Arc<FakeFrontmost>,
    pub store: Arc<MemoryRestrictionStore>,
    pub autostart: Arc<FakeAutostart>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            pasteboard: Arc::new(FakePasteboard::default()),
            frontmost: Arc::new(FakeFrontmost::default()),
            store: Arc::new(MemoryRestrictionStore::default()),
            autostart: Arc::new(FakeAutostart::default()),
        }
    }

    pub fn deps(&self) -> AppDeps {
        AppDeps {
            pasteboard: self.pasteboard.clone(),
            frontmost_app: self.frontmost.clone(),
            app_catalog: Arc::new(FixedCatalog::standard()),
            restriction_store: self.store.clone(),
            autostart: self.autostart.clone(),
            permission: Arc::new(Trusted(true)),
            clock: Arc::new(FixedClock(1_724_059_800_000)),
        }
    }
}
