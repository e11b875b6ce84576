//! The CopyPad service.
//!
//! Owns the history, the poller baseline and the restriction list for the
//! lifetime of the process. Every mutation goes through `&mut self`, so the
//! owner (the daemon loop) needs no locking.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use cp_core::clipboard::{ContentMap, Entry, History, HistoryError};
use cp_core::ids::EntryId;
use cp_core::ports::PermissionPort;

use crate::deps::AppDeps;
use crate::usecases::{
    ClearHistoryUseCase, PasteboardPoller, PollOutcome, RestrictionsController,
    SyncLaunchAtLogin, WriteBackUseCase,
};

pub struct CopyPad {
    history: History,
    poller: PasteboardPoller,
    write_back: WriteBackUseCase,
    clear_history: ClearHistoryUseCase,
    restrictions: RestrictionsController,
    launch_at_login: SyncLaunchAtLogin,
    permission: Arc<dyn PermissionPort>,
}

impl CopyPad {
    pub fn new(deps: AppDeps) -> Result<Self> {
        let poller = PasteboardPoller::new(
            deps.pasteboard.clone(),
            deps.frontmost_app,
            deps.clock,
        )?;
        let restrictions = RestrictionsController::load(deps.app_catalog, deps.restriction_store)?;

        info!(baseline = %poller.baseline(), "copypad service ready");
        Ok(Self {
            history: History::new(),
            poller,
            write_back: WriteBackUseCase::new(deps.pasteboard.clone()),
            clear_history: ClearHistoryUseCase::new(deps.pasteboard),
            restrictions,
            launch_at_login: SyncLaunchAtLogin::new(deps.autostart),
            permission: deps.permission,
        })
    }

    /// Run one pasteboard poll.
    pub fn tick(&mut self) -> Result<PollOutcome> {
        self.poller
            .poll_once(&mut self.history, self.restrictions.set())
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Write an entry back to the pasteboard. An empty `overrides` map writes
    /// the entry's own representations.
    pub fn write_back(&mut self, id: &EntryId, overrides: &ContentMap) -> Result<()> {
        let entry = self.entry(id)?;
        self.write_back
            .execute(&entry, overrides, &mut self.poller)?;
        Ok(())
    }

    /// Paste the decoded file path of an entry as plain text.
    ///
    /// Returns `false` when the entry holds no file reference.
    pub fn write_back_absolute_path(&mut self, id: &EntryId) -> Result<bool> {
        let entry = self.entry(id)?;
        let Some(overrides) = entry.absolute_path_override() else {
            return Ok(false);
        };
        self.write_back
            .execute(&entry, &overrides, &mut self.poller)?;
        Ok(true)
    }

    /// Write back the first entry matching `query`, as the search box does on
    /// submit.
    pub fn paste_first_match(&mut self, query: &str) -> Result<Option<EntryId>> {
        let Some(id) = self.history.search(query).first().map(|entry| entry.id.clone()) else {
            return Ok(None);
        };
        self.write_back(&id, &ContentMap::new())?;
        Ok(Some(id))
    }

    pub fn delete(&mut self, alias: &str) -> Option<Entry> {
        self.history.delete(alias)
    }

    pub fn toggle_pin(&mut self, id: &EntryId) -> Option<bool> {
        self.history.toggle_pin(id)
    }

    pub fn rename(&mut self, id: &EntryId, alias: &str) -> Result<(), HistoryError> {
        self.history.rename(id, alias)
    }

    pub fn search(&self, query: &str) -> Vec<&Entry> {
        self.history.search(query)
    }

    /// Clear the pasteboard and all unpinned entries.
    pub fn clear(&mut self) -> Result<()> {
        self.clear_history
            .execute(&mut self.history, &mut self.poller)
    }

    pub fn restrictions(&self) -> &RestrictionsController {
        &self.restrictions
    }

    pub fn restrictions_mut(&mut self) -> &mut RestrictionsController {
        &mut self.restrictions
    }

    pub fn save_restrictions(&self) -> Result<()> {
        self.restrictions.save()
    }

    pub fn launch_at_login(&self) -> Result<bool> {
        self.launch_at_login.is_enabled()
    }

    /// Returns whether the login item changed.
    pub fn set_launch_at_login(&self, enabled: bool) -> Result<bool> {
        self.launch_at_login.execute(enabled)
    }

    pub fn is_accessibility_trusted(&self) -> bool {
        self.permission.is_accessibility_trusted()
    }

    fn entry(&self, id: &EntryId) -> Result<Entry> {
        self.history
            .get(id)
            .cloned()
            .ok_or_else(|| HistoryError::NotFound(id.clone()))
            .with_context(|| format!("write back entry {id}"))
    }
}
