//! Ordered clipboard history.
//!
//! Pinned entries always form a contiguous prefix of the list. The index of
//! the first unpinned slot is the *boundary*; new captures and freshly
//! unpinned entries land there.

use thiserror::Error;

use super::Entry;
use crate::ids::EntryId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("entry not found: {0}")]
    NotFound(EntryId),

    #[error("alias must not be empty")]
    EmptyAlias,
}

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<Entry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a captured entry at the boundary.
    ///
    /// An existing entry with the same alias is removed first, pinned or
    /// not, so the alias stays unique. The candidate always enters unpinned.
    pub fn insert(&mut self, mut candidate: Entry) -> EntryId {
        if let Some(idx) = self.position_by_alias(&candidate.alias) {
            #[cfg(feature = "tracing")]
            tracing::trace!(alias = %candidate.alias, index = idx, "replacing duplicate alias");
            self.entries.remove(idx);
        }

        candidate.pinned = false;
        let id = candidate.id.clone();
        let boundary = self.boundary();
        self.entries.insert(boundary, candidate);
        id
    }

    /// Remove the first entry carrying `alias`.
    pub fn delete(&mut self, alias: &str) -> Option<Entry> {
        let idx = self.position_by_alias(alias)?;
        Some(self.entries.remove(idx))
    }

    /// Flip the pin state of an entry and return the new state.
    ///
    /// Pinning moves the entry to the front. Unpinning moves it to the
    /// boundary left behind by the remaining pinned entries.
    pub fn toggle_pin(&mut self, id: &EntryId) -> Option<bool> {
        let idx = self.position_by_id(id)?;
        let mut entry = self.entries.remove(idx);
        entry.pinned = !entry.pinned;
        let pinned = entry.pinned;

        let target = if pinned { 0 } else { self.boundary() };
        self.entries.insert(target, entry);
        Some(pinned)
    }

    /// Drop every unpinned entry.
    pub fn clear(&mut self) {
        self.entries.retain(|entry| entry.pinned);
    }

    pub fn rename(&mut self, id: &EntryId, alias: &str) -> Result<(), HistoryError> {
        let alias = alias.trim();
        if alias.is_empty() {
            return Err(HistoryError::EmptyAlias);
        }

        let entry = self
            .entries
            .iter_mut()
            .find(|entry| &entry.id == id)
            .ok_or_else(|| HistoryError::NotFound(id.clone()))?;
        entry.alias = alias.to_string();
        Ok(())
    }

    /// Entries whose alias contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Entry> {
        if query.is_empty() {
            return self.entries.iter().collect();
        }

        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.alias.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pinned_count(&self) -> usize {
        self.boundary()
    }

    fn boundary(&self) -> usize {
        self.entries
            .iter()
            .position(|entry| !entry.pinned)
            .unwrap_or(self.entries.len())
    }

    fn position_by_alias(&self, alias: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.alias == alias)
    }

    fn position_by_id(&self, id: &EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.id == id)
    }
}
