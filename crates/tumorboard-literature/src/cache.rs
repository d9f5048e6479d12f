//! Reference name cache.
//!
//! Maps a PMID to its resolved display name. Entries are written at most once
//! and never evicted; the cache lives as long as the board that owns it.

use std::collections::BTreeMap;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::trace;

#[derive(Debug, Default)]
pub struct ReferenceNameCache {
    names: DashMap<u64, String>,
}

impl ReferenceNameCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pmid: u64) -> Option<String> {
        self.names.get(&pmid).map(|name| name.value().clone())
    }

    pub fn contains(&self, pmid: u64) -> bool {
        self.names.contains_key(&pmid)
    }

    /// Store `name` unless the PMID already has an entry.
    ///
    /// The check and the write happen under one shard lock, so concurrent
    /// resolutions of the same PMID keep whichever finished first.
    /// Returns true if this call inserted.
    pub fn insert_if_absent(&self, pmid: u64, name: String) -> bool {
        match self.names.entry(pmid) {
            Entry::Occupied(_) => {
                trace!(pmid, "reference name already cached");
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(name);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Sorted copy of all entries.
    pub fn snapshot(&self) -> BTreeMap<u64, String> {
        self.names
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect()
    }
}
