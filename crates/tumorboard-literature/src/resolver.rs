//! Background resolution of reference display names.
//!
//! `refresh_all` is fire-and-forget: each call spawns one task that looks up
//! every uncached PMID concurrently. Bursts are never cancelled and may
//! overlap; the cache keeps the first name written for a PMID and every
//! completion is published to subscribers so the view can re-render.

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use tumorboard_common::text::truncate;
use tumorboard_common::{Reference, TherapyRecommendation};

use crate::cache::ReferenceNameCache;
use crate::lookup::LiteratureLookup;

/// Events buffered per subscriber before the oldest are dropped.
pub const EVENT_CAPACITY: usize = 256;

/// Published after every completed lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceResolved {
    pub pmid: u64,
    pub name: String,
    /// False when another resolution for the PMID got there first.
    pub inserted: bool,
}

#[derive(Clone)]
pub struct ReferenceResolver {
    lookup: Arc<dyn LiteratureLookup>,
    cache: Arc<ReferenceNameCache>,
    events: broadcast::Sender<ReferenceResolved>,
}

impl std::fmt::Debug for ReferenceResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceResolver")
            .field("cached", &self.cache.len())
            .finish()
    }
}

impl ReferenceResolver {
    pub fn new(lookup: Arc<dyn LiteratureLookup>) -> Self {
        Self::with_cache(lookup, Arc::new(ReferenceNameCache::new()))
    }

    pub fn with_cache(lookup: Arc<dyn LiteratureLookup>, cache: Arc<ReferenceNameCache>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self { lookup, cache, events }
    }

    pub fn cache(&self) -> &Arc<ReferenceNameCache> {
        &self.cache
    }

    /// Completion events for every lookup started after this call.
    ///
    /// A subscriber that falls more than [`EVENT_CAPACITY`] events behind gets
    /// `RecvError::Lagged` and must re-read the cache; every lagged event has
    /// already been written there.
    pub fn subscribe(&self) -> broadcast::Receiver<ReferenceResolved> {
        self.events.subscribe()
    }

    /// Display name for a reference, never failing.
    ///
    /// A non-empty `name` is returned as-is without a lookup. Otherwise the
    /// PMID is looked up; any failure degrades to the empty string.
    pub async fn resolve_name(&self, reference: &Reference) -> String {
        resolve_with(self.lookup.as_ref(), reference).await
    }

    /// Resolve every uncached PMID referenced by `recommendations`.
    ///
    /// Must be called from within a tokio runtime. The returned handle may be
    /// dropped; the burst runs to completion regardless.
    pub fn refresh_all(&self, recommendations: &[TherapyRecommendation]) -> JoinHandle<()> {
        let pending: Vec<Reference> = recommendations
            .iter()
            .flat_map(|rec| rec.references.iter())
            .filter(|r| r.valid_pmid().is_some_and(|pmid| !self.cache.contains(pmid)))
            .cloned()
            .collect();

        debug!(
            n_recommendations = recommendations.len(),
            n_pending = pending.len(),
            "Refreshing reference names"
        );

        let lookup = self.lookup.clone();
        let cache = self.cache.clone();
        let events = self.events.clone();

        tokio::spawn(async move {
            let lookups = pending.into_iter().map(|reference| {
                let lookup = lookup.clone();
                let cache = cache.clone();
                let events = events.clone();
                async move {
                    let Some(pmid) = reference.valid_pmid() else {
                        return;
                    };
                    let name = resolve_with(lookup.as_ref(), &reference).await;
                    let inserted = cache.insert_if_absent(pmid, name.clone());
                    // No subscribers is fine
                    let _ = events.send(ReferenceResolved { pmid, name, inserted });
                }
            });
            join_all(lookups).await;
        })
    }
}

async fn resolve_with(lookup: &dyn LiteratureLookup, reference: &Reference) -> String {
    if let Some(name) = reference.non_empty_name() {
        return name.to_string();
    }
    let Some(pmid) = reference.valid_pmid() else {
        return String::new();
    };
    match lookup.title_for_pmid(pmid).await {
        Ok(title) => title,
        Err(e) => {
            warn!(pmid, "Reference name lookup failed: {}", e);
            String::new()
        }
    }
}

/// Name shown for a reference: its own name if set, else the cached title,
/// truncated to `width` at a word boundary.
pub fn display_name(reference: &Reference, cache: &ReferenceNameCache, width: usize) -> String {
    if let Some(name) = reference.non_empty_name() {
        return truncate(name, width, true);
    }
    reference
        .valid_pmid()
        .and_then(|pmid| cache.get(pmid))
        .map(|title| truncate(&title, width, true))
        .unwrap_or_default()
}
