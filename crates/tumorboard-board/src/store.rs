//! Collaborators owned by the hosting view: persistence and user confirmation.

use tracing::debug;
use tumorboard_common::TherapyRecommendation;

pub const DELETE_PROMPT: &str = "Are you sure you wish to delete this item?";

/// Parent-side persistence of a patient's recommendations.
///
/// Both callbacks report synchronously whether the change was accepted; the
/// board only refreshes its local state on success.
pub trait RecommendationStore {
    fn recommendations(&self) -> Vec<TherapyRecommendation>;
    fn on_delete(&mut self, rec: &TherapyRecommendation) -> bool;
    fn on_add_or_edit(&mut self, rec: &TherapyRecommendation) -> bool;
}

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Store keeping recommendations in insertion order; edits replace by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    recs: Vec<TherapyRecommendation>,
}

impl InMemoryStore {
    pub fn new(recs: Vec<TherapyRecommendation>) -> Self {
        Self { recs }
    }
}

impl RecommendationStore for InMemoryStore {
    fn recommendations(&self) -> Vec<TherapyRecommendation> {
        self.recs.clone()
    }

    fn on_delete(&mut self, rec: &TherapyRecommendation) -> bool {
        let before = self.recs.len();
        self.recs.retain(|r| r.id != rec.id);
        let deleted = self.recs.len() < before;
        debug!(id = %rec.id, deleted, "delete recommendation");
        deleted
    }

    fn on_add_or_edit(&mut self, rec: &TherapyRecommendation) -> bool {
        match self.recs.iter_mut().find(|r| r.id == rec.id) {
            Some(existing) => *existing = rec.clone(),
            None => self.recs.push(rec.clone()),
        }
        debug!(id = %rec.id, "stored recommendation");
        true
    }
}
