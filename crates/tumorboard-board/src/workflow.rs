//! Add / edit / delete workflow of the recommendation table.

use tokio::task::JoinHandle;
use tracing::{debug, info};
use tumorboard_common::TherapyRecommendation;
use tumorboard_config::Config;
use tumorboard_literature::ReferenceResolver;

use crate::context::PatientContext;
use crate::export;
use crate::lifecycle::{add_modification, is_empty, new_recommendation};
use crate::rows::{build_row, TableRow};
use crate::store::{Confirm, RecommendationStore, DELETE_PROMPT};

#[derive(Debug, Clone, PartialEq)]
pub struct BoardSettings {
    /// Identity stamped into CREATED / MODIFIED entries.
    pub credentials: String,
    pub reference_name_width: usize,
    pub free_text_reference_width: usize,
}

impl BoardSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            credentials: config.recommender.credentials.clone(),
            reference_name_width: config.display.reference_name_width,
            free_text_reference_width: config.display.free_text_reference_width,
        }
    }
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// The recommendation table of one patient.
///
/// Holds a local copy of the store's recommendations, the open form (if
/// any) and the reference resolver whose cache lives as long as the board.
pub struct RecommendationBoard<S: RecommendationStore> {
    context: PatientContext,
    store: S,
    settings: BoardSettings,
    resolver: ReferenceResolver,
    recommendations: Vec<TherapyRecommendation>,
    selected: Option<TherapyRecommendation>,
    backup: Option<TherapyRecommendation>,
}

impl<S: RecommendationStore> RecommendationBoard<S> {
    pub fn new(
        context: PatientContext,
        store: S,
        resolver: ReferenceResolver,
        settings: BoardSettings,
    ) -> Self {
        let recommendations = store.recommendations();
        Self {
            context,
            store,
            settings,
            resolver,
            recommendations,
            selected: None,
            backup: None,
        }
    }

    pub fn context(&self) -> &PatientContext {
        &self.context
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn resolver(&self) -> &ReferenceResolver {
        &self.resolver
    }

    pub fn recommendations(&self) -> &[TherapyRecommendation] {
        &self.recommendations
    }

    /// The recommendation open in the form, if any.
    pub fn selected(&self) -> Option<&TherapyRecommendation> {
        self.selected.as_ref()
    }

    pub fn selected_mut(&mut self) -> Option<&mut TherapyRecommendation> {
        self.selected.as_mut()
    }

    pub fn open_add_form(&mut self) {
        let rec = new_recommendation(&self.context.patient_id, &self.settings.credentials);
        debug!(id = %rec.id, "open add form");
        self.selected = Some(rec);
    }

    /// Open `rec` for editing, keeping a copy to restore if the edit is abandoned.
    pub fn open_edit_form(&mut self, rec: &TherapyRecommendation) {
        debug!(id = %rec.id, "open edit form");
        self.selected = Some(rec.clone());
        self.backup = Some(rec.clone());
    }

    /// Close the form with its result.
    ///
    /// A missing or empty result hands the backup (if editing) back to the
    /// store; anything else gets a MODIFIED entry and is stored. The table is
    /// refreshed either way.
    pub fn close_form(&mut self, result: Option<TherapyRecommendation>) -> JoinHandle<()> {
        self.selected = None;
        match result.filter(|rec| !is_empty(rec)) {
            Some(mut rec) => {
                add_modification(&mut rec, &self.settings.credentials);
                let accepted = self.store.on_add_or_edit(&rec);
                info!(id = %rec.id, accepted, "saved therapy recommendation");
                // The edit superseded the backup
                self.backup = None;
            }
            None => {
                if let Some(backup) = self.backup.take() {
                    let accepted = self.store.on_add_or_edit(&backup);
                    debug!(id = %backup.id, accepted, "restored backup after empty edit");
                }
            }
        }
        self.refresh()
    }

    /// Delete after user confirmation. Declining is a no-op.
    ///
    /// Returns the refresh burst if the store accepted the deletion.
    pub fn delete(
        &mut self,
        rec: &TherapyRecommendation,
        confirm: &mut dyn Confirm,
    ) -> Option<JoinHandle<()>> {
        if !confirm.confirm(DELETE_PROMPT) {
            debug!(id = %rec.id, "delete cancelled");
            return None;
        }
        if !self.store.on_delete(rec) {
            return None;
        }
        info!(id = %rec.id, "deleted therapy recommendation");
        Some(self.refresh())
    }

    /// Reload from the store and resolve any new citation names in the background.
    pub fn refresh(&mut self) -> JoinHandle<()> {
        self.recommendations = self.store.recommendations();
        self.resolver.refresh_all(&self.recommendations)
    }

    pub fn rows(&self) -> Vec<TableRow> {
        self.recommendations
            .iter()
            .map(|rec| {
                build_row(
                    rec,
                    &self.context,
                    self.resolver.cache(),
                    self.settings.reference_name_width,
                    self.settings.free_text_reference_width,
                )
            })
            .collect()
    }

    pub fn export_json(&self) -> tumorboard_common::Result<String> {
        export::export_json(&self.recommendations)
    }

    pub fn download_filename(&self) -> String {
        export::download_filename(&self.context.patient_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use tumorboard_common::{ModificationKind, Reference};
    use tumorboard_literature::LiteratureLookup;
    use tumorboard_test_utils::{colorectal_mutations, colorectal_sample_order, recommendation};

    use crate::rows::ReferenceCell;
    use crate::store::InMemoryStore;

    struct StaticLookup;

    #[async_trait]
    impl LiteratureLookup for StaticLookup {
        async fn title_for_pmid(&self, pmid: u64) -> tumorboard_common::Result<String> {
            Ok(format!("Title of {pmid}"))
        }
    }

    /// Store that rejects every change.
    struct ReadOnlyStore(Vec<TherapyRecommendation>);

    impl RecommendationStore for ReadOnlyStore {
        fn recommendations(&self) -> Vec<TherapyRecommendation> {
            self.0.clone()
        }
        fn on_delete(&mut self, _rec: &TherapyRecommendation) -> bool {
            false
        }
        fn on_add_or_edit(&mut self, _rec: &TherapyRecommendation) -> bool {
            false
        }
    }

    fn board_with<S: RecommendationStore>(store: S) -> RecommendationBoard<S> {
        let context = PatientContext {
            patient_id: "P1".to_string(),
            mutations: colorectal_mutations(),
            clinical_data: vec![],
            sample_order: colorectal_sample_order(),
        };
        let settings = BoardSettings {
            credentials: "editor@example.org".to_string(),
            ..BoardSettings::default()
        };
        RecommendationBoard::new(context, store, ReferenceResolver::new(Arc::new(StaticLookup)), settings)
    }

    fn board(recs: Vec<TherapyRecommendation>) -> RecommendationBoard<InMemoryStore> {
        board_with(InMemoryStore::new(recs))
    }

    #[tokio::test]
    async fn test_add_flow_stores_with_modification() {
        let mut board = board(vec![]);
        board.open_add_form();
        let mut draft = board.selected().cloned().unwrap();
        draft.comment = vec!["Consider KRAS G12C inhibitor".to_string()];

        board.close_form(Some(draft.clone())).await.unwrap();

        assert!(board.selected().is_none());
        let stored = &board.recommendations()[0];
        assert_eq!(stored.id, draft.id);
        assert_eq!(stored.modifications.len(), 2);
        assert_eq!(stored.modifications[1].modified, ModificationKind::Modified);
    }

    #[tokio::test]
    async fn test_abandoned_add_stores_nothing() {
        let mut board = board(vec![]);
        board.open_add_form();
        let blank = board.selected().cloned();
        board.close_form(blank).await.unwrap();
        assert!(board.recommendations().is_empty());
    }

    #[tokio::test]
    async fn test_empty_edit_restores_backup() {
        let original = recommendation("P1_1", vec![]);
        let mut board = board(vec![original.clone()]);
        board.open_edit_form(&original);
        if let Some(selected) = board.selected_mut() {
            *selected = TherapyRecommendation {
                id: original.id.clone(),
                comment: vec![],
                reasoning: Default::default(),
                evidence_level: Default::default(),
                treatments: vec![],
                references: vec![],
                modifications: original.modifications.clone(),
            };
        }
        let emptied = board.selected().cloned();

        board.close_form(emptied).await.unwrap();

        assert_eq!(board.recommendations(), &[original]);
    }

    #[tokio::test]
    async fn test_cancelled_edit_restores_backup() {
        let original = recommendation("P1_1", vec![]);
        let mut board = board(vec![original.clone()]);
        board.open_edit_form(&original);
        board.close_form(None).await.unwrap();
        assert_eq!(board.recommendations(), &[original]);
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let rec = recommendation("P1_1", vec![]);
        let mut board = board(vec![rec.clone()]);

        let mut decline = |_: &str| false;
        assert!(board.delete(&rec, &mut decline).is_none());
        assert_eq!(board.store().recommendations().len(), 1);

        let mut accept = |prompt: &str| prompt == DELETE_PROMPT;
        board.delete(&rec, &mut accept).unwrap().await.unwrap();
        assert!(board.recommendations().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_delete_keeps_local_state() {
        let rec = recommendation("P1_1", vec![]);
        let mut board = board_with(ReadOnlyStore(vec![rec.clone()]));
        let mut accept = |_: &str| true;
        assert!(board.delete(&rec, &mut accept).is_none());
        assert_eq!(board.recommendations().len(), 1);
    }

    #[tokio::test]
    async fn test_refresh_resolves_reference_labels() {
        let rec = recommendation("P1_1", vec![Reference::from_pmid(12345)]);
        let mut board = board(vec![rec]);

        assert_eq!(board.rows()[0].references[0].to_string(), "[12345] ");
        board.refresh().await.unwrap();

        match &board.rows()[0].references[0] {
            ReferenceCell::Link { label, .. } => assert_eq!(label, "Title of 12345"),
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn test_download_filename() {
        let board = board(vec![]);
        assert_eq!(board.download_filename(), "TherapyRecommendation_P1.json");
    }
}
