//! End-to-end board flow over the demo patient bundle.
//!
//! Literature lookups are served from memory; nothing here touches NCBI.

use std::sync::Arc;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use tumorboard_board::{
    BoardSettings, InMemoryStore, PatientBundle, RecommendationBoard, ReferenceCell,
};
use tumorboard_common::{ModificationKind, Result, TumorboardError};
use tumorboard_literature::{LiteratureLookup, ReferenceResolver};
use tumorboard_matcher::reasoning::NEGATIVE_CAUTION;

const DEMO_BUNDLE: &str = include_str!("../../../demos/patient_P1.json");

struct InMemoryPubMed;

#[async_trait]
impl LiteratureLookup for InMemoryPubMed {
    async fn title_for_pmid(&self, pmid: u64) -> Result<String> {
        match pmid {
            22663011 => Ok("Improved survival with MEK inhibition in BRAF-mutated melanoma".to_string()),
            _ => Err(TumorboardError::Client(format!("unknown pmid {pmid}"))),
        }
    }
}

fn demo_board() -> RecommendationBoard<InMemoryStore> {
    let bundle: PatientBundle = serde_json::from_str(DEMO_BUNDLE).unwrap();
    RecommendationBoard::new(
        bundle.context,
        InMemoryStore::new(bundle.therapy_recommendations),
        ReferenceResolver::new(Arc::new(InMemoryPubMed)),
        BoardSettings::default(),
    )
}

#[tokio::test]
async fn test_demo_bundle_rows() {
    let mut board = demo_board();
    board.refresh().await.unwrap();

    let rows = board.rows();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];

    assert_eq!(row.therapies, vec!["Trametinib".to_string()]);
    assert_eq!(row.evidence, "Level 3B");
    assert_eq!(
        row.reasoning.positive_samples,
        Some(vec!["P1-T1".to_string(), "P1-T2".to_string(), "P1-R1".to_string()])
    );
    assert!(row.reasoning.has_negative_hits());
    assert_eq!(row.reasoning.negative[0].samples, vec!["P1-R1".to_string()]);
    assert_eq!(row.reasoning.negative[0].caution.as_deref(), Some(NEGATIVE_CAUTION));
    assert_eq!(
        row.reasoning.clinical,
        vec!["Cancer type: Colorectal adenocarcinoma".to_string()]
    );

    match &row.references[0] {
        ReferenceCell::Link { pmid, label, .. } => {
            assert_eq!(*pmid, 22663011);
            assert_eq!(label, "Improved survival with MEK inhibition [...]");
        }
        other => panic!("expected link, got {other:?}"),
    }
    assert_eq!(
        row.references[1].to_string(),
        "Institutional tumour board consensus, 2020"
    );
}

#[tokio::test]
async fn test_edit_then_export() {
    let mut board = demo_board();
    let original = board.recommendations()[0].clone();

    board.open_edit_form(&original);
    let mut edited = board.selected().cloned().unwrap();
    edited.comment.push("Re-discuss after next CT".to_string());
    board.close_form(Some(edited)).await.unwrap();

    let stored = &board.recommendations()[0];
    assert_eq!(stored.id, original.id);
    assert_eq!(stored.comment.len(), 2);
    assert_eq!(stored.modifications.last().map(|m| m.modified), Some(ModificationKind::Modified));

    let exported: serde_json::Value = serde_json::from_str(&board.export_json().unwrap()).unwrap();
    assert_eq!(exported["0"]["comment"][1], "Re-discuss after next CT");
    assert_eq!(board.download_filename(), "TherapyRecommendation_P1.json");
}

#[tokio::test]
async fn test_unknown_pmid_resolves_to_empty_label() {
    let bundle: PatientBundle = serde_json::from_str(DEMO_BUNDLE).unwrap();
    let mut recs = bundle.therapy_recommendations;
    recs[0].references = vec![tumorboard_common::Reference::from_pmid(1)];
    let mut board = RecommendationBoard::new(
        bundle.context,
        InMemoryStore::new(recs),
        ReferenceResolver::new(Arc::new(InMemoryPubMed)),
        BoardSettings::default(),
    );

    board.refresh().await.unwrap();

    assert_eq!(board.resolver().cache().get(1), Some(String::new()));
    assert_eq!(board.rows()[0].references[0].to_string(), "[1] ");
}
