//! Table row view model.

use std::fmt;

use serde::Serialize;
use tumorboard_common::text::truncate_opt;
use tumorboard_common::{Reference, TherapyRecommendation};
use tumorboard_literature::{display_name, ReferenceNameCache};
use tumorboard_matcher::{summarise_reasoning, ReasoningSummary};

use crate::context::PatientContext;

pub const PUBMED_RECORD_URL: &str = "https://www.ncbi.nlm.nih.gov/pubmed/";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReferenceCell {
    /// A PubMed citation, labelled with its (possibly still empty) name.
    Link { pmid: u64, url: String, label: String },
    /// A free-text citation.
    Text { text: String },
}

impl fmt::Display for ReferenceCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceCell::Link { pmid, label, .. } => write!(f, "[{}] {}", pmid, label),
            ReferenceCell::Text { text } => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub id: String,
    pub therapies: Vec<String>,
    pub comment: Vec<String>,
    pub reasoning: ReasoningSummary,
    /// `"Level 3A"`.
    pub evidence: String,
    pub evidence_description: Option<String>,
    pub references: Vec<ReferenceCell>,
}

fn reference_cell(
    reference: &Reference,
    cache: &ReferenceNameCache,
    name_width: usize,
    free_text_width: usize,
) -> ReferenceCell {
    match reference.valid_pmid() {
        Some(pmid) => ReferenceCell::Link {
            pmid,
            url: format!("{}{}", PUBMED_RECORD_URL, pmid),
            label: display_name(reference, cache, name_width),
        },
        None => ReferenceCell::Text {
            text: truncate_opt(reference.name.as_deref(), free_text_width, true),
        },
    }
}

pub fn build_row(
    rec: &TherapyRecommendation,
    context: &PatientContext,
    cache: &ReferenceNameCache,
    name_width: usize,
    free_text_width: usize,
) -> TableRow {
    TableRow {
        id: rec.id.clone(),
        therapies: rec.treatments.iter().map(|t| t.name.clone()).collect(),
        comment: rec.comment.clone(),
        reasoning: summarise_reasoning(&rec.reasoning, &context.mutations, &context.sample_order),
        evidence: format!("Level {}", rec.evidence_level),
        evidence_description: rec.evidence_level.description().map(String::from),
        references: rec
            .references
            .iter()
            .map(|r| reference_cell(r, cache, name_width, free_text_width))
            .collect(),
    }
}
