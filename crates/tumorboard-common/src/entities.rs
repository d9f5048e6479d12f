//! Therapy recommendation records and the patient data they are matched against.
//! Field names follow the JSON exchanged with the hosting portal (camelCase).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::evidence::EvidenceLevel;

// ---------------------------------------------------------------------------
// Patient data (external, read-only)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationGene {
    pub hugo_gene_symbol: String,
}

/// A somatic mutation called in one sample of the patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mutation {
    pub sample_id: String,
    pub entrez_gene_id: i64,
    #[serde(default)]
    pub protein_change: String,
    pub gene: MutationGene,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalDataItem {
    pub attribute: String,
    pub value: String,
}

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

/// A gene plus optional protein change used to select samples.
/// `protein_change == None` means any change in the gene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneticAlteration {
    #[serde(default)]
    pub hugo_symbol: String,
    #[serde(default)]
    pub entrez_gene_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_change: Option<String>,
}

impl GeneticAlteration {
    /// Protein change, with absent treated as the empty string.
    pub fn protein_change_or_empty(&self) -> &str {
        self.protein_change.as_deref().unwrap_or("")
    }

    /// `"KRAS G12D"`, or `"KRAS any"` when no protein change is given.
    pub fn label(&self) -> String {
        let change = match self.protein_change.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => "any",
        };
        format!("{} {}", self.hugo_symbol, change)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reasoning {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genetic_alterations: Option<Vec<GeneticAlteration>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genetic_alterations_missing: Option<Vec<GeneticAlteration>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_data: Option<Vec<ClinicalDataItem>>,
}

impl Reasoning {
    pub fn positive(&self) -> &[GeneticAlteration] {
        self.genetic_alterations.as_deref().unwrap_or(&[])
    }

    pub fn negative(&self) -> &[GeneticAlteration] {
        self.genetic_alterations_missing.as_deref().unwrap_or(&[])
    }

    pub fn clinical(&self) -> &[ClinicalDataItem] {
        self.clinical_data.as_deref().unwrap_or(&[])
    }

    /// True when no field carries any entry.
    pub fn is_empty(&self) -> bool {
        self.positive().is_empty() && self.negative().is_empty() && self.clinical().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Treatment {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ncit_code: Option<String>,
}

/// A literature citation, by PubMed id and/or free-text name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmid: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Reference {
    pub fn from_pmid(pmid: u64) -> Self {
        Self { pmid: Some(pmid), name: None }
    }

    pub fn from_name(name: impl Into<String>) -> Self {
        Self { pmid: None, name: Some(name.into()) }
    }

    /// The PubMed id, if present and non-zero.
    pub fn valid_pmid(&self) -> Option<u64> {
        self.pmid.filter(|&p| p > 0)
    }

    /// The free-text name, if present and non-empty.
    pub fn non_empty_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModificationKind {
    Created,
    Modified,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommender {
    pub credentials: String,
}

/// One entry of a recommendation's append-only audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modification {
    pub modified: ModificationKind,
    pub recommender: Recommender,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapyRecommendation {
    pub id: String,
    #[serde(default)]
    pub comment: Vec<String>,
    #[serde(default)]
    pub reasoning: Reasoning,
    #[serde(default)]
    pub evidence_level: EvidenceLevel,
    #[serde(default)]
    pub treatments: Vec<Treatment>,
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(default)]
    pub modifications: Vec<Modification>,
}
