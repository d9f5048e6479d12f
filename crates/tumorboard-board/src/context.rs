//! Patient data the board is rendered against.

use serde::{Deserialize, Serialize};
use tumorboard_common::{ClinicalDataItem, Mutation, TherapyRecommendation};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientContext {
    pub patient_id: String,
    #[serde(default)]
    pub mutations: Vec<Mutation>,
    #[serde(default)]
    pub clinical_data: Vec<ClinicalDataItem>,
    /// Canonical sample order from the sample manager.
    #[serde(default)]
    pub sample_order: Vec<String>,
}

/// A patient context plus its stored recommendations, as read from disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientBundle {
    #[serde(flatten)]
    pub context: PatientContext,
    #[serde(default)]
    pub therapy_recommendations: Vec<TherapyRecommendation>,
}
