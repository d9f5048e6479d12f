//! JSON download of a patient's recommendations.

use serde_json::{Map, Value};
use tumorboard_common::{Result, TherapyRecommendation};

/// Recommendations as a JSON object keyed by list index (`"0"`, `"1"`, …).
pub fn flatten(recs: &[TherapyRecommendation]) -> Result<Map<String, Value>> {
    recs.iter()
        .enumerate()
        .map(|(index, rec)| Ok((index.to_string(), serde_json::to_value(rec)?)))
        .collect()
}

pub fn export_json(recs: &[TherapyRecommendation]) -> Result<String> {
    Ok(serde_json::to_string(&flatten(recs)?)?)
}

pub fn download_filename(patient_id: &str) -> String {
    format!("TherapyRecommendation_{}.json", patient_id)
}
