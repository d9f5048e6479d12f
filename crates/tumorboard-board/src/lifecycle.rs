//! Creation and modification of therapy recommendations.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use tumorboard_common::{
    EvidenceLevel, Modification, ModificationKind, Reasoning, Recommender, TherapyRecommendation,
};

fn modification(kind: ModificationKind, credentials: &str, at: DateTime<Utc>) -> Modification {
    Modification {
        modified: kind,
        recommender: Recommender { credentials: credentials.to_string() },
        // Millisecond precision, matching the ids and the portal's timestamps
        timestamp: at.trunc_subsecs(3),
    }
}

/// A blank recommendation with id `<patient_id>_<unix millis>` and one CREATED entry.
pub fn new_recommendation(patient_id: &str, credentials: &str) -> TherapyRecommendation {
    new_recommendation_at(patient_id, credentials, Utc::now())
}

pub fn new_recommendation_at(
    patient_id: &str,
    credentials: &str,
    now: DateTime<Utc>,
) -> TherapyRecommendation {
    TherapyRecommendation {
        id: format!("{}_{}", patient_id, now.timestamp_millis()),
        comment: vec![],
        reasoning: Reasoning::default(),
        evidence_level: EvidenceLevel::NotAssigned,
        treatments: vec![],
        references: vec![],
        modifications: vec![modification(ModificationKind::Created, credentials, now)],
    }
}

/// Like [`new_recommendation`], with a comment noting the creation time.
pub fn sample_recommendation(patient_id: &str, credentials: &str) -> TherapyRecommendation {
    let mut rec = new_recommendation(patient_id, credentials);
    let created = rec.modifications[0]
        .timestamp
        .to_rfc3339_opts(SecondsFormat::Millis, true);
    rec.comment = vec![format!("Created: {}", created)];
    rec
}

/// Append a MODIFIED entry. Earlier entries are left untouched.
pub fn add_modification(rec: &mut TherapyRecommendation, credentials: &str) {
    add_modification_at(rec, credentials, Utc::now());
}

pub fn add_modification_at(rec: &mut TherapyRecommendation, credentials: &str, at: DateTime<Utc>) {
    rec.modifications
        .push(modification(ModificationKind::Modified, credentials, at));
}

/// True if the recommendation carries no user content and can be discarded.
///
/// Modifications and the id are bookkeeping and do not count as content.
pub fn is_empty(rec: &TherapyRecommendation) -> bool {
    rec.comment.iter().all(|c| c.trim().is_empty())
        && rec.evidence_level == EvidenceLevel::NotAssigned
        && rec.reasoning.is_empty()
        && rec.treatments.is_empty()
        && rec.references.is_empty()
}
