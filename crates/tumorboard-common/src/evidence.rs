//! OncoKB-style levels of evidence attached to a therapy recommendation.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvidenceLevel {
    #[default]
    #[serde(rename = "NA")]
    NotAssigned,
    #[serde(rename = "1")]
    Level1,
    #[serde(rename = "2")]
    Level2,
    #[serde(rename = "2A")]
    Level2A,
    #[serde(rename = "2B")]
    Level2B,
    #[serde(rename = "3A")]
    Level3A,
    #[serde(rename = "3B")]
    Level3B,
    #[serde(rename = "4")]
    Level4,
    #[serde(rename = "R1")]
    R1,
    #[serde(rename = "R2")]
    R2,
}

impl EvidenceLevel {
    pub const ALL: [EvidenceLevel; 10] = [
        EvidenceLevel::NotAssigned,
        EvidenceLevel::Level1,
        EvidenceLevel::Level2,
        EvidenceLevel::Level2A,
        EvidenceLevel::Level2B,
        EvidenceLevel::Level3A,
        EvidenceLevel::Level3B,
        EvidenceLevel::Level4,
        EvidenceLevel::R1,
        EvidenceLevel::R2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceLevel::NotAssigned => "NA",
            EvidenceLevel::Level1      => "1",
            EvidenceLevel::Level2      => "2",
            EvidenceLevel::Level2A     => "2A",
            EvidenceLevel::Level2B     => "2B",
            EvidenceLevel::Level3A     => "3A",
            EvidenceLevel::Level3B     => "3B",
            EvidenceLevel::Level4      => "4",
            EvidenceLevel::R1          => "R1",
            EvidenceLevel::R2          => "R2",
        }
    }

    /// Plain-text description shown next to the level. `None` for NA.
    pub fn description(&self) -> Option<&'static str> {
        let desc = match self {
            EvidenceLevel::NotAssigned => return None,
            EvidenceLevel::Level1 =>
                "FDA-recognized biomarker predictive of response to an FDA-approved drug in this indication",
            EvidenceLevel::Level2 =>
                "Standard care biomarker recommended by the NCCN or other expert panels predictive of response to an FDA-approved drug in this indication",
            EvidenceLevel::Level2A =>
                "Standard care biomarker predictive of response to an FDA-approved drug in this indication",
            EvidenceLevel::Level2B =>
                "Standard care biomarker predictive of response to an FDA-approved drug in another indication, but not standard care for this indication",
            EvidenceLevel::Level3A =>
                "Compelling clinical evidence supports the biomarker as being predictive of response to a drug in this indication",
            EvidenceLevel::Level3B =>
                "Compelling clinical evidence supports the biomarker as being predictive of response to a drug in another indication",
            EvidenceLevel::Level4 =>
                "Compelling biological evidence supports the biomarker as being predictive of response to a drug",
            EvidenceLevel::R1 =>
                "Standard care biomarker predictive of resistance to an FDA-approved drug in this indication",
            EvidenceLevel::R2 =>
                "Compelling clinical evidence supports the biomarker as being predictive of resistance to a drug",
        };
        Some(desc)
    }
}

impl fmt::Display for EvidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_assigned() {
        assert_eq!(EvidenceLevel::default(), EvidenceLevel::NotAssigned);
        assert!(EvidenceLevel::NotAssigned.description().is_none());
    }

    #[test]
    fn test_every_assigned_level_has_description() {
        for level in EvidenceLevel::ALL.iter().skip(1) {
            assert!(level.description().is_some(), "missing description for {level}");
        }
    }

    #[test]
    fn test_wire_names_match_display() {
        for level in EvidenceLevel::ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
        let parsed: EvidenceLevel = serde_json::from_str("\"2B\"").unwrap();
        assert_eq!(parsed, EvidenceLevel::Level2B);
    }
}
