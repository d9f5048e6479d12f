//! Fixture builders shared by the workspace's unit tests.

use chrono::{TimeZone, Utc};
use tumorboard_common::{
    ClinicalDataItem, EvidenceLevel, GeneticAlteration, Modification, ModificationKind, Mutation,
    MutationGene, Reasoning, Recommender, Reference, TherapyRecommendation, Treatment,
};

pub const TEST_CREDENTIALS: &str = "tumorboard@example.org";

pub fn mutation(sample_id: &str, hugo: &str, entrez: i64, protein_change: &str) -> Mutation {
    Mutation {
        sample_id: sample_id.to_string(),
        entrez_gene_id: entrez,
        protein_change: protein_change.to_string(),
        gene: MutationGene { hugo_gene_symbol: hugo.to_string() },
    }
}

pub fn alteration(hugo: &str, entrez: i64, protein_change: Option<&str>) -> GeneticAlteration {
    GeneticAlteration {
        hugo_symbol: hugo.to_string(),
        entrez_gene_id: entrez,
        protein_change: protein_change.map(String::from),
    }
}

/// Two tumour samples and one relapse sample of a colorectal patient.
///
/// | sample | mutations                      |
/// |--------|--------------------------------|
/// | P1-T1  | KRAS G12D, TP53 R175H          |
/// | P1-T2  | KRAS G12D, PIK3CA E545K        |
/// | P1-R1  | KRAS G12D, TP53 R175H, BRAF V600E |
pub fn colorectal_mutations() -> Vec<Mutation> {
    vec![
        mutation("P1-T1", "KRAS", 3845, "G12D"),
        mutation("P1-T1", "TP53", 7157, "R175H"),
        mutation("P1-T2", "KRAS", 3845, "G12D"),
        mutation("P1-T2", "PIK3CA", 5290, "E545K"),
        mutation("P1-R1", "BRAF", 673, "V600E"),
        mutation("P1-R1", "KRAS", 3845, "G12D"),
        mutation("P1-R1", "TP53", 7157, "R175H"),
    ]
}

/// Canonical sample order as the sample manager reports it.
pub fn colorectal_sample_order() -> Vec<String> {
    ["P1-T1", "P1-T2", "P1-R1"].iter().map(|s| s.to_string()).collect()
}

pub fn created(credentials: &str) -> Modification {
    Modification {
        modified: ModificationKind::Created,
        recommender: Recommender { credentials: credentials.to_string() },
        timestamp: Utc.with_ymd_and_hms(2020, 1, 26, 0, 53, 20).unwrap(),
    }
}

/// A filled-in recommendation with the given references.
pub fn recommendation(id: &str, references: Vec<Reference>) -> TherapyRecommendation {
    TherapyRecommendation {
        id: id.to_string(),
        comment: vec!["Consider MEK inhibition".to_string()],
        reasoning: Reasoning {
            genetic_alterations: Some(vec![alteration("KRAS", 3845, Some("G12D"))]),
            genetic_alterations_missing: Some(vec![alteration("BRAF", 673, Some("V600E"))]),
            clinical_data: Some(vec![ClinicalDataItem {
                attribute: "Cancer type".to_string(),
                value: "Colorectal adenocarcinoma".to_string(),
            }]),
        },
        evidence_level: EvidenceLevel::Level3A,
        treatments: vec![Treatment { name: "Trametinib".to_string(), ncit_code: None }],
        references,
        modifications: vec![created(TEST_CREDENTIALS)],
    }
}
