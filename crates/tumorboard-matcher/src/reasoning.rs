//! Per-recommendation reasoning view: which samples support a recommendation
//! and which carry alterations it rules out.

use serde::Serialize;
use tumorboard_common::{GeneticAlteration, Mutation, Reasoning};

use crate::alterations::{match_negative, match_positive};
use crate::ordering::{order_sample_ids, SampleOrder};

/// Caution shown above samples that carry a forbidden alteration.
pub const NEGATIVE_CAUTION: &str = "Attention: Alteration in samples:";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlterationSummary {
    /// `"KRAS G12D"` or `"KRAS any"`.
    pub label: String,
    pub tooltip: String,
    /// Ordered sample ids. Only filled for negative alterations.
    pub samples: Vec<String>,
    /// [`NEGATIVE_CAUTION`] when a sample carries a forbidden alteration.
    pub caution: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReasoningSummary {
    pub positive: Vec<AlterationSummary>,
    /// Samples matching all positive alterations; `None` without positive criteria.
    pub positive_samples: Option<Vec<String>>,
    pub negative: Vec<AlterationSummary>,
    /// `"attribute: value"` lines.
    pub clinical: Vec<String>,
}

impl ReasoningSummary {
    /// True if any sample carries an alteration the recommendation rules out.
    pub fn has_negative_hits(&self) -> bool {
        self.negative.iter().any(|n| !n.samples.is_empty())
    }
}

pub fn tooltip_text(alteration: &GeneticAlteration) -> String {
    let change = match alteration.protein_change.as_deref() {
        Some(c) if !c.is_empty() => c,
        _ => "any",
    };
    format!(
        "Genomic selection specified in the therapy recommendation: {} (ID: {}) {}",
        alteration.hugo_symbol, alteration.entrez_gene_id, change
    )
}

fn in_canonical_order(sample_ids: Vec<String>, order: &dyn SampleOrder) -> Vec<String> {
    if sample_ids.len() > 1 {
        order_sample_ids(&sample_ids, &order.sample_ids_in_order())
    } else {
        sample_ids
    }
}

fn describe(alteration: &GeneticAlteration, samples: Vec<String>) -> AlterationSummary {
    let caution = (!samples.is_empty()).then(|| NEGATIVE_CAUTION.to_string());
    AlterationSummary {
        label: alteration.label(),
        tooltip: tooltip_text(alteration),
        samples,
        caution,
    }
}

pub fn summarise_reasoning(
    reasoning: &Reasoning,
    mutations: &[Mutation],
    order: &dyn SampleOrder,
) -> ReasoningSummary {
    let positive_criteria = reasoning.positive();

    let positive_samples = (!positive_criteria.is_empty())
        .then(|| in_canonical_order(match_positive(positive_criteria, mutations), order));

    let negative = reasoning
        .negative()
        .iter()
        .map(|alt| describe(alt, in_canonical_order(match_negative(alt, mutations), order)))
        .collect();

    ReasoningSummary {
        positive: positive_criteria.iter().map(|alt| describe(alt, vec![])).collect(),
        positive_samples,
        negative,
        clinical: reasoning
            .clinical()
            .iter()
            .map(|c| format!("{}: {}", c.attribute, c.value))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use tumorboard_test_utils::{alteration, colorectal_mutations, colorectal_sample_order, recommendation};

    /// Sample manager that reverses the fixture order and counts lookups.
    struct CountingOrder {
        calls: Cell<usize>,
    }

    impl SampleOrder for CountingOrder {
        fn sample_ids_in_order(&self) -> Vec<String> {
            self.calls.set(self.calls.get() + 1);
            let mut order = colorectal_sample_order();
            order.reverse();
            order
        }
    }

    #[test]
    fn test_summary_of_filled_recommendation() {
        let rec = recommendation("P1_1", vec![]);
        let summary = summarise_reasoning(&rec.reasoning, &colorectal_mutations(), &colorectal_sample_order());

        assert_eq!(summary.positive.len(), 1);
        assert_eq!(summary.positive[0].label, "KRAS G12D");
        assert_eq!(
            summary.positive_samples,
            Some(vec!["P1-T1".to_string(), "P1-T2".to_string(), "P1-R1".to_string()])
        );
        assert_eq!(summary.negative[0].label, "BRAF V600E");
        assert_eq!(summary.negative[0].samples, vec!["P1-R1".to_string()]);
        assert_eq!(summary.negative[0].caution.as_deref(), Some(NEGATIVE_CAUTION));
        assert_eq!(summary.positive[0].caution, None);
        assert!(summary.has_negative_hits());
        assert_eq!(summary.clinical, vec!["Cancer type: Colorectal adenocarcinoma".to_string()]);
    }

    #[test]
    fn test_positive_samples_follow_canonical_order() {
        let order = CountingOrder { calls: Cell::new(0) };
        let reasoning = Reasoning {
            genetic_alterations: Some(vec![alteration("KRAS", 3845, Some("G12D"))]),
            ..Default::default()
        };
        let summary = summarise_reasoning(&reasoning, &colorectal_mutations(), &order);
        assert_eq!(
            summary.positive_samples,
            Some(vec!["P1-R1".to_string(), "P1-T2".to_string(), "P1-T1".to_string()])
        );
        assert_eq!(order.calls.get(), 1);
    }

    #[test]
    fn test_single_hit_skips_sample_order_lookup() {
        let order = CountingOrder { calls: Cell::new(0) };
        let reasoning = Reasoning {
            genetic_alterations_missing: Some(vec![alteration("BRAF", 673, Some("V600E"))]),
            ..Default::default()
        };
        let summary = summarise_reasoning(&reasoning, &colorectal_mutations(), &order);
        assert_eq!(summary.negative[0].samples, vec!["P1-R1".to_string()]);
        assert_eq!(order.calls.get(), 0);
    }

    #[test]
    fn test_no_positive_criteria_means_no_sample_list() {
        let summary = summarise_reasoning(&Reasoning::default(), &colorectal_mutations(), &colorectal_sample_order());
        assert_eq!(summary.positive_samples, None);
        assert!(!summary.has_negative_hits());
    }

    #[test]
    fn test_caution_only_for_carried_alterations() {
        let reasoning = Reasoning {
            genetic_alterations_missing: Some(vec![
                alteration("BRAF", 673, Some("V600E")),
                alteration("EGFR", 1956, Some("L858R")),
            ]),
            ..Default::default()
        };
        let summary = summarise_reasoning(&reasoning, &colorectal_mutations(), &colorectal_sample_order());

        assert_eq!(summary.negative[0].caution.as_deref(), Some(NEGATIVE_CAUTION));
        assert_eq!(summary.negative[1].caution, None);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["negative"][0]["caution"], NEGATIVE_CAUTION);
        assert!(json["negative"][1]["caution"].is_null());
    }

    #[test]
    fn test_tooltip_text() {
        assert_eq!(
            tooltip_text(&alteration("KRAS", 3845, None)),
            "Genomic selection specified in the therapy recommendation: KRAS (ID: 3845) any"
        );
    }
}
