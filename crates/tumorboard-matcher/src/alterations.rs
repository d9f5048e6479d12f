//! Alteration-to-sample matching.
//!
//! Positive criteria are keyed by `(entrez gene id, protein change)`; negative
//! criteria by `(hugo symbol, protein change)`. The asymmetry is inherited from
//! how recommendations are authored: forbidden alterations are frequently
//! entered by symbol only, without a reliable entrez id.

use std::collections::{HashMap, HashSet};

use tracing::trace;
use tumorboard_common::{GeneticAlteration, Mutation};

/// Mutations grouped by sample, in order of each sample's first appearance.
fn group_by_sample(mutations: &[Mutation]) -> Vec<(&str, Vec<&Mutation>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&Mutation>)> = Vec::new();
    for m in mutations {
        let slot = *index.entry(m.sample_id.as_str()).or_insert_with(|| {
            groups.push((m.sample_id.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(m);
    }
    groups
}

/// Samples whose mutations cover every criterion.
///
/// A criterion without a protein change only matches a mutation whose protein
/// change is itself empty; "any change in the gene" is not expanded here. An
/// entrez id of 0 on a criterion counts as missing and matches nothing.
/// Returns an empty list for empty `criteria`.
pub fn match_positive(criteria: &[GeneticAlteration], mutations: &[Mutation]) -> Vec<String> {
    if criteria.is_empty() {
        return vec![];
    }

    let wanted: Vec<(Option<i64>, &str)> = criteria
        .iter()
        .map(|c| {
            let gene = (c.entrez_gene_id != 0).then_some(c.entrez_gene_id);
            (gene, c.protein_change_or_empty())
        })
        .collect();

    let fitting: Vec<String> = group_by_sample(mutations)
        .into_iter()
        .filter(|(_, sample_mutations)| {
            let present: HashSet<(Option<i64>, &str)> = sample_mutations
                .iter()
                .map(|m| (Some(m.entrez_gene_id), m.protein_change.as_str()))
                .collect();
            wanted.iter().all(|key| present.contains(key))
        })
        .map(|(sample_id, _)| sample_id.to_string())
        .collect();

    trace!(n_criteria = criteria.len(), ?fitting, "positive alteration match");
    fitting
}

/// Samples carrying a forbidden alteration.
///
/// Returns an empty list when the criterion has no hugo symbol.
pub fn match_negative(criterion: &GeneticAlteration, mutations: &[Mutation]) -> Vec<String> {
    if criterion.hugo_symbol.is_empty() {
        return vec![];
    }

    let forbidden = (criterion.hugo_symbol.as_str(), criterion.protein_change_or_empty());

    group_by_sample(mutations)
        .into_iter()
        .filter(|(_, sample_mutations)| {
            sample_mutations.iter().any(|m| {
                (m.gene.hugo_gene_symbol.as_str(), m.protein_change.as_str()) == forbidden
            })
        })
        .map(|(sample_id, _)| sample_id.to_string())
        .collect()
}
