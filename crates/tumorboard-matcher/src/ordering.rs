//! Canonical ordering of sample ids.

/// Source of the patient's canonical sample order (the sample manager).
pub trait SampleOrder {
    fn sample_ids_in_order(&self) -> Vec<String>;
}

impl SampleOrder for Vec<String> {
    fn sample_ids_in_order(&self) -> Vec<String> {
        self.clone()
    }
}

/// Sort `sample_ids` into canonical order.
///
/// With more than one id, the result is `canonical_order` filtered down to
/// members of `sample_ids`; ids unknown to the canonical order are dropped.
/// A single id is returned unchanged without consulting the order.
pub fn order_sample_ids(sample_ids: &[String], canonical_order: &[String]) -> Vec<String> {
    if sample_ids.len() <= 1 {
        return sample_ids.to_vec();
    }
    canonical_order
        .iter()
        .filter(|id| sample_ids.contains(*id))
        .cloned()
        .collect()
}
