//! tumorboard-literature — Citation display names for therapy recommendations.
//! - PubMed E-utilities esummary lookups
//! - Process-lifetime pmid → title cache (first resolution wins)
//! - Background refresh of every reference in a recommendation list

pub mod cache;
pub mod esummary;
pub mod lookup;
pub mod resolver;

pub use cache::ReferenceNameCache;
pub use esummary::EsummaryClient;
pub use lookup::LiteratureLookup;
pub use resolver::{display_name, ReferenceResolved, ReferenceResolver};
