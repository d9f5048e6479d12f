//! tumorboard-board — The therapy recommendation table of one patient.
//! - Recommendation lifecycle (factory, modification log, emptiness)
//! - Add / edit / delete workflow against a parent-owned store
//! - Row view model with matched samples and resolved citations
//! - JSON download

pub mod context;
pub mod export;
pub mod lifecycle;
pub mod rows;
pub mod store;
pub mod workflow;

pub use context::{PatientBundle, PatientContext};
pub use rows::{ReferenceCell, TableRow};
pub use store::{Confirm, InMemoryStore, RecommendationStore, DELETE_PROMPT};
pub use workflow::{BoardSettings, RecommendationBoard};
