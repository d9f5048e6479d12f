//! tumorboard-common — Shared types, errors, and helpers used across all Tumorboard crates.

pub mod error;
pub mod entities;
pub mod evidence;
pub mod sandbox;
pub mod text;

// Re-export commonly used types
pub use entities::{
    ClinicalDataItem, GeneticAlteration, Modification, ModificationKind, Mutation, MutationGene,
    Reasoning, Recommender, Reference, TherapyRecommendation, Treatment,
};
pub use evidence::EvidenceLevel;
pub use error::{Result, TumorboardError};
