//! tumorboard-matcher — Matches recommendation criteria against patient samples.
//!
//! All functions here are pure and synchronous; they are called on every row
//! build and never fail for well-formed input.

pub mod alterations;
pub mod ordering;
pub mod reasoning;

pub use alterations::{match_negative, match_positive};
pub use ordering::{order_sample_ids, SampleOrder};
pub use reasoning::{summarise_reasoning, AlterationSummary, ReasoningSummary};
