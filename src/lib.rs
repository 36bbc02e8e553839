//! Facade crate for the Brewfind recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the optional
//! JSON-backed skip store behind a feature flag.

#![forbid(unsafe_code)]

pub use brewfind_core::{
    Candidate, CandidateFilter, CandidateId, CandidateScorer, EngineError, InvalidWeights,
    MovementState, MovementThresholds, RecommendationEngine, RecommendationScorer, ScoreWeights,
    ScorerConfig, SkipStore, UserState, geo_math,
};

#[cfg(feature = "store-json")]
pub use brewfind_store::{FileSkipStore, FileSkipStoreError};
