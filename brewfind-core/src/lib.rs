//! Core domain logic for the Brewfind recommendation engine.
//!
//! Brewfind takes a raw set of nearby coffee-shop candidates plus live
//! sensor state (position, optional compass heading, movement
//! classification) and produces an ordered, continuously-updating
//! recommendation with a skip-and-advance interaction model.
//!
//! The crate is pure computation: search providers, location providers,
//! and presentation all live with the host. The only durable state is the
//! skip set, reached through the [`SkipStore`] contract.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use brewfind_core::test_support::MemorySkipStore;
//! use brewfind_core::{
//!     Candidate, CandidateFilter, MovementState, RecommendationEngine, RecommendationScorer,
//!     UserState,
//! };
//!
//! let mut engine = RecommendationEngine::new(
//!     MemorySkipStore::default(),
//!     CandidateFilter::default(),
//!     RecommendationScorer::default(),
//! );
//!
//! engine.ingest(vec![
//!     Candidate::new("Corner Cafe", Coord { x: -122.4194, y: 37.7750 }),
//!     Candidate::new("Roastery", Coord { x: -122.4194, y: 37.7790 }),
//! ]);
//! let here = Coord { x: -122.4194, y: 37.7749 };
//! engine.rerank(&UserState::new(here, MovementState::Walking));
//!
//! assert!(engine.recommendation().is_some());
//! engine.reject_current().unwrap();
//! assert_eq!(engine.recommendation().map(|c| c.name.as_str()), Some("Roastery"));
//! ```

#![forbid(unsafe_code)]

pub mod candidate;
pub mod engine;
pub mod filter;
pub mod geo_math;
pub mod movement;
pub mod scorer;
pub mod skip_store;
pub mod test_support;
pub mod user_state;

pub use candidate::{Candidate, CandidateId};
pub use engine::{EngineError, RecommendationEngine};
pub use filter::CandidateFilter;
pub use movement::{MovementState, MovementThresholds};
pub use scorer::{CandidateScorer, InvalidWeights, RecommendationScorer, ScoreWeights, ScorerConfig};
pub use skip_store::SkipStore;
pub use user_state::UserState;
