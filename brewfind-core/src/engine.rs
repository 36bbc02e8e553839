//! Orchestration: filter, score, sort, select, and skip-and-advance.
//!
//! The engine is long-lived and single-owner. Hosts must marshal sensor
//! callbacks onto one logical thread before calling the mutating
//! operations; the engine performs no locking of its own. All methods are
//! synchronous; the only I/O is skip-set persistence, which is treated as
//! best-effort (the in-memory set is authoritative for the session).

use std::collections::HashSet;
use std::time::SystemTime;

use thiserror::Error;

use crate::geo_math::distance_meters;
use crate::{Candidate, CandidateFilter, CandidateId, CandidateScorer, SkipStore, UserState};

/// Recoverable precondition failures at the engine boundary.
///
/// Empty-result states are not errors: when filtering removes every
/// candidate the recommendation is simply `None` ("nothing nearby right
/// now") and the host presents messaging, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// `reject_current` was called with no current recommendation. Hosts
    /// should disable the corresponding action rather than treat this as
    /// fatal.
    #[error("no active recommendation to reject")]
    NoActiveRecommendation,
}

/// Ranks candidates and maintains the current recommendation.
///
/// Lifecycle: [`ingest`](Self::ingest) replaces the working candidate set,
/// [`rerank`](Self::rerank) publishes a ranked list and its head as the
/// recommendation, [`reject_current`](Self::reject_current) persists a skip
/// and advances without re-scoring, and
/// [`reset_skips`](Self::reset_skips) clears the skip set.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use brewfind_core::test_support::MemorySkipStore;
/// use brewfind_core::{
///     Candidate, CandidateFilter, MovementState, RecommendationEngine, RecommendationScorer,
///     UserState,
/// };
///
/// let mut engine = RecommendationEngine::new(
///     MemorySkipStore::default(),
///     CandidateFilter::default(),
///     RecommendationScorer::default(),
/// );
/// engine.ingest(vec![
///     Candidate::new("Nearby Cafe", Coord { x: 0.0, y: 0.001 }),
///     Candidate::new("Far Cafe", Coord { x: 0.0, y: 0.02 }),
/// ]);
/// engine.rerank(&UserState::new(Coord { x: 0.0, y: 0.0 }, MovementState::Walking));
/// assert_eq!(engine.recommendation().map(|c| c.name.as_str()), Some("Nearby Cafe"));
/// ```
#[derive(Debug)]
pub struct RecommendationEngine<S, C>
where
    S: SkipStore,
    C: CandidateScorer,
{
    store: S,
    filter: CandidateFilter,
    scorer: C,
    candidates: Vec<Candidate>,
    ranked: Vec<Candidate>,
    recommendation: Option<Candidate>,
    skips: HashSet<CandidateId>,
    last_observed_at: Option<SystemTime>,
}

impl<S, C> RecommendationEngine<S, C>
where
    S: SkipStore,
    C: CandidateScorer,
{
    /// Build an engine, loading the persisted skip set.
    ///
    /// A load failure degrades to the empty set with a warning; the session
    /// then runs from memory only.
    #[must_use]
    pub fn new(store: S, filter: CandidateFilter, scorer: C) -> Self {
        let skips = store.load().unwrap_or_else(|err| {
            log::warn!("failed to load skip set, starting empty: {err}");
            HashSet::new()
        });
        Self {
            store,
            filter,
            scorer,
            candidates: Vec::new(),
            ranked: Vec::new(),
            recommendation: None,
            skips,
            last_observed_at: None,
        }
    }

    /// Replace the working candidate set with a fresh provider result.
    ///
    /// Clears the ranked list and recommendation until the next
    /// [`rerank`](Self::rerank); ingest does not itself score. A later
    /// ingest always wins over an earlier one.
    pub fn ingest(&mut self, raw_candidates: Vec<Candidate>) {
        self.candidates = raw_candidates;
        self.ranked.clear();
        self.recommendation = None;
    }

    /// Filter, score, and sort the working set against `state`, publishing
    /// the ranked list and its head as the current recommendation.
    ///
    /// Distances are recomputed from `state.location` before scoring, and
    /// candidates are pre-sorted nearest-first so that equal scores resolve
    /// in distance-ascending order. Snapshots strictly older than the last
    /// accepted one are ignored, so an out-of-order location callback
    /// cannot overwrite a newer result; repeating the newest snapshot is
    /// idempotent.
    pub fn rerank(&mut self, state: &UserState) {
        if let Some(last) = self.last_observed_at {
            if state.observed_at < last {
                log::debug!("ignoring rerank with stale user state");
                return;
            }
        }
        self.last_observed_at = Some(state.observed_at);

        let mut working = self.candidates.clone();
        for candidate in &mut working {
            candidate.distance_meters =
                Some(distance_meters(state.location, candidate.coordinate));
        }
        working.sort_by(|a, b| {
            let da = a.distance_meters.unwrap_or(f64::INFINITY);
            let db = b.distance_meters.unwrap_or(f64::INFINITY);
            da.total_cmp(&db)
        });

        let mut scored: Vec<(Candidate, f64)> = self
            .filter
            .apply(&working, &self.skips)
            .into_iter()
            .map(|candidate| {
                let score = self.scorer.score(&candidate, state);
                (candidate, score)
            })
            .collect();
        // Stable sort: ties keep the nearest-first order established above.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        self.ranked = scored.into_iter().map(|(candidate, _)| candidate).collect();
        self.recommendation = self.ranked.first().cloned();
    }

    /// Reject the current recommendation and advance to the next-best
    /// unskipped candidate.
    ///
    /// The rejected id is added to the skip set and persisted best-effort;
    /// a persistence failure is logged and the in-memory set remains
    /// authoritative. Remaining candidates are not re-scored — advancing is
    /// a scan of the already-sorted ranked list.
    ///
    /// # Errors
    /// Returns [`EngineError::NoActiveRecommendation`] when there is no
    /// current recommendation to reject.
    pub fn reject_current(&mut self) -> Result<(), EngineError> {
        let Some(current) = self.recommendation.take() else {
            return Err(EngineError::NoActiveRecommendation);
        };

        self.skips.insert(current.id);
        self.persist_skips();
        self.recommendation = self
            .ranked
            .iter()
            .find(|candidate| !self.skips.contains(&candidate.id))
            .cloned();
        Ok(())
    }

    /// Clear the skip set, in memory and in the store.
    ///
    /// Does not rerank; previously skipped candidates reappear on the next
    /// [`rerank`](Self::rerank) call.
    pub fn reset_skips(&mut self) {
        self.skips.clear();
        self.persist_skips();
    }

    /// The currently top-ranked, non-skipped, non-excluded candidate.
    #[must_use]
    pub fn recommendation(&self) -> Option<&Candidate> {
        self.recommendation.as_ref()
    }

    /// The full ranked list from the last rerank, best first.
    #[must_use]
    pub fn ranked(&self) -> &[Candidate] {
        &self.ranked
    }

    /// Ids the user has rejected this session (including persisted ones).
    #[must_use]
    pub fn skipped(&self) -> &HashSet<CandidateId> {
        &self.skips
    }

    fn persist_skips(&self) {
        if let Err(err) = self.store.save(&self.skips) {
            log::warn!("failed to persist skip set, continuing from memory: {err}");
        }
    }
}
