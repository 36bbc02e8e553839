//! Test-only collaborators used by unit and behaviour tests.

use std::cell::RefCell;
use std::collections::HashSet;
use std::convert::Infallible;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{Candidate, CandidateId, CandidateScorer, SkipStore, UserState};

/// In-memory `SkipStore` used in tests and examples.
///
/// Saves replace the stored set; loads return a copy of it.
#[derive(Default, Debug)]
pub struct MemorySkipStore {
    skips: RefCell<HashSet<CandidateId>>,
}

impl MemorySkipStore {
    /// Create a store seeded with the given ids.
    pub fn with_skips<I>(skips: I) -> Self
    where
        I: IntoIterator<Item = CandidateId>,
    {
        Self {
            skips: RefCell::new(skips.into_iter().collect()),
        }
    }

    /// Snapshot of the persisted set.
    #[must_use]
    pub fn persisted(&self) -> HashSet<CandidateId> {
        self.skips.borrow().clone()
    }
}

impl SkipStore for MemorySkipStore {
    type Error = Infallible;

    fn load(&self) -> Result<HashSet<CandidateId>, Self::Error> {
        Ok(self.skips.borrow().clone())
    }

    fn save(&self, skips: &HashSet<CandidateId>) -> Result<(), Self::Error> {
        *self.skips.borrow_mut() = skips.clone();
        Ok(())
    }
}

/// `SkipStore` whose saves always fail, for persistence-failure paths.
#[derive(Default, Debug)]
pub struct FailingSkipStore;

impl SkipStore for FailingSkipStore {
    type Error = io::Error;

    fn load(&self) -> Result<HashSet<CandidateId>, Self::Error> {
        Err(io::Error::other("skip store unavailable"))
    }

    fn save(&self, _skips: &HashSet<CandidateId>) -> Result<(), Self::Error> {
        Err(io::Error::other("skip store unavailable"))
    }
}

/// Wraps a scorer and counts how many times `score` is invoked.
///
/// The counter is shared, so tests keep a handle after the wrapper moves
/// into the engine. Used to verify that rejection advances without
/// re-scoring.
#[derive(Debug, Default)]
pub struct CountingScorer<C> {
    inner: C,
    calls: Arc<AtomicUsize>,
}

impl<C> CountingScorer<C> {
    /// Wrap `inner`, starting the call count at zero.
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle onto the shared invocation counter.
    #[must_use]
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl<C: CandidateScorer> CandidateScorer for CountingScorer<C> {
    fn score(&self, candidate: &Candidate, state: &UserState) -> f64 {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.score(candidate, state)
    }
}
