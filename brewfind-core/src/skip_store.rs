//! Durable storage contract for the set of skipped candidates.
//!
//! The skip set is the only state that outlives the process. The engine
//! owns the in-memory copy and treats the store as a best-effort mirror: a
//! failed save is logged and the session continues from memory.

use std::collections::HashSet;

use crate::CandidateId;

/// Load and persist the set of candidate ids the user has rejected.
///
/// Implementations must make `save` atomic from the engine's perspective: a
/// save either fully succeeds or the previously persisted state is
/// retained. No ordering guarantees are made on the set's contents.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use std::convert::Infallible;
/// use brewfind_core::{CandidateId, SkipStore};
///
/// #[derive(Default)]
/// struct NullStore;
///
/// impl SkipStore for NullStore {
///     type Error = Infallible;
///
///     fn load(&self) -> Result<HashSet<CandidateId>, Self::Error> {
///         Ok(HashSet::new())
///     }
///
///     fn save(&self, _skips: &HashSet<CandidateId>) -> Result<(), Self::Error> {
///         Ok(())
///     }
/// }
///
/// assert!(NullStore.load().unwrap().is_empty());
/// ```
pub trait SkipStore {
    /// Failure type for load and save operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return the persisted skip set; an absent store yields the empty set.
    ///
    /// # Errors
    /// Returns `Self::Error` when the persisted state exists but cannot be
    /// read or decoded.
    fn load(&self) -> Result<HashSet<CandidateId>, Self::Error>;

    /// Replace the persisted skip set.
    ///
    /// # Errors
    /// Returns `Self::Error` when the new state cannot be written; the
    /// previously persisted state must survive the failure.
    fn save(&self, skips: &HashSet<CandidateId>) -> Result<(), Self::Error>;
}
