//! Snapshot of the user's position, facing, and motion.
//!
//! The engine never reaches into ambient sensor state; the host samples its
//! location provider and passes an explicit `UserState` to every rerank.

use std::time::SystemTime;

use geo::Coord;

use crate::MovementState;

/// Ephemeral sensor snapshot supplied per scoring pass.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use brewfind_core::{MovementState, UserState};
///
/// let state = UserState::new(Coord { x: -122.42, y: 37.77 }, MovementState::Walking)
///     .with_heading(45.0);
/// assert_eq!(state.heading, Some(45.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserState {
    /// Current position (WGS84, `x = longitude`, `y = latitude`).
    pub location: Coord<f64>,
    /// Compass bearing in degrees `[0, 360)`, when the device reports one.
    /// Absent heading degrades heading scoring to a neutral value.
    pub heading: Option<f64>,
    /// Coarse movement classification derived from a speed sample.
    pub movement: MovementState,
    /// When this snapshot was observed. Reranks carrying a snapshot older
    /// than the last accepted one are ignored.
    pub observed_at: SystemTime,
}

impl UserState {
    /// Build a snapshot observed now, with no heading.
    #[must_use]
    pub fn new(location: Coord<f64>, movement: MovementState) -> Self {
        Self {
            location,
            heading: None,
            movement,
            observed_at: SystemTime::now(),
        }
    }

    /// Attach a compass heading, returning `self` for chaining.
    #[must_use]
    pub fn with_heading(mut self, heading_degrees: f64) -> Self {
        self.heading = Some(heading_degrees);
        self
    }

    /// Override the observation timestamp, returning `self` for chaining.
    ///
    /// Hosts replaying buffered sensor updates should stamp each snapshot
    /// with its original observation time so stale updates are dropped.
    #[must_use]
    pub fn with_observed_at(mut self, observed_at: SystemTime) -> Self {
        self.observed_at = observed_at;
        self
    }
}
