//! Desirability scoring for candidates against the current user state.
//!
//! The [`CandidateScorer`] trait is the seam between the engine and any
//! scoring policy. The production policy, [`RecommendationScorer`], blends
//! three normalised signals: estimated travel time under a movement-state
//! speed assumption, alignment between the user's heading and the bearing
//! to the candidate, and raw proximity.

use crate::geo_math::{angular_delta_degrees, bearing_degrees};
use crate::{Candidate, MovementState, UserState};

/// Calculate a desirability score for a candidate.
///
/// Higher scores indicate a better pick. Implementations must be
/// thread-safe (`Send` + `Sync`), infallible, and must:
/// - produce finite (`f64::is_finite`) scores;
/// - return non-negative values;
/// - normalise results to the range `0.0..=1.0`.
///
/// Use [`CandidateScorer::sanitise`] to apply these guards.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use brewfind_core::{Candidate, CandidateScorer, MovementState, UserState};
///
/// struct UnitScorer;
///
/// impl CandidateScorer for UnitScorer {
///     fn score(&self, _candidate: &Candidate, _state: &UserState) -> f64 {
///         1.0
///     }
/// }
///
/// let shop = Candidate::new("Cafe", Coord { x: 0.0, y: 0.0 });
/// let state = UserState::new(Coord { x: 0.0, y: 0.0 }, MovementState::Walking);
/// assert_eq!(UnitScorer.score(&shop, &state), 1.0);
/// ```
pub trait CandidateScorer: Send + Sync {
    /// Return a score for `candidate` given the user's current state.
    fn score(&self, candidate: &Candidate, state: &UserState) -> f64;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}

/// Relative weighting of the three scoring signals.
///
/// The defaults favour travel time, use heading as a strong secondary
/// signal, and keep raw proximity as a mild tie-breaker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier applied to the travel-time component.
    pub eta: f64,
    /// Multiplier applied to the heading-alignment component.
    pub heading: f64,
    /// Multiplier applied to the raw-distance component.
    pub distance: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            eta: 0.65,
            heading: 0.25,
            distance: 0.10,
        }
    }
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`InvalidWeights`] when any value is non-finite or negative,
    /// or when the total weight is zero.
    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to ensure a non-zero total"
    )]
    pub fn validate(self) -> Result<Self, InvalidWeights> {
        let finite = self.eta.is_finite() && self.heading.is_finite() && self.distance.is_finite();
        let non_negative = self.eta >= 0.0 && self.heading >= 0.0 && self.distance >= 0.0;
        if finite && non_negative && (self.eta + self.heading + self.distance) > 0.0 {
            Ok(self)
        } else {
            Err(InvalidWeights)
        }
    }
}

/// Error raised when [`ScoreWeights::validate`] rejects a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("score weights must be finite, non-negative, and sum to a positive value")]
pub struct InvalidWeights;

/// Tunable constants for [`RecommendationScorer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScorerConfig {
    /// Signal weights; see [`ScoreWeights`].
    pub weights: ScoreWeights,
    /// Travel-time horizon in seconds. Candidates beyond this ETA
    /// contribute nothing from the travel-time signal.
    pub eta_horizon_secs: f64,
    /// Radius in metres over which the raw-distance signal decays to zero.
    /// Matches the candidate search radius.
    pub distance_radius_meters: f64,
    /// Assumed speed when stationary or walking, in metres per second.
    pub foot_speed_mps: f64,
    /// Assumed speed when driving, in metres per second.
    pub vehicle_speed_mps: f64,
    /// Sentinel distance for candidates with no distance computed; far
    /// enough that both distance-derived signals collapse to zero.
    pub unreachable_distance_meters: f64,
    /// Angular deltas at or below this are fully "ahead" (norm 1.0).
    pub heading_ahead_degrees: f64,
    /// Angular deltas at or above this are fully "behind" (norm 0.0).
    pub heading_behind_degrees: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            eta_horizon_secs: 1_200.0, // 20-minute horizon
            distance_radius_meters: 2_500.0,
            foot_speed_mps: 1.4,
            vehicle_speed_mps: 13.9,
            unreachable_distance_meters: 9_999_999.0,
            heading_ahead_degrees: 60.0,
            heading_behind_degrees: 150.0,
        }
    }
}

impl ScorerConfig {
    /// Assumed travel speed for a movement state, in metres per second.
    #[must_use]
    pub fn assumed_speed_mps(&self, movement: MovementState) -> f64 {
        match movement {
            MovementState::Stationary | MovementState::Walking => self.foot_speed_mps,
            MovementState::Driving => self.vehicle_speed_mps,
        }
    }
}

/// Production scorer: weighted blend of ETA, heading alignment, and
/// proximity, each normalised to `[0, 1]`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use brewfind_core::{Candidate, CandidateScorer, MovementState, RecommendationScorer, UserState};
///
/// let scorer = RecommendationScorer::default();
/// let shop = Candidate::new("Cafe", Coord { x: 0.0, y: 0.001 }).with_distance(111.0);
/// let state = UserState::new(Coord { x: 0.0, y: 0.0 }, MovementState::Walking);
/// let score = scorer.score(&shop, &state);
/// assert!((0.0..=1.0).contains(&score));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationScorer {
    config: ScorerConfig,
}

impl RecommendationScorer {
    /// Build a scorer with explicit configuration.
    #[must_use]
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// Access the active configuration.
    #[must_use]
    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Travel-time signal: 1.0 at zero ETA, decaying linearly to 0.0 at the
    /// configured horizon.
    #[expect(
        clippy::float_arithmetic,
        reason = "signal normalisation is floating-point by nature"
    )]
    fn eta_norm(&self, distance_meters: f64, state: &UserState) -> f64 {
        let eta_secs = distance_meters / self.config.assumed_speed_mps(state.movement);
        (1.0 - eta_secs / self.config.eta_horizon_secs).max(0.0)
    }

    /// Heading signal: neutral 0.5 without a compass reading; otherwise 1.0
    /// when the candidate is ahead, 0.0 when behind, interpolated between.
    #[expect(
        clippy::float_arithmetic,
        reason = "signal normalisation is floating-point by nature"
    )]
    fn heading_norm(&self, candidate: &Candidate, state: &UserState) -> f64 {
        let Some(heading) = state.heading else {
            return 0.5;
        };
        let bearing = bearing_degrees(state.location, candidate.coordinate);
        let delta = angular_delta_degrees(heading, bearing);

        if delta <= self.config.heading_ahead_degrees {
            1.0
        } else if delta >= self.config.heading_behind_degrees {
            0.0
        } else {
            let span = self.config.heading_behind_degrees - self.config.heading_ahead_degrees;
            (1.0 - (delta - self.config.heading_ahead_degrees) / span).max(0.0)
        }
    }

    /// Proximity signal: independent of travel-time assumptions, decaying
    /// linearly over the search radius.
    #[expect(
        clippy::float_arithmetic,
        reason = "signal normalisation is floating-point by nature"
    )]
    fn distance_norm(&self, distance_meters: f64) -> f64 {
        (1.0 - distance_meters / self.config.distance_radius_meters).max(0.0)
    }
}

impl CandidateScorer for RecommendationScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "the final score is a weighted sum of normalised signals"
    )]
    fn score(&self, candidate: &Candidate, state: &UserState) -> f64 {
        let distance = candidate
            .distance_meters
            .unwrap_or(self.config.unreachable_distance_meters);

        let weights = self.config.weights;
        let raw = weights.eta * self.eta_norm(distance, state)
            + weights.heading * self.heading_norm(candidate, state)
            + weights.distance * self.distance_norm(distance);
        Self::sanitise(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MovementState;
    use geo::Coord;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-9;

    fn origin_state(movement: MovementState) -> UserState {
        UserState::new(Coord { x: 0.0, y: 0.0 }, movement)
    }

    #[rstest]
    #[case(MovementState::Stationary, 1.4)]
    #[case(MovementState::Walking, 1.4)]
    #[case(MovementState::Driving, 13.9)]
    fn speed_assumption_follows_movement(#[case] movement: MovementState, #[case] expected: f64) {
        let config = ScorerConfig::default();
        assert!((config.assumed_speed_mps(movement) - expected).abs() < TOLERANCE);
    }

    #[rstest]
    fn zero_distance_walking_scores_near_one() {
        let scorer = RecommendationScorer::default();
        let shop = Candidate::new("Cafe", Coord { x: 0.0, y: 0.0 }).with_distance(0.0);
        let score = scorer.score(&shop, &origin_state(MovementState::Walking));
        // eta 1.0, heading neutral 0.5, distance 1.0:
        // 0.65 + 0.25 * 0.5 + 0.10 = 0.875
        assert!((score - 0.875).abs() < TOLERANCE);
    }

    #[rstest]
    fn missing_distance_collapses_distance_signals() {
        let scorer = RecommendationScorer::default();
        let shop = Candidate::new("Cafe", Coord { x: 10.0, y: 10.0 });
        let score = scorer.score(&shop, &origin_state(MovementState::Walking));
        // Only the neutral heading contributes: 0.25 * 0.5.
        assert!((score - 0.125).abs() < TOLERANCE);
    }

    #[rstest]
    fn driving_extends_the_reachable_horizon() {
        let scorer = RecommendationScorer::default();
        let shop = Candidate::new("Cafe", Coord { x: 0.0, y: 0.02 }).with_distance(2_224.0);
        let walking = scorer.score(&shop, &origin_state(MovementState::Walking));
        let driving = scorer.score(&shop, &origin_state(MovementState::Driving));
        assert!(
            driving > walking,
            "a far candidate should score higher when driving"
        );
    }

    #[rstest]
    #[case(Some(0.0), 1.0)] // due north of the user, facing north: ahead
    #[case(Some(180.0), 0.0)] // facing south: behind
    #[case(None, 0.5)] // no compass: neutral
    fn heading_norm_extremes(#[case] heading: Option<f64>, #[case] expected: f64) {
        let scorer = RecommendationScorer::default();
        let shop = Candidate::new("Cafe", Coord { x: 0.0, y: 0.01 });
        let mut state = origin_state(MovementState::Stationary);
        state.heading = heading;
        assert!((scorer.heading_norm(&shop, &state) - expected).abs() < TOLERANCE);
    }

    #[rstest]
    fn heading_norm_interpolates_between_cones() {
        let scorer = RecommendationScorer::default();
        // Candidate due north; user facing 105 degrees: delta = 105, midway
        // between the 60-degree and 150-degree cones.
        let shop = Candidate::new("Cafe", Coord { x: 0.0, y: 0.01 });
        let state = origin_state(MovementState::Stationary).with_heading(105.0);
        assert!((scorer.heading_norm(&shop, &state) - 0.5).abs() < 1e-6);
    }

    #[rstest]
    fn weights_reject_zero_total() {
        let err = ScoreWeights {
            eta: 0.0,
            heading: 0.0,
            distance: 0.0,
        }
        .validate()
        .expect_err("zero weights should be invalid");
        assert_eq!(err, InvalidWeights);
    }

    #[rstest]
    #[case(f64::NAN, 0.0, 0.0)]
    #[case(0.5, -0.1, 0.2)]
    #[case(f64::INFINITY, 0.3, 0.1)]
    fn weights_reject_bad_values(#[case] eta: f64, #[case] heading: f64, #[case] distance: f64) {
        let weights = ScoreWeights {
            eta,
            heading,
            distance,
        };
        assert!(weights.validate().is_err());
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(f64::INFINITY, 0.0)]
    #[case(-0.2, 0.0)]
    #[case(1.7, 1.0)]
    #[case(0.4, 0.4)]
    fn sanitise_clamps_and_filters(#[case] input: f64, #[case] expected: f64) {
        let result = <RecommendationScorer as CandidateScorer>::sanitise(input);
        assert!((result - expected).abs() < TOLERANCE);
    }
}
