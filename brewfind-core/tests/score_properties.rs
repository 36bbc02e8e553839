//! Property tests for the numeric invariants of scoring and geodesy.

use geo::Coord;
use proptest::option;
use proptest::prelude::*;

use brewfind_core::geo_math::{angular_delta_degrees, bearing_degrees, distance_meters};
use brewfind_core::{Candidate, CandidateScorer, MovementState, RecommendationScorer, UserState};

fn coord_strategy() -> impl Strategy<Value = Coord<f64>> {
    // Stay off the poles, where bearings degenerate.
    (-179.99f64..179.99, -85.0f64..85.0).prop_map(|(x, y)| Coord { x, y })
}

proptest! {
    #[test]
    fn score_is_always_in_unit_interval(
        user in coord_strategy(),
        shop in coord_strategy(),
        heading in option::of(0.0f64..360.0),
        speed in -5.0f64..60.0,
        distance in option::of(0.0f64..10_000_000.0),
    ) {
        let mut state = UserState::new(user, MovementState::from_speed(speed));
        state.heading = heading;

        let mut candidate = Candidate::new("probe", shop);
        candidate.distance_meters = distance;

        let score = RecommendationScorer::default().score(&candidate, &state);
        prop_assert!(score.is_finite());
        prop_assert!((0.0..=1.0).contains(&score), "score {} out of bounds", score);
    }

    #[test]
    fn bearing_is_normalised_to_circle(a in coord_strategy(), b in coord_strategy()) {
        let bearing = bearing_degrees(a, b);
        prop_assert!((0.0..360.0).contains(&bearing), "bearing {}", bearing);
    }

    #[test]
    fn angular_delta_is_within_half_circle(a in -1_000.0f64..1_000.0, b in -1_000.0f64..1_000.0) {
        let delta = angular_delta_degrees(a, b);
        prop_assert!((0.0..=180.0).contains(&delta), "delta {}", delta);
        // Symmetric by construction.
        prop_assert!((delta - angular_delta_degrees(b, a)).abs() < 1e-9);
    }

    #[test]
    fn distance_is_non_negative_and_symmetric(a in coord_strategy(), b in coord_strategy()) {
        let d = distance_meters(a, b);
        prop_assert!(d >= 0.0);
        prop_assert!((d - distance_meters(b, a)).abs() < 1e-6);
    }

    #[test]
    fn id_derivation_is_deterministic(
        name in "[A-Za-z ]{1,24}",
        coordinate in coord_strategy(),
    ) {
        let first = Candidate::new(name.clone(), coordinate);
        let second = Candidate::new(name, coordinate);
        prop_assert_eq!(first.id, second.id);
    }
}
