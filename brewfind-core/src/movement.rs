//! Coarse movement classification from a scalar speed reading.
//!
//! The thresholds are design constants, not derived from data. Location
//! providers report `-1` (or other negative values) for an invalid speed
//! sample; classification clamps those to zero rather than failing.

/// Discrete movement state used to pick a travel-speed assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementState {
    /// Not moving, or moving too slowly to matter.
    Stationary,
    /// On foot.
    Walking,
    /// In a vehicle.
    Driving,
}

impl MovementState {
    /// Classify a speed sample using the default [`MovementThresholds`].
    ///
    /// # Examples
    /// ```
    /// use brewfind_core::MovementState;
    ///
    /// assert_eq!(MovementState::from_speed(0.0), MovementState::Stationary);
    /// assert_eq!(MovementState::from_speed(1.2), MovementState::Walking);
    /// assert_eq!(MovementState::from_speed(8.0), MovementState::Driving);
    /// ```
    #[must_use]
    pub fn from_speed(speed_mps: f64) -> Self {
        MovementThresholds::default().classify(speed_mps)
    }
}

/// Speed boundaries (metres per second) between movement states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementThresholds {
    /// Speeds strictly below this are [`MovementState::Stationary`].
    pub stationary_max: f64,
    /// Speeds strictly below this (and at or above `stationary_max`) are
    /// [`MovementState::Walking`]; anything faster is
    /// [`MovementState::Driving`].
    pub walking_max: f64,
}

impl Default for MovementThresholds {
    fn default() -> Self {
        Self {
            stationary_max: 0.7,
            walking_max: 2.5,
        }
    }
}

impl MovementThresholds {
    /// Map a speed sample to a [`MovementState`].
    ///
    /// Negative readings signal an unavailable sensor and are clamped to
    /// zero.
    #[must_use]
    pub fn classify(&self, speed_mps: f64) -> MovementState {
        let speed = speed_mps.max(0.0);
        if speed < self.stationary_max {
            MovementState::Stationary
        } else if speed < self.walking_max {
            MovementState::Walking
        } else {
            MovementState::Driving
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-1.0, MovementState::Stationary)] // invalid sensor reading
    #[case(0.0, MovementState::Stationary)]
    #[case(0.69, MovementState::Stationary)]
    #[case(0.7, MovementState::Walking)]
    #[case(2.49, MovementState::Walking)]
    #[case(2.5, MovementState::Driving)]
    #[case(30.0, MovementState::Driving)]
    fn classify_boundaries(#[case] speed: f64, #[case] expected: MovementState) {
        assert_eq!(MovementState::from_speed(speed), expected);
    }

    #[rstest]
    fn custom_thresholds_shift_boundaries() {
        let thresholds = MovementThresholds {
            stationary_max: 1.0,
            walking_max: 5.0,
        };
        assert_eq!(thresholds.classify(0.9), MovementState::Stationary);
        assert_eq!(thresholds.classify(4.9), MovementState::Walking);
        assert_eq!(thresholds.classify(5.0), MovementState::Driving);
    }
}
