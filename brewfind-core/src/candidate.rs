//! Candidate points of interest and their stable identifiers.
//!
//! Identifiers are derived from the candidate's name and coordinate rather
//! than taken from the search provider, so re-querying the same physical
//! place across refreshes yields the same id even when the provider assigns
//! no key of its own.

use std::fmt;

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal places of coordinate precision folded into a [`CandidateId`].
const ID_COORDINATE_PRECISION: usize = 5;

/// Stable identifier for a candidate.
///
/// The id is a pure function of the lowercased name and the coordinate
/// rounded to five decimal degrees (roughly one metre of precision). Two
/// candidates with the same name and coordinate compare equal.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use brewfind_core::CandidateId;
///
/// let coordinate = Coord { x: -122.41940, y: 37.77490 };
/// let id = CandidateId::new("Blue Bottle Coffee", coordinate);
/// assert_eq!(id, CandidateId::new("blue bottle coffee", coordinate));
/// assert_eq!(id.as_str(), "blue bottle coffee|37.77490,-122.41940");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CandidateId(String);

impl CandidateId {
    /// Derive an id from a display name and a WGS84 coordinate.
    #[must_use]
    pub fn new(name: &str, coordinate: Coord<f64>) -> Self {
        Self(format!(
            "{}|{:.prec$},{:.prec$}",
            name.to_lowercase(),
            coordinate.y,
            coordinate.x,
            prec = ID_COORDINATE_PRECISION,
        ))
    }

    /// View the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A discoverable point of interest eligible for recommendation.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use brewfind_core::Candidate;
///
/// let shop = Candidate::new("Ritual Roasters", Coord { x: -122.42, y: 37.77 });
/// assert_eq!(shop.name, "Ritual Roasters");
/// assert!(shop.distance_meters.is_none());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Candidate {
    /// Stable identifier derived from name and coordinate.
    pub id: CandidateId,
    /// Display name as reported by the search provider.
    pub name: String,
    /// Geospatial position.
    pub coordinate: Coord<f64>,
    /// Straight-line distance from the user at the last scoring pass.
    /// Recomputed on every rerank; `None` until then.
    pub distance_meters: Option<f64>,
}

impl Candidate {
    /// Construct a candidate with a derived id and no distance yet.
    #[must_use]
    pub fn new(name: impl Into<String>, coordinate: Coord<f64>) -> Self {
        let name = name.into();
        Self {
            id: CandidateId::new(&name, coordinate),
            name,
            coordinate,
            distance_meters: None,
        }
    }

    /// Attach a precomputed distance, returning `self` for chaining.
    #[must_use]
    pub fn with_distance(mut self, distance_meters: f64) -> Self {
        self.distance_meters = Some(distance_meters);
        self
    }
}

// Identity, not field-wise comparison: two sightings of the same place are
// the same candidate even when their cached distances differ.
impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Candidate {}
