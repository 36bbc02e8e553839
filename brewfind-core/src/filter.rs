//! Candidate filtering: excluded chains and previously skipped places.
//!
//! Filtering is a pure transformation; it never fails and preserves the
//! relative order of its input.

use std::collections::HashSet;

use crate::{Candidate, CandidateId};

/// Chain brands excluded by default, matched as lowercase substrings.
const DEFAULT_EXCLUDED_CHAINS: [&str; 7] = [
    "starbucks",
    "dunkin",
    "mcdonald's",
    "tim hortons",
    "peet's",
    "caribou",
    "costa",
];

/// Removes excluded brand names and skipped candidates from a raw list.
///
/// Brand matching is a case-insensitive substring test, so "Starbucks
/// Reserve Roastery" is excluded by the "starbucks" entry.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use geo::Coord;
/// use brewfind_core::{Candidate, CandidateFilter};
///
/// let filter = CandidateFilter::default();
/// let shops = vec![
///     Candidate::new("Starbucks Reserve", Coord { x: 0.0, y: 0.0 }),
///     Candidate::new("Local Roasters", Coord { x: 0.0, y: 0.1 }),
/// ];
/// let kept = filter.apply(&shops, &HashSet::new());
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].name, "Local Roasters");
/// ```
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    excluded_substrings: Vec<String>,
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_CHAINS.map(str::to_owned))
    }
}

impl CandidateFilter {
    /// Build a filter from brand substrings; entries are lowercased once
    /// here so matching stays cheap per candidate.
    #[must_use]
    pub fn new(excluded_substrings: impl IntoIterator<Item = String>) -> Self {
        Self {
            excluded_substrings: excluded_substrings
                .into_iter()
                .map(|s| s.to_lowercase())
                .collect(),
        }
    }

    /// Report whether a candidate name matches an excluded brand.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.excluded_substrings
            .iter()
            .any(|chain| lowered.contains(chain))
    }

    /// Drop excluded-brand and skipped candidates, preserving input order.
    #[must_use]
    pub fn apply(&self, candidates: &[Candidate], skips: &HashSet<CandidateId>) -> Vec<Candidate> {
        candidates
            .iter()
            .filter(|c| !self.is_excluded(&c.name) && !skips.contains(&c.id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::rstest;

    fn shop(name: &str, lat: f64) -> Candidate {
        Candidate::new(name, Coord { x: 0.0, y: lat })
    }

    #[rstest]
    #[case("Starbucks")]
    #[case("Starbucks Reserve Roastery")]
    #[case("STARBUCKS COFFEE")]
    #[case("Dunkin'")]
    #[case("Tim Hortons #204")]
    fn excludes_chain_names(#[case] name: &str) {
        assert!(CandidateFilter::default().is_excluded(name));
    }

    #[rstest]
    #[case("Blue Bottle Coffee")]
    #[case("Sightglass")]
    #[case("Ritual Roasters")]
    fn keeps_independent_names(#[case] name: &str) {
        assert!(!CandidateFilter::default().is_excluded(name));
    }

    #[rstest]
    fn substring_matching_excludes_lookalike_names() {
        // "Costanoa" contains "costa"; substring matching trades this false
        // positive for catching every chain sub-brand.
        assert!(CandidateFilter::default().is_excluded("Costanoa Cafe"));
    }

    #[rstest]
    fn drops_skipped_ids_and_preserves_order() {
        let filter = CandidateFilter::default();
        let a = shop("Sightglass", 0.001);
        let b = shop("Ritual", 0.002);
        let c = shop("Four Barrel", 0.003);
        let skips = HashSet::from([b.id.clone()]);

        let kept = filter.apply(&[a.clone(), b, c.clone()], &skips);
        assert_eq!(kept, vec![a, c]);
    }

    #[rstest]
    fn empty_input_stays_empty() {
        let kept = CandidateFilter::default().apply(&[], &HashSet::new());
        assert!(kept.is_empty());
    }

    #[rstest]
    fn custom_list_replaces_defaults() {
        let filter = CandidateFilter::new(["bodega".to_owned()]);
        assert!(filter.is_excluded("Corner Bodega Espresso"));
        assert!(!filter.is_excluded("Starbucks"));
    }
}
