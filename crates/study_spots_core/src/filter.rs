//! crates/study_spots_core/src/filter.rs
//!
//! The catalog filtering/search engine: a pure function from the catalog,
//! the free-text query, and the filter criteria to the matching subset.

use crate::domain::{FilterCriteria, Spot};

/// Returns the spots matching `query` and `criteria`, preserving catalog
/// order (stable filter, no re-sort).
///
/// A spot is included only when every predicate holds: the free-text match
/// (case-insensitive substring on name OR location), the noise set, the
/// type set, and the two amenity flags. An empty query or empty criteria
/// field constrains nothing.
pub fn filter_spots<'a>(
    spots: &'a [Spot],
    query: &str,
    criteria: &FilterCriteria,
) -> Vec<&'a Spot> {
    spots
        .iter()
        .filter(|spot| matches(spot, query, criteria))
        .collect()
}

fn matches(spot: &Spot, query: &str, criteria: &FilterCriteria) -> bool {
    let query = query.to_lowercase();
    let matches_search = query.is_empty()
        || spot.name.to_lowercase().contains(&query)
        || spot.location.to_lowercase().contains(&query);
    if !matches_search {
        return false;
    }

    if !criteria.noise.is_empty() && !criteria.noise.contains(&spot.noise_level) {
        return false;
    }
    if !criteria.types.is_empty() && !criteria.types.contains(&spot.spot_type) {
        return false;
    }
    if criteria.only_with_outlets && !spot.has_outlets {
        return false;
    }
    if criteria.only_with_food && !spot.has_food {
        return false;
    }

    true
}
