//! crates/study_spots_core/src/catalog.rs
//!
//! The catalog store: owns the mutable collection of study spots and
//! exposes the read and mutate operations over it.

use crate::domain::{CrowdLevel, Review, Spot};

/// Sentinel freshness label applied whenever a crowd report comes in.
pub const JUST_NOW: &str = "Just now";

/// Owns the catalog for the lifetime of a session.
///
/// Spot ids are unique within the collection; every mutation replaces the
/// affected spot wholesale, so readers never observe a partial update.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    spots: Vec<Spot>,
}

impl CatalogStore {
    pub fn new(spots: Vec<Spot>) -> Self {
        Self { spots }
    }

    /// All spots in catalog order.
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Looks a spot up by id.
    pub fn get(&self, id: &str) -> Option<&Spot> {
        self.spots.iter().find(|s| s.id == id)
    }

    /// Prepends a review to the spot's history (newest first).
    ///
    /// Returns false when the id matches no spot, leaving the catalog
    /// untouched.
    pub fn add_review(&mut self, spot_id: &str, review: Review) -> bool {
        match self.spots.iter_mut().find(|s| s.id == spot_id) {
            Some(spot) => {
                spot.reviews.insert(0, review);
                true
            }
            None => false,
        }
    }

    /// Applies a live crowd report to one spot, stamping the freshness
    /// label. Returns false when the id matches no spot.
    pub fn update_crowd_level(&mut self, spot_id: &str, level: CrowdLevel) -> bool {
        match self.spots.iter_mut().find(|s| s.id == spot_id) {
            Some(spot) => {
                spot.crowd_level = level;
                spot.last_updated = Some(JUST_NOW.to_string());
                true
            }
            None => false,
        }
    }
}
