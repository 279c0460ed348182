//! crates/study_spots_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any transport or serialization format.

use std::fmt;

use uuid::Uuid;

/// How loud a spot usually is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseLevel {
    Quiet,
    Moderate,
    Loud,
}

impl fmt::Display for NoiseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NoiseLevel::Quiet => "Quiet",
            NoiseLevel::Moderate => "Moderate",
            NoiseLevel::Loud => "Loud",
        };
        write!(f, "{}", label)
    }
}

/// Self-reported occupancy indicator, updated by live crowd reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CrowdLevel::Low => "Low",
            CrowdLevel::Medium => "Medium",
            CrowdLevel::High => "High",
        };
        write!(f, "{}", label)
    }
}

/// What kind of place a spot is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotType {
    Library,
    Cafe,
    Outdoor,
    CommonArea,
}

impl fmt::Display for SpotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SpotType::Library => "Library",
            SpotType::Cafe => "Cafe",
            SpotType::Outdoor => "Outdoor",
            SpotType::CommonArea => "Common Area",
        };
        write!(f, "{}", label)
    }
}

/// A single user comment attached to a spot.
///
/// Reviews are created once and never edited or deleted afterwards.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: Uuid,
    pub user_id: String,
    pub user_name: String,
    /// Integer score, 1 through 5 inclusive.
    pub rating: u8,
    pub comment: String,
    /// Display string stamped at creation time.
    pub date: String,
}

/// A catalog entry representing one physical study location.
#[derive(Debug, Clone)]
pub struct Spot {
    pub id: String,
    pub name: String,
    pub spot_type: SpotType,
    pub description: String,
    pub image: String,
    pub noise_level: NoiseLevel,
    pub crowd_level: CrowdLevel,
    /// Freshness label for live crowd updates.
    pub last_updated: Option<String>,
    pub has_outlets: bool,
    pub has_food: bool,
    pub has_wifi: bool,
    pub rating: f32,
    /// Newest first. Only ever prepended to, never re-sorted.
    pub reviews: Vec<Review>,
    pub location: String,
}

/// User-chosen constraints narrowing the catalog view.
///
/// Empty collections and false flags mean "no constraint"; the default
/// value matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub noise: Vec<NoiseLevel>,
    pub types: Vec<SpotType>,
    pub only_with_outlets: bool,
    pub only_with_food: bool,
}

impl FilterCriteria {
    /// True when at least one constraint is set.
    pub fn is_active(&self) -> bool {
        !self.noise.is_empty()
            || !self.types.is_empty()
            || self.only_with_outlets
            || self.only_with_food
    }
}
