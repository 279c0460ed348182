//! services/api/src/web/view.rs
//!
//! Wire-side projections of the core domain, and the pure dispatcher that
//! maps session state to the view model for the active view. The core
//! crate stays serialization-free; everything the client sees is built
//! here from read-only borrows.

use serde::{Deserialize, Serialize};
use study_spots_core::{
    assistant::{ChatMessage, ChatRole},
    domain::{CrowdLevel, FilterCriteria, NoiseLevel, Review, Spot, SpotType},
    navigation::View,
    notifications::Severity,
    session::StudySession,
};
use utoipa::ToSchema;
use uuid::Uuid;

//=========================================================================================
// Wire Enums
//=========================================================================================

/// Wire form of `NoiseLevel`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseLevelDto {
    Quiet,
    Moderate,
    Loud,
}

impl From<NoiseLevel> for NoiseLevelDto {
    fn from(level: NoiseLevel) -> Self {
        match level {
            NoiseLevel::Quiet => NoiseLevelDto::Quiet,
            NoiseLevel::Moderate => NoiseLevelDto::Moderate,
            NoiseLevel::Loud => NoiseLevelDto::Loud,
        }
    }
}

impl From<NoiseLevelDto> for NoiseLevel {
    fn from(dto: NoiseLevelDto) -> Self {
        match dto {
            NoiseLevelDto::Quiet => NoiseLevel::Quiet,
            NoiseLevelDto::Moderate => NoiseLevel::Moderate,
            NoiseLevelDto::Loud => NoiseLevel::Loud,
        }
    }
}

/// Wire form of `CrowdLevel`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrowdLevelDto {
    Low,
    Medium,
    High,
}

impl From<CrowdLevel> for CrowdLevelDto {
    fn from(level: CrowdLevel) -> Self {
        match level {
            CrowdLevel::Low => CrowdLevelDto::Low,
            CrowdLevel::Medium => CrowdLevelDto::Medium,
            CrowdLevel::High => CrowdLevelDto::High,
        }
    }
}

impl From<CrowdLevelDto> for CrowdLevel {
    fn from(dto: CrowdLevelDto) -> Self {
        match dto {
            CrowdLevelDto::Low => CrowdLevel::Low,
            CrowdLevelDto::Medium => CrowdLevel::Medium,
            CrowdLevelDto::High => CrowdLevel::High,
        }
    }
}

/// Wire form of `SpotType`. "Common Area" keeps its display spelling on
/// the wire.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotTypeDto {
    Library,
    Cafe,
    Outdoor,
    #[serde(rename = "Common Area")]
    CommonArea,
}

impl From<SpotType> for SpotTypeDto {
    fn from(spot_type: SpotType) -> Self {
        match spot_type {
            SpotType::Library => SpotTypeDto::Library,
            SpotType::Cafe => SpotTypeDto::Cafe,
            SpotType::Outdoor => SpotTypeDto::Outdoor,
            SpotType::CommonArea => SpotTypeDto::CommonArea,
        }
    }
}

impl From<SpotTypeDto> for SpotType {
    fn from(dto: SpotTypeDto) -> Self {
        match dto {
            SpotTypeDto::Library => SpotType::Library,
            SpotTypeDto::Cafe => SpotType::Cafe,
            SpotTypeDto::Outdoor => SpotType::Outdoor,
            SpotTypeDto::CommonArea => SpotType::CommonArea,
        }
    }
}

/// Wire form of notification `Severity`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeverityDto {
    Success,
    Info,
}

impl From<Severity> for SeverityDto {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Success => SeverityDto::Success,
            Severity::Info => SeverityDto::Info,
        }
    }
}

//=========================================================================================
// Payload Structs
//=========================================================================================

/// The filter criteria as they travel over the wire. Omitted collections
/// deserialize as empty, i.e. "no constraint".
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterPayload {
    #[serde(default)]
    pub noise: Vec<NoiseLevelDto>,
    #[serde(default)]
    pub types: Vec<SpotTypeDto>,
    #[serde(default)]
    pub only_with_outlets: bool,
    #[serde(default)]
    pub only_with_food: bool,
}

impl FilterPayload {
    pub fn from_domain(criteria: &FilterCriteria) -> Self {
        Self {
            noise: criteria.noise.iter().copied().map(Into::into).collect(),
            types: criteria.types.iter().copied().map(Into::into).collect(),
            only_with_outlets: criteria.only_with_outlets,
            only_with_food: criteria.only_with_food,
        }
    }

    pub fn to_domain(&self) -> FilterCriteria {
        FilterCriteria {
            noise: self.noise.iter().copied().map(Into::into).collect(),
            types: self.types.iter().copied().map(Into::into).collect(),
            only_with_outlets: self.only_with_outlets,
            only_with_food: self.only_with_food,
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPayload {
    pub id: Uuid,
    pub user_id: String,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
}

impl ReviewPayload {
    pub fn from_domain(review: &Review) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id.clone(),
            user_name: review.user_name.clone(),
            rating: review.rating,
            comment: review.comment.clone(),
            date: review.date.clone(),
        }
    }
}

/// The full display projection of one spot.
#[derive(Serialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SpotPayload {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub spot_type: SpotTypeDto,
    pub description: String,
    pub image: String,
    pub noise_level: NoiseLevelDto,
    pub crowd_level: CrowdLevelDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    pub has_outlets: bool,
    pub has_food: bool,
    pub has_wifi: bool,
    pub rating: f32,
    pub reviews: Vec<ReviewPayload>,
    pub location: String,
}

impl SpotPayload {
    pub fn from_domain(spot: &Spot) -> Self {
        Self {
            id: spot.id.clone(),
            name: spot.name.clone(),
            spot_type: spot.spot_type.into(),
            description: spot.description.clone(),
            image: spot.image.clone(),
            noise_level: spot.noise_level.into(),
            crowd_level: spot.crowd_level.into(),
            last_updated: spot.last_updated.clone(),
            has_outlets: spot.has_outlets,
            has_food: spot.has_food,
            has_wifi: spot.has_wifi,
            rating: spot.rating,
            reviews: spot.reviews.iter().map(ReviewPayload::from_domain).collect(),
            location: spot.location.clone(),
        }
    }
}

/// One assistant transcript entry.
#[derive(Serialize, Debug, Clone)]
pub struct ChatMessagePayload {
    pub role: ChatRolePayload,
    pub content: String,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRolePayload {
    User,
    Assistant,
}

impl ChatMessagePayload {
    pub fn from_domain(message: &ChatMessage) -> Self {
        Self {
            role: match message.role {
                ChatRole::User => ChatRolePayload::User,
                ChatRole::Assistant => ChatRolePayload::Assistant,
            },
            content: message.text.clone(),
        }
    }
}

//=========================================================================================
// View Models
//=========================================================================================

/// The read-only view model for the active view: a pure projection of
/// session state, one variant per view.
#[derive(Serialize, Debug, Clone)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum ViewModel {
    Home {
        query: String,
        filters: FilterPayload,
        /// True when a query or any criterion narrows the listing; drives
        /// the "Search Results" header instead of the default one.
        filtering: bool,
        spots: Vec<SpotPayload>,
        result_count: usize,
        /// True when the listing came back empty; the client renders the
        /// no-results state with its one-action reset.
        no_results: bool,
    },
    Favorites {
        spots: Vec<SpotPayload>,
        empty: bool,
    },
    Visited {
        spots: Vec<SpotPayload>,
        empty: bool,
    },
    Details {
        /// None renders the not-found fallback.
        spot: Option<SpotPayload>,
        is_favorite: bool,
        is_visited: bool,
    },
    #[serde(rename = "ai-assistant")]
    Assistant {
        messages: Vec<ChatMessagePayload>,
        pending: bool,
    },
}

/// Maps the current session state to the view model for the active view.
/// Computing a view model never mutates anything.
pub fn view_model(session: &StudySession) -> ViewModel {
    match session.view() {
        View::Home => {
            let spots: Vec<SpotPayload> = session
                .visible_spots()
                .into_iter()
                .map(SpotPayload::from_domain)
                .collect();
            ViewModel::Home {
                query: session.query().to_string(),
                filters: FilterPayload::from_domain(session.criteria()),
                filtering: session.criteria().is_active() || !session.query().is_empty(),
                result_count: spots.len(),
                no_results: spots.is_empty(),
                spots,
            }
        }
        View::Favorites => {
            let spots: Vec<SpotPayload> = session
                .favorite_spots()
                .into_iter()
                .map(SpotPayload::from_domain)
                .collect();
            ViewModel::Favorites {
                empty: spots.is_empty(),
                spots,
            }
        }
        View::Visited => {
            let spots: Vec<SpotPayload> = session
                .visited_spots()
                .into_iter()
                .map(SpotPayload::from_domain)
                .collect();
            ViewModel::Visited {
                empty: spots.is_empty(),
                spots,
            }
        }
        View::Details => {
            let spot = session
                .selected_spot_id()
                .and_then(|id| session.catalog().get(id));
            match spot {
                Some(spot) => ViewModel::Details {
                    is_favorite: session.user_state().is_favorite(&spot.id),
                    is_visited: session.user_state().is_visited(&spot.id),
                    spot: Some(SpotPayload::from_domain(spot)),
                },
                None => ViewModel::Details {
                    spot: None,
                    is_favorite: false,
                    is_visited: false,
                },
            }
        }
        View::Assistant => ViewModel::Assistant {
            messages: session
                .conversation()
                .messages()
                .iter()
                .map(ChatMessagePayload::from_domain)
                .collect(),
            pending: session.conversation().is_pending(),
        },
    }
}
