//! services/api/src/web/protocol.rs
//!
//! Defines the WebSocket message protocol between the mobile client and
//! the API server. Every user-initiated event is a client message; the
//! server answers with view state, notifications, and assistant replies.

use serde::{Deserialize, Serialize};
use study_spots_core::navigation::View;
use uuid::Uuid;

use crate::web::view::{CrowdLevelDto, FilterPayload, SeverityDto, ViewModel};

/// The bottom-navigation targets a client may jump to directly. The
/// details view is deliberately absent: it is only reachable by selecting
/// a spot.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum NavTarget {
    Home,
    Favorites,
    Visited,
    AiAssistant,
}

impl NavTarget {
    pub fn to_view(self) -> View {
        match self {
            NavTarget::Home => View::Home,
            NavTarget::Favorites => View::Favorites,
            NavTarget::Visited => View::Visited,
            NavTarget::AiAssistant => View::Assistant,
        }
    }

    /// The tab to highlight for a given view; details maps to home.
    pub fn from_view(view: View) -> Self {
        match view {
            View::Home | View::Details => NavTarget::Home,
            View::Favorites => NavTarget::Favorites,
            View::Visited => NavTarget::Visited,
            View::Assistant => NavTarget::AiAssistant,
        }
    }
}

//=========================================================================================
// Messages Sent FROM the Client TO the Server
//=========================================================================================

/// Represents the structured text messages a client can send to the server.
#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Bottom-navigation jump.
    Navigate { view: NavTarget },

    /// Opens the details view for a spot.
    SelectSpot { spot_id: String },

    /// Returns from the details view to home.
    Back,

    /// Replaces the free-text search query.
    SetQuery { query: String },

    /// Replaces the filter criteria wholesale.
    SetFilters { filters: FilterPayload },

    /// The one-action reset from the no-results state: clears the query
    /// and the criteria together.
    ResetFilters,

    /// Flips favorite membership for the selected spot.
    ToggleFavorite,

    /// Flips visited membership for the selected spot.
    ToggleVisited,

    /// Publishes a review by the local user.
    AddReview {
        spot_id: String,
        rating: u8,
        comment: String,
    },

    /// Reports the live crowd level for a spot.
    ReportCrowd {
        spot_id: String,
        level: CrowdLevelDto,
    },

    /// Submits a free-text query to the recommendation assistant.
    AskAssistant { query: String },

    /// Dismisses a notification ahead of its expiry timer.
    DismissNotification { id: Uuid },
}

//=========================================================================================
// Messages Sent FROM the Server TO the Client
//=========================================================================================

/// Represents the structured text messages the server can send to the client.
#[derive(Serialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// The full view model for the active view, pushed after every
    /// state-affecting client message.
    ViewState {
        active_tab: NavTarget,
        model: ViewModel,
    },

    /// A freshly enqueued notification. It disappears again via
    /// `NotificationExpired`, after 3 seconds or an explicit dismissal.
    Notification {
        id: Uuid,
        message: String,
        severity: SeverityDto,
    },

    /// A notification left the queue (timer expiry or dismissal).
    NotificationExpired { id: Uuid },

    /// The assistant resolved a recommendation request.
    AssistantReply { text: String },

    /// Reports a malformed or unprocessable client frame.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_messages_use_snake_case_tags() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"select_spot","spot_id":"1"}"#).unwrap();
        match msg {
            ClientMessage::SelectSpot { spot_id } => assert_eq!(spot_id, "1"),
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn navigate_accepts_the_kebab_case_assistant_tab() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"navigate","view":"ai-assistant"}"#).unwrap();
        match msg {
            ClientMessage::Navigate { view } => assert_eq!(view, NavTarget::AiAssistant),
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn set_filters_defaults_omitted_fields_to_no_constraint() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"set_filters","filters":{"onlyWithFood":true}}"#)
                .unwrap();
        match msg {
            ClientMessage::SetFilters { filters } => {
                assert!(filters.noise.is_empty());
                assert!(filters.types.is_empty());
                assert!(!filters.only_with_outlets);
                assert!(filters.only_with_food);
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn details_highlights_the_home_tab() {
        assert_eq!(NavTarget::from_view(View::Details), NavTarget::Home);
        assert_eq!(NavTarget::from_view(View::Visited), NavTarget::Visited);
    }
}
