//! crates/study_spots_core/src/session.rs
//!
//! The single-user session: one owned bundle of every store, and the only
//! mutation path into them. A composition root creates one of these for
//! the process lifetime and drives it from user events.

use chrono::Utc;
use uuid::Uuid;

use crate::assistant::Conversation;
use crate::catalog::CatalogStore;
use crate::domain::{CrowdLevel, FilterCriteria, Review, Spot};
use crate::filter::filter_spots;
use crate::navigation::{NavigationState, View};
use crate::notifications::{Notification, NotificationQueue, Severity};
use crate::user_state::{Toggle, UserStateStore};

/// The implicit local author of every review.
pub const LOCAL_USER_ID: &str = "local-user";
pub const LOCAL_USER_NAME: &str = "You";

/// Everything the application mutates, in one place.
///
/// Operations are synchronous and total over their preconditions: invalid
/// input degrades to a no-op, never an error, and each mutation replaces
/// the affected entity in a single step.
pub struct StudySession {
    catalog: CatalogStore,
    user_state: UserStateStore,
    navigation: NavigationState,
    query: String,
    criteria: FilterCriteria,
    notifications: NotificationQueue,
    conversation: Conversation,
}

impl StudySession {
    /// Builds a session over the seed catalog, at the home view, with
    /// empty search state.
    pub fn new(spots: Vec<Spot>) -> Self {
        Self {
            catalog: CatalogStore::new(spots),
            user_state: UserStateStore::new(),
            navigation: NavigationState::new(),
            query: String::new(),
            criteria: FilterCriteria::default(),
            notifications: NotificationQueue::new(),
            conversation: Conversation::new(),
        }
    }

    //=====================================================================================
    // Read paths
    //=====================================================================================

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn user_state(&self) -> &UserStateStore {
        &self.user_state
    }

    pub fn view(&self) -> View {
        self.navigation.view()
    }

    pub fn selected_spot_id(&self) -> Option<&str> {
        self.navigation.selected_spot_id()
    }

    pub fn active_tab(&self) -> View {
        self.navigation.active_tab()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The home listing: recomputed from the live catalog on every call,
    /// so no stale result is ever observable.
    pub fn visible_spots(&self) -> Vec<&Spot> {
        filter_spots(self.catalog.spots(), &self.query, &self.criteria)
    }

    /// Favorited spots in catalog order.
    pub fn favorite_spots(&self) -> Vec<&Spot> {
        self.catalog
            .spots()
            .iter()
            .filter(|s| self.user_state.is_favorite(&s.id))
            .collect()
    }

    /// Visited spots in catalog order.
    pub fn visited_spots(&self) -> Vec<&Spot> {
        self.catalog
            .spots()
            .iter()
            .filter(|s| self.user_state.is_visited(&s.id))
            .collect()
    }

    pub fn notifications(&self) -> &[Notification] {
        self.notifications.entries()
    }

    pub fn notification(&self, id: Uuid) -> Option<&Notification> {
        self.notifications.get(id)
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    //=====================================================================================
    // Navigation and search state
    //=====================================================================================

    pub fn select_spot(&mut self, id: &str) {
        self.navigation.select_spot(id);
    }

    pub fn back(&mut self) {
        self.navigation.back();
    }

    pub fn navigate(&mut self, target: View) {
        self.navigation.navigate(target);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// The one-action reset offered by the no-results state: clears both
    /// the query and the criteria.
    pub fn reset_filters(&mut self) {
        self.query.clear();
        self.criteria = FilterCriteria::default();
    }

    //=====================================================================================
    // Mutation operations
    //=====================================================================================

    /// Flips favorite membership for the selected spot. Without a
    /// selection this is a silent no-op. A notification is enqueued on the
    /// add side only; its id is returned so a caller can schedule expiry.
    pub fn toggle_favorite(&mut self) -> Option<Uuid> {
        let id = self.navigation.selected_spot_id()?.to_string();
        match self.user_state.toggle_favorite(&id) {
            Toggle::Added => {
                Some(self.notifications.enqueue("Saved to Favorites", Severity::Success))
            }
            Toggle::Removed => None,
        }
    }

    /// Flips visited membership for the selected spot. Same contract as
    /// `toggle_favorite`.
    pub fn toggle_visited(&mut self) -> Option<Uuid> {
        let id = self.navigation.selected_spot_id()?.to_string();
        match self.user_state.toggle_visited(&id) {
            Toggle::Added => {
                Some(self.notifications.enqueue("Marked as Visited", Severity::Success))
            }
            Toggle::Removed => None,
        }
    }

    /// Publishes a review by the local user.
    ///
    /// Whitespace-only comments, ratings outside 1..=5, and unknown spot
    /// ids are rejected as silent no-ops. On success the review is
    /// prepended to the spot's history and a notification is enqueued.
    pub fn add_review(&mut self, spot_id: &str, rating: u8, comment: &str) -> Option<Uuid> {
        let comment = comment.trim();
        if comment.is_empty() || !(1..=5).contains(&rating) {
            return None;
        }

        let review = Review {
            id: Uuid::new_v4(),
            user_id: LOCAL_USER_ID.to_string(),
            user_name: LOCAL_USER_NAME.to_string(),
            rating,
            comment: comment.to_string(),
            date: Utc::now().format("%B %e, %Y").to_string(),
        };
        if !self.catalog.add_review(spot_id, review) {
            return None;
        }

        Some(
            self.notifications
                .enqueue("Review published successfully!", Severity::Success),
        )
    }

    /// Applies a live crowd report. Unknown spot ids are a silent no-op.
    pub fn update_crowd_level(&mut self, spot_id: &str, level: CrowdLevel) -> Option<Uuid> {
        if !self.catalog.update_crowd_level(spot_id, level) {
            return None;
        }
        Some(
            self.notifications
                .enqueue("Thanks for the live update!", Severity::Info),
        )
    }

    pub fn dismiss_notification(&mut self, id: Uuid) {
        self.notifications.dismiss(id);
    }

    //=====================================================================================
    // Assistant
    //=====================================================================================

    /// Records a user query for the assistant. Returns false when a
    /// request is already pending or the query is blank.
    pub fn ask_assistant(&mut self, query: &str) -> bool {
        self.conversation.begin(query)
    }

    /// Appends the assistant's reply (or a degraded fallback) and clears
    /// the pending flag.
    pub fn resolve_assistant(&mut self, reply: impl Into<String>) {
        self.conversation.resolve(reply);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::JUST_NOW;
    use crate::domain::{NoiseLevel, SpotType};

    fn spot(id: &str, name: &str) -> Spot {
        Spot {
            id: id.to_string(),
            name: name.to_string(),
            spot_type: SpotType::Library,
            description: String::new(),
            image: String::new(),
            noise_level: NoiseLevel::Quiet,
            crowd_level: CrowdLevel::Low,
            last_updated: None,
            has_outlets: true,
            has_food: false,
            has_wifi: true,
            rating: 4.5,
            reviews: Vec::new(),
            location: "Main Quad".to_string(),
        }
    }

    fn session() -> StudySession {
        StudySession::new(vec![
            spot("1", "Central Library"),
            spot("2", "The Daily Grind"),
            spot("3", "Sculpture Garden"),
        ])
    }

    #[test]
    fn toggle_favorite_without_a_selection_is_a_no_op() {
        let mut session = session();
        assert!(session.toggle_favorite().is_none());
        assert!(session.notifications().is_empty());
        assert!(session.favorite_spots().is_empty());
    }

    #[test]
    fn toggle_pair_restores_state_and_notifies_only_on_add() {
        let mut session = session();
        session.select_spot("2");

        let first = session.toggle_favorite();
        assert!(first.is_some());
        assert!(session.user_state().is_favorite("2"));

        let second = session.toggle_favorite();
        assert!(second.is_none());
        assert!(!session.user_state().is_favorite("2"));

        // Exactly one notification, from the add side.
        assert_eq!(session.notifications().len(), 1);
        assert_eq!(session.notifications()[0].severity, Severity::Success);
    }

    #[test]
    fn toggle_visited_mirrors_the_favorite_contract() {
        let mut session = session();
        session.select_spot("1");

        assert!(session.toggle_visited().is_some());
        assert!(session.toggle_visited().is_none());
        assert_eq!(session.notifications().len(), 1);
        assert_eq!(session.notifications()[0].message, "Marked as Visited");
    }

    #[test]
    fn whitespace_comment_leaves_reviews_unchanged() {
        let mut session = session();
        assert!(session.add_review("1", 4, "  ").is_none());
        assert!(session.catalog().get("1").unwrap().reviews.is_empty());
        assert!(session.notifications().is_empty());
    }

    #[test]
    fn out_of_range_rating_is_rejected_at_the_boundary() {
        let mut session = session();
        assert!(session.add_review("1", 0, "Great spot").is_none());
        assert!(session.add_review("1", 6, "Great spot").is_none());
        assert!(session.catalog().get("1").unwrap().reviews.is_empty());
    }

    #[test]
    fn add_review_prepends_for_the_local_user() {
        let mut session = session();
        assert!(session.add_review("1", 4, "Great spot").is_some());
        assert!(session.add_review("1", 5, "Even better at night").is_some());

        let reviews = &session.catalog().get("1").unwrap().reviews;
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].comment, "Even better at night");
        assert_eq!(reviews[0].rating, 5);
        assert_eq!(reviews[0].user_name, LOCAL_USER_NAME);
        assert!(!reviews[0].date.is_empty());
        assert_eq!(session.notifications().len(), 2);
    }

    #[test]
    fn crowd_report_stamps_the_sentinel_and_notifies_as_info() {
        let mut session = session();
        let id = session.update_crowd_level("3", CrowdLevel::High).unwrap();

        let updated = session.catalog().get("3").unwrap();
        assert_eq!(updated.crowd_level, CrowdLevel::High);
        assert_eq!(updated.last_updated.as_deref(), Some(JUST_NOW));
        assert_eq!(session.catalog().get("1").unwrap().crowd_level, CrowdLevel::Low);

        let notification = session.notification(id).unwrap();
        assert_eq!(notification.severity, Severity::Info);
    }

    #[test]
    fn visible_spots_track_query_and_criteria_changes() {
        let mut session = session();
        assert_eq!(session.visible_spots().len(), 3);

        session.set_query("grind");
        let narrowed = session.visible_spots();
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].id, "2");

        session.set_criteria(FilterCriteria {
            types: vec![SpotType::Outdoor],
            ..Default::default()
        });
        assert!(session.visible_spots().is_empty());

        session.reset_filters();
        assert_eq!(session.visible_spots().len(), 3);
        assert!(session.query().is_empty());
        assert!(!session.criteria().is_active());
    }

    #[test]
    fn favorites_listing_follows_catalog_order() {
        let mut session = session();
        session.select_spot("3");
        session.toggle_favorite();
        session.select_spot("1");
        session.toggle_favorite();

        let ids: Vec<&str> = session.favorite_spots().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }
}
