//! crates/study_spots_core/src/navigation.rs
//!
//! Tracks which view is active and which spot is selected, and mediates
//! all user-initiated transitions between views.

/// The five top-level views of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Favorites,
    Visited,
    Details,
    Assistant,
}

/// The navigation state machine.
///
/// Every transition is total; none can fail. There is no history stack:
/// `back` is the only transition that clears the selection, so jumping
/// away from the details view through the bottom navigation leaves
/// `selected_spot_id` stale but inert (it is only consulted while the
/// details view is active).
#[derive(Debug, Clone)]
pub struct NavigationState {
    view: View,
    selected_spot_id: Option<String>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationState {
    /// Starts at the home view with nothing selected.
    pub fn new() -> Self {
        Self {
            view: View::Home,
            selected_spot_id: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// The id the details view renders. May reference a spot that no
    /// longer resolves; the caller renders a not-found fallback then.
    pub fn selected_spot_id(&self) -> Option<&str> {
        self.selected_spot_id.as_deref()
    }

    /// Opens the details view for `id`, from any state.
    pub fn select_spot(&mut self, id: &str) {
        self.selected_spot_id = Some(id.to_string());
        self.view = View::Details;
    }

    /// Returns from the details view to home and clears the selection.
    /// A no-op from any other view.
    pub fn back(&mut self) {
        if self.view == View::Details {
            self.selected_spot_id = None;
            self.view = View::Home;
        }
    }

    /// Bottom-navigation jump. The details view is only reachable through
    /// `select_spot`, so a `Details` target is ignored. The selection is
    /// left untouched either way.
    pub fn navigate(&mut self, target: View) {
        if target == View::Details {
            return;
        }
        self.view = target;
    }

    /// The bottom-navigation tab to highlight. The details view belongs
    /// to the home tab.
    pub fn active_tab(&self) -> View {
        match self.view {
            View::Details => View::Home,
            view => view,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home_with_no_selection() {
        let nav = NavigationState::new();
        assert_eq!(nav.view(), View::Home);
        assert!(nav.selected_spot_id().is_none());
    }

    #[test]
    fn select_then_back_round_trips_to_home() {
        let mut nav = NavigationState::new();
        nav.select_spot("s1");
        assert_eq!(nav.view(), View::Details);
        assert_eq!(nav.selected_spot_id(), Some("s1"));

        nav.back();
        assert_eq!(nav.view(), View::Home);
        assert!(nav.selected_spot_id().is_none());
    }

    #[test]
    fn back_outside_details_is_a_no_op() {
        let mut nav = NavigationState::new();
        nav.navigate(View::Favorites);
        nav.back();
        assert_eq!(nav.view(), View::Favorites);
    }

    #[test]
    fn navigate_keeps_a_stale_selection_around() {
        let mut nav = NavigationState::new();
        nav.select_spot("s1");
        nav.navigate(View::Visited);

        assert_eq!(nav.view(), View::Visited);
        // Stale, but inert: only the details view reads it.
        assert_eq!(nav.selected_spot_id(), Some("s1"));
    }

    #[test]
    fn navigate_ignores_a_details_target() {
        let mut nav = NavigationState::new();
        nav.navigate(View::Details);
        assert_eq!(nav.view(), View::Home);
    }

    #[test]
    fn details_highlights_the_home_tab() {
        let mut nav = NavigationState::new();
        nav.select_spot("s1");
        assert_eq!(nav.active_tab(), View::Home);

        nav.navigate(View::Assistant);
        assert_eq!(nav.active_tab(), View::Assistant);
    }
}
