//! Category selection on the browse screen.

use indexmap::IndexSet;
use reel_catalog::Category;

/// Most-recent-first recents list cap.
const RECENTS_CAP: usize = 5;

/// Selection state of the browse screen.
///
/// Selecting a category also records it at the front of the recents list;
/// deselecting leaves the recents untouched.
#[derive(Debug, Clone, Default)]
pub struct BrowseSession {
    selected: IndexSet<Category>,
    recents: Vec<Category>,
}

impl BrowseSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a category. Returns whether the category is selected after
    /// the toggle.
    pub fn toggle(&mut self, category: Category) -> bool {
        if self.selected.shift_remove(&category) {
            false
        } else {
            self.selected.insert(category);
            self.push_recent(category);
            true
        }
    }

    fn push_recent(&mut self, category: Category) {
        self.recents.retain(|&c| c != category);
        self.recents.insert(0, category);
        self.recents.truncate(RECENTS_CAP);
    }

    /// Check if a category is currently selected.
    pub fn is_selected(&self, category: Category) -> bool {
        self.selected.contains(&category)
    }

    /// Selected categories in selection order.
    pub fn selected(&self) -> impl Iterator<Item = Category> + '_ {
        self.selected.iter().copied()
    }

    /// Number of selected categories.
    pub fn selected_len(&self) -> usize {
        self.selected.len()
    }

    /// Recently selected categories, most recent first.
    pub fn recents(&self) -> &[Category] {
        &self.recents
    }

    /// Forget the recents list.
    pub fn clear_recents(&mut self) {
        self.recents.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_selects_and_deselects() {
        let mut session = BrowseSession::new();
        assert!(session.toggle(Category::Physics));
        assert!(session.is_selected(Category::Physics));
        assert!(!session.toggle(Category::Physics));
        assert!(!session.is_selected(Category::Physics));
    }

    #[test]
    fn test_deselect_keeps_recents() {
        let mut session = BrowseSession::new();
        session.toggle(Category::Physics);
        session.toggle(Category::Physics);
        assert_eq!(session.recents(), &[Category::Physics]);
    }

    #[test]
    fn test_recents_cap_and_order() {
        let mut session = BrowseSession::new();
        for category in [
            Category::ComputerScience,
            Category::Art,
            Category::Physics,
            Category::History,
            Category::Biology,
            Category::Chemistry,
        ] {
            session.toggle(category);
        }

        // Six selections, five kept, most recent first
        assert_eq!(
            session.recents(),
            &[
                Category::Chemistry,
                Category::Biology,
                Category::History,
                Category::Physics,
                Category::Art,
            ]
        );
    }

    #[test]
    fn test_reselect_moves_to_front_without_duplicate() {
        let mut session = BrowseSession::new();
        session.toggle(Category::Art);
        session.toggle(Category::Physics);
        session.toggle(Category::Art); // deselect, recents unchanged
        session.toggle(Category::Art); // reselect, moves to front

        assert_eq!(session.recents(), &[Category::Art, Category::Physics]);
    }

    #[test]
    fn test_clear_recents() {
        let mut session = BrowseSession::new();
        session.toggle(Category::Music);
        session.clear_recents();
        assert!(session.recents().is_empty());
        assert!(session.is_selected(Category::Music));
    }
}
