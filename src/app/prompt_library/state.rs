use super::tag_selection::TagSelection;

/// Search text and tag selection driving the prompt grid.
///
/// Only the three intents below mutate it. Every change bumps `revision`,
/// which views use as a dirty flag for anything derived from the filter.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    search_query: String,
    selected_tags: TagSelection,
    revision: u64,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_tags(&self) -> &TagSelection {
        &self.selected_tags
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the query verbatim
    pub fn set_search_query(&mut self, text: &str) {
        if self.search_query == text {
            return;
        }
        self.search_query = text.to_string();
        self.bump();
        trace_debug!("Search query set to {:?}", self.search_query);
    }

    /// Remove `tag` from the selection if present, otherwise append it
    pub fn toggle_tag(&mut self, tag: &str) {
        let selected = self.selected_tags.toggle(tag);
        self.bump();
        trace_debug!(
            "Tag {} {} ({} selected)",
            tag,
            if selected { "selected" } else { "deselected" },
            self.selected_tags.len()
        );
    }

    pub fn clear_filters(&mut self) {
        self.search_query.clear();
        self.selected_tags.clear();
        self.bump();
        trace_debug!("Filters cleared");
    }

    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.selected_tags.contains(tag)
    }

    /// True when either the query or the tag selection narrows the result
    pub fn is_active(&self) -> bool {
        !self.search_query.is_empty() || !self.selected_tags.is_empty()
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = FilterState::new();
        assert_eq!(state.search_query(), "");
        assert!(state.selected_tags().is_empty());
        assert!(!state.is_active());
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn test_same_query_keeps_revision() {
        let mut state = FilterState::new();
        state.set_search_query("code");
        let revision = state.revision();
        state.set_search_query("code");
        assert_eq!(state.revision(), revision);
        state.set_search_query("code ");
        assert!(state.revision() > revision);
        assert_eq!(state.search_query(), "code ");
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut state = FilterState::new();
        state.toggle_tag("Writing");
        state.toggle_tag("SEO");
        let before = state.selected_tags().clone();

        state.toggle_tag("Research");
        state.toggle_tag("Research");
        assert_eq!(state.selected_tags(), &before);

        state.toggle_tag("Writing");
        state.toggle_tag("Writing");
        let order: Vec<&str> = state.selected_tags().iter().collect();
        assert_eq!(order, vec!["SEO", "Writing"]);
    }

    #[test]
    fn test_clear_filters_resets_everything() {
        let mut state = FilterState::new();
        state.set_search_query("summary");
        state.toggle_tag("Academic");
        let revision = state.revision();

        state.clear_filters();
        assert_eq!(state.search_query(), "");
        assert!(state.selected_tags().is_empty());
        assert!(!state.is_active());
        assert!(state.revision() > revision);

        // Clearing an already empty state is still a change notification
        let revision = state.revision();
        state.clear_filters();
        assert!(state.revision() > revision);
    }

    #[test]
    fn test_is_active_with_only_tags() {
        let mut state = FilterState::new();
        state.toggle_tag("SEO");
        assert!(state.is_active());
        assert!(state.is_tag_selected("SEO"));
    }
}
