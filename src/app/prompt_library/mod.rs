//! Prompt library domain: catalog, filtering and the Add Prompt draft.
//!
//! [`PromptLibrary`] ties the immutable [`PromptCatalog`] to the mutable
//! [`FilterState`] and caches the visible prompts. The cache is keyed on the
//! filter revision, so it is recomputed on the first read after any intent.
//!
//! ```
//! use promptcollector::app::prompt_library::PromptLibrary;
//!
//! let mut library = PromptLibrary::builtin();
//! library.filter_mut().set_search_query("code");
//! let titles: Vec<_> = library.visible_prompts().iter().map(|p| p.title.clone()).collect();
//! assert_eq!(titles, vec!["Code Refactoring Assistant".to_string()]);
//! ```

pub mod catalog;
pub mod draft;
pub mod filter;
pub mod state;
pub mod tag_selection;

pub use catalog::{Prompt, PromptCatalog, CATALOG_TAGS};
pub use draft::{PromptDraft, PromptSubmission};
pub use filter::{filter_prompts, matches_search, matches_tags, visible_indices};
pub use state::FilterState;
pub use tag_selection::TagSelection;

/// Intents understood by the filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterIntent {
    SetSearchQuery(String),
    ToggleTag(String),
    ClearFilters,
}

#[derive(Debug, Clone)]
struct VisibleCache {
    revision: u64,
    indices: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct PromptLibrary {
    catalog: PromptCatalog,
    filter: FilterState,
    cache: Option<VisibleCache>,
}

impl Default for PromptLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PromptLibrary {
    pub fn new(catalog: PromptCatalog) -> Self {
        Self {
            catalog,
            filter: FilterState::new(),
            cache: None,
        }
    }

    pub fn builtin() -> Self {
        Self::new(PromptCatalog::builtin())
    }

    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    pub fn apply(&mut self, intent: FilterIntent) {
        match intent {
            FilterIntent::SetSearchQuery(text) => self.filter.set_search_query(&text),
            FilterIntent::ToggleTag(tag) => self.filter.toggle_tag(&tag),
            FilterIntent::ClearFilters => self.filter.clear_filters(),
        }
    }

    /// Catalog positions of the visible prompts, recomputed when the filter
    /// revision moved since the last call
    pub fn visible_indices(&mut self) -> &[usize] {
        let revision = self.filter.revision();
        let stale = self
            .cache
            .as_ref()
            .map_or(true, |cache| cache.revision != revision);

        if stale {
            let indices = filter::visible_indices(
                self.catalog.prompts(),
                self.filter.search_query(),
                self.filter.selected_tags(),
            );
            trace_trace!(
                "Filter revision {} shows {} of {} prompts",
                revision,
                indices.len(),
                self.catalog.len()
            );
            self.cache = Some(VisibleCache { revision, indices });
        }

        match &self.cache {
            Some(cache) => &cache.indices,
            None => &[],
        }
    }

    pub fn visible_prompts(&mut self) -> Vec<&Prompt> {
        let indices = self.visible_indices().to_vec();
        let prompts = self.catalog.prompts();
        indices.into_iter().map(|idx| &prompts[idx]).collect()
    }

    pub fn visible_count(&mut self) -> usize {
        self.visible_indices().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_follows_intents() {
        let mut library = PromptLibrary::builtin();
        assert_eq!(library.visible_count(), 3);

        library.apply(FilterIntent::ToggleTag("Writing".to_string()));
        assert_eq!(library.visible_indices(), &[0]);

        library.apply(FilterIntent::ToggleTag("Programming".to_string()));
        assert!(library.visible_indices().is_empty());

        library.apply(FilterIntent::ClearFilters);
        assert_eq!(library.visible_indices(), &[0, 1, 2]);

        library.apply(FilterIntent::SetSearchQuery("SUMMARY".to_string()));
        assert_eq!(library.visible_indices(), &[2]);
    }

    #[test]
    fn test_direct_filter_mutation_invalidates_cache() {
        let mut library = PromptLibrary::builtin();
        assert_eq!(library.visible_count(), 3);
        library.filter_mut().set_search_query("code");
        assert_eq!(library.visible_count(), 1);
    }
}
