//! Form state behind the Add Prompt dialog.
//!
//! The draft lives as long as the application. Dismissing the dialog keeps
//! whatever was typed; saving resets it. A saved draft becomes a
//! [`PromptSubmission`] which is handed back to the caller and goes nowhere
//! else, the catalog stays untouched.

use super::tag_selection::TagSelection;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Values of a saved draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSubmission {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

#[derive(Default)]
pub struct PromptDraft {
    pub open: bool,
    pub title: String,
    pub body: String,
    pub tags: TagSelection,
    /// Text typed into the tag picker's search box
    pub tag_query: String,
    pub tag_picker_open: bool,
    matcher: SkimMatcherV2,
}

impl std::fmt::Debug for PromptDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptDraft")
            .field("open", &self.open)
            .field("title", &self.title)
            .field("body", &self.body)
            .field("tags", &self.tags)
            .field("tag_query", &self.tag_query)
            .field("tag_picker_open", &self.tag_picker_open)
            .finish()
    }
}

impl PromptDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
        trace_debug!("Add Prompt dialog opened");
    }

    /// Hide the dialog, keeping the typed values
    pub fn close(&mut self) {
        self.open = false;
        self.tag_picker_open = false;
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.tags.toggle(tag);
    }

    /// Catalog tags matching the picker search box.
    ///
    /// With an empty query every tag is returned in catalog order. Otherwise
    /// tags are fuzzy matched and ordered by score, ties keeping catalog order.
    pub fn matching_tags<'a>(&self, catalog_tags: &'a [String]) -> Vec<&'a str> {
        if self.tag_query.is_empty() {
            return catalog_tags.iter().map(String::as_str).collect();
        }

        let mut scored: Vec<(i64, usize, &str)> = catalog_tags
            .iter()
            .enumerate()
            .filter_map(|(idx, tag)| {
                self.matcher
                    .fuzzy_match(tag, &self.tag_query)
                    .map(|score| (score, idx, tag.as_str()))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        scored.into_iter().map(|(_, _, tag)| tag).collect()
    }

    /// Close the dialog and reset every field, returning what was entered
    pub fn submit(&mut self) -> PromptSubmission {
        let submission = PromptSubmission {
            title: std::mem::take(&mut self.title),
            body: std::mem::take(&mut self.body),
            tags: std::mem::take(&mut self.tags).into_vec(),
        };
        self.tag_query.clear();
        self.close();
        submission
    }

    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.body.is_empty() && self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::prompt_library::catalog::CATALOG_TAGS;

    fn catalog_tags() -> Vec<String> {
        CATALOG_TAGS.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty_query_lists_all_tags_in_order() {
        let draft = PromptDraft::new();
        let tags = catalog_tags();
        assert_eq!(draft.matching_tags(&tags), CATALOG_TAGS.to_vec());
    }

    #[test]
    fn test_query_narrows_tags() {
        let mut draft = PromptDraft::new();
        draft.tag_query = "prog".to_string();
        let tags = catalog_tags();
        assert_eq!(draft.matching_tags(&tags), vec!["Programming"]);
    }

    #[test]
    fn test_query_without_match_lists_nothing() {
        let mut draft = PromptDraft::new();
        draft.tag_query = "zzz".to_string();
        let tags = catalog_tags();
        assert!(draft.matching_tags(&tags).is_empty());
    }

    #[test]
    fn test_close_keeps_draft() {
        let mut draft = PromptDraft::new();
        draft.open();
        draft.title = "Unit test writer".to_string();
        draft.toggle_tag("Programming");
        draft.close();

        assert!(!draft.open);
        assert_eq!(draft.title, "Unit test writer");
        assert!(draft.tags.contains("Programming"));
    }

    #[test]
    fn test_submit_resets_and_closes() {
        let mut draft = PromptDraft::new();
        draft.open();
        draft.title = "Tweet drafter".to_string();
        draft.body = "Write a tweet about [topic]".to_string();
        draft.toggle_tag("Marketing");
        draft.toggle_tag("Writing");
        draft.tag_query = "wri".to_string();
        draft.tag_picker_open = true;

        let submission = draft.submit();

        assert_eq!(submission.title, "Tweet drafter");
        assert_eq!(submission.tags, vec!["Marketing", "Writing"]);
        assert!(!draft.open);
        assert!(!draft.tag_picker_open);
        assert!(draft.is_blank());
        assert!(draft.tag_query.is_empty());
    }
}
