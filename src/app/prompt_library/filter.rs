//! Prompt filtering.
//!
//! A prompt is visible when it passes both predicates:
//!
//! - **Text**: the query is empty, or its lowercase form is a substring of the
//!   lowercased title or description. The query is used verbatim, so a query of
//!   spaces is not empty.
//! - **Tags**: no tag is selected, or the prompt carries every selected tag.
//!   Multiple tags narrow the result (AND), tag names compare case-sensitively.
//!
//! Results keep catalog order and never repeat a prompt.

use super::catalog::Prompt;
use super::tag_selection::TagSelection;

pub fn matches_search(prompt: &Prompt, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    prompt.title.to_lowercase().contains(&needle)
        || prompt.description.to_lowercase().contains(&needle)
}

pub fn matches_tags(prompt: &Prompt, selected: &TagSelection) -> bool {
    selected.iter().all(|tag| prompt.has_tag(tag))
}

pub fn matches(prompt: &Prompt, query: &str, selected: &TagSelection) -> bool {
    matches_search(prompt, query) && matches_tags(prompt, selected)
}

/// Ordered subsequence of `prompts` passing both predicates
pub fn filter_prompts<'a>(
    prompts: &'a [Prompt],
    query: &str,
    selected: &TagSelection,
) -> Vec<&'a Prompt> {
    prompts
        .iter()
        .filter(|prompt| matches(prompt, query, selected))
        .collect()
}

/// Same as [`filter_prompts`] but yields positions into `prompts`
pub fn visible_indices(prompts: &[Prompt], query: &str, selected: &TagSelection) -> Vec<usize> {
    prompts
        .iter()
        .enumerate()
        .filter(|(_, prompt)| matches(prompt, query, selected))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(title: &str, description: &str, tags: &[&str]) -> Prompt {
        Prompt::new(title, description, tags)
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let p = prompt("Anything", "at all", &[]);
        assert!(matches_search(&p, ""));
    }

    #[test]
    fn test_search_is_case_insensitive_on_title() {
        let p = prompt("Code Refactoring Assistant", "", &[]);
        assert!(matches_search(&p, "code"));
        assert!(matches_search(&p, "REFACTOR"));
        assert!(!matches_search(&p, "python"));
    }

    #[test]
    fn test_search_checks_description() {
        let p = prompt("Summary", "highlighting key findings", &[]);
        assert!(matches_search(&p, "Key Find"));
    }

    #[test]
    fn test_whitespace_query_is_not_trimmed() {
        let p = prompt("Outline", "nothing", &[]);
        assert!(!matches_search(&p, " "));
        let spaced = prompt("Blog Post", "", &[]);
        assert!(matches_search(&spaced, " "));
    }

    #[test]
    fn test_search_does_not_span_title_and_description() {
        let p = prompt("Blog", "Post", &[]);
        assert!(!matches_search(&p, "blogpost"));
    }

    #[test]
    fn test_tag_match_is_conjunctive() {
        let p = prompt("T", "D", &["A"]);
        let both: TagSelection = ["A", "B"].into_iter().collect();
        let only_a: TagSelection = ["A"].into_iter().collect();

        assert!(!matches_tags(&p, &both));
        assert!(matches_tags(&p, &only_a));
        assert!(matches_tags(&p, &TagSelection::new()));
    }

    #[test]
    fn test_visible_indices_follow_catalog_order() {
        let prompts = vec![
            prompt("alpha", "", &["X"]),
            prompt("beta", "", &[]),
            prompt("alphabet", "", &["X"]),
        ];
        let selected: TagSelection = ["X"].into_iter().collect();

        assert_eq!(visible_indices(&prompts, "alpha", &selected), vec![0, 2]);
        assert_eq!(visible_indices(&prompts, "", &TagSelection::new()), vec![0, 1, 2]);
    }
}
