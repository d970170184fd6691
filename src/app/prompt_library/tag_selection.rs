use serde::{Deserialize, Serialize};

/// Insertion-ordered set of tag names.
///
/// Iteration yields tags in the order they were picked. Lookups are linear
/// scans over the backing `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSelection {
    tags: Vec<String>,
}

impl TagSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Symmetric-difference update: removes `tag` if present, otherwise
    /// appends it. Returns `true` when the tag is selected afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.remove(tag) {
            false
        } else {
            self.tags.push(tag.to_string());
            true
        }
    }

    /// Appends `tag` unless it is already selected.
    pub fn insert(&mut self, tag: &str) -> bool {
        if self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tags
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = TagSelection::new();
        for tag in iter {
            selection.insert(tag.as_ref());
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_appends_to_end() {
        let mut selection = TagSelection::new();
        assert!(selection.toggle("Writing"));
        assert!(selection.toggle("SEO"));
        assert!(selection.toggle("Academic"));

        let order: Vec<&str> = selection.iter().collect();
        assert_eq!(order, vec!["Writing", "SEO", "Academic"]);
    }

    #[test]
    fn test_toggle_removes_present_tag() {
        let mut selection: TagSelection = ["Writing", "SEO", "Academic"].into_iter().collect();
        assert!(!selection.toggle("SEO"));

        let order: Vec<&str> = selection.iter().collect();
        assert_eq!(order, vec!["Writing", "Academic"]);
    }

    #[test]
    fn test_insert_ignores_duplicates() {
        let mut selection = TagSelection::new();
        assert!(selection.insert("Writing"));
        assert!(!selection.insert("Writing"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_from_iter_deduplicates() {
        let selection: TagSelection = ["A", "B", "A"].into_iter().collect();
        assert_eq!(selection.as_slice(), &["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        let selection: TagSelection = ["Writing"].into_iter().collect();
        assert!(selection.contains("Writing"));
        assert!(!selection.contains("writing"));
    }
}
