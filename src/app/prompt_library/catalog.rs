//! Built-in prompt catalog.
//!
//! The catalog is compiled into the binary and never changes at runtime.
//! Prompts created through the Add Prompt dialog are not added here.

use serde::{Deserialize, Serialize};

/// A titled block of reusable text with its tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub title: String,
    pub description: String,
    /// Display order is the order given here
    pub tags: Vec<String>,
}

impl Prompt {
    pub fn new(title: &str, description: &str, tags: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

pub const CATALOG_TAGS: [&str; 10] = [
    "Writing",
    "Programming",
    "Marketing",
    "SEO",
    "Business",
    "Creative",
    "Academic",
    "Technical",
    "Education",
    "Research",
];

/// Immutable prompt and tag lists shown by the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptCatalog {
    prompts: Vec<Prompt>,
    tags: Vec<String>,
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PromptCatalog {
    pub fn new(prompts: Vec<Prompt>, tags: Vec<String>) -> Self {
        Self { prompts, tags }
    }

    /// The catalog shipped with the application
    pub fn builtin() -> Self {
        let prompts = vec![
            Prompt::new(
                "Blog Post Outline Generator",
                "Create a detailed blog post outline about [topic] including introduction, main points, and conclusion.",
                &["Writing", "Marketing", "SEO"],
            ),
            Prompt::new(
                "Code Refactoring Assistant",
                "Analyze this code snippet and suggest improvements for better readability and performance.",
                &["Programming", "Technical"],
            ),
            Prompt::new(
                "Research Paper Summary",
                "Summarize this academic paper in simple terms, highlighting key findings and methodology.",
                &["Academic", "Research", "Education"],
            ),
        ];

        Self::new(
            prompts,
            CATALOG_TAGS.iter().map(|t| t.to_string()).collect(),
        )
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_prompt_tags_come_from_catalog() {
        let catalog = PromptCatalog::builtin();
        for prompt in catalog.prompts() {
            for tag in &prompt.tags {
                assert!(
                    catalog.tags().contains(tag),
                    "{} uses unknown tag {}",
                    prompt.title,
                    tag
                );
            }
        }
    }

    #[test]
    fn test_builtin_tags_are_unique() {
        let catalog = PromptCatalog::builtin();
        let mut seen = std::collections::HashSet::new();
        assert!(catalog.tags().iter().all(|t| seen.insert(t.clone())));
        assert_eq!(catalog.tags().len(), 10);
    }

    #[test]
    fn test_builtin_prompt_order() {
        let catalog = PromptCatalog::builtin();
        let titles: Vec<&str> = catalog.prompts().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Blog Post Outline Generator",
                "Code Refactoring Assistant",
                "Research Paper Summary"
            ]
        );
    }
}
