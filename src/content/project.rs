//! Project model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::projects::ContentEntry;

/// Metadata shown on a project card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectMeta {
    /// Project title
    pub title: String,

    /// One-paragraph summary
    pub summary: String,

    /// Gallery images, in display order
    pub images: Vec<String>,

    /// External link (repository, live demo)
    pub link: Option<String>,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

/// A portfolio project loaded from `source/_projects`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// URL-friendly identifier, taken from the file name
    pub slug: String,

    /// Publication date; `None` when missing or unparsable
    pub published_at: Option<DateTime<Local>>,

    pub meta: ProjectMeta,

    /// Raw markdown body
    pub content: String,

    /// Rendered HTML body
    pub html: String,

    /// Whether the project is published
    pub published: bool,
}

impl Project {
    /// Create a new project with minimal required fields
    pub fn new(slug: impl Into<String>, published_at: Option<DateTime<Local>>) -> Self {
        let slug = slug.into();
        Self {
            meta: ProjectMeta {
                title: slug.clone(),
                ..Default::default()
            },
            slug,
            published_at,
            content: String::new(),
            html: String::new(),
            published: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.meta.title = title.into();
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.meta.summary = summary.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Whether the body has anything worth a detail page
    pub fn has_details(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

impl ContentEntry for Project {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn published_at(&self) -> Option<DateTime<Local>> {
        self.published_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_title_to_slug() {
        let project = Project::new("task-queue", None);
        assert_eq!(project.meta.title, "task-queue");
        assert!(project.published);
        assert!(!project.has_details());
    }

    #[test]
    fn test_has_details_ignores_whitespace() {
        let project = Project::new("x", None).with_content("  \n\t ");
        assert!(!project.has_details());
        let project = Project::new("x", None).with_content("## Overview");
        assert!(project.has_details());
    }
}
