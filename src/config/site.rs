//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::projects::{PriorityOverrides, ProjectQuery, ProjectRange};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,

    // Writing
    pub render_drafts: bool,

    // Date format (Moment.js style)
    pub date_format: String,

    // Projects
    #[serde(default)]
    pub projects: ProjectsConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),

            render_drafts: false,

            date_format: "MMM YYYY".to_string(),

            projects: ProjectsConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Project listing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsConfig {
    /// Directory under `source_dir` holding project files
    pub dir: String,
    /// Slugs pinned ahead of chronological order
    pub priority: PriorityOverrides,
    /// Slugs never listed
    pub exclude: Vec<String>,
    /// Window used for the featured listing
    pub featured: Option<ProjectRange>,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            dir: "_projects".to_string(),
            priority: PriorityOverrides::new(),
            exclude: Vec::new(),
            featured: None,
        }
    }
}

impl ProjectsConfig {
    /// Query for the full listing
    pub fn query(&self) -> ProjectQuery {
        ProjectQuery::new().exclude(self.exclude.iter().cloned())
    }

    /// Query for the featured listing, if a featured range is configured
    pub fn featured_query(&self) -> Option<ProjectQuery> {
        self.featured.map(|range| self.query().range(range))
    }
}
