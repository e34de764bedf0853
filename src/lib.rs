//! folio-rs: portfolio content tool
//!
//! Loads hand-authored project entries (front-matter + markdown), orders them
//! by manual priority and recency, and exports card data for whatever renders
//! the site.

pub mod cards;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod projects;
pub mod server;

use anyhow::Result;
use std::path::Path;

use content::loader::ContentLoader;
use content::Project;
use projects::{build_project_list, ProjectQuery};

/// The main application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Source directory
    pub source_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Folio {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            public_dir,
        })
    }

    /// Load projects and run them through the list builder
    pub fn projects(&self, query: &ProjectQuery) -> Result<Vec<Project>> {
        let all = ContentLoader::new(self).load_projects()?;
        Ok(build_project_list(
            &all,
            query,
            &self.config.projects.priority,
        ))
    }

    /// Generate the data files
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self).map(|_| ())
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
