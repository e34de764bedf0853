//! Content loader - loads projects from the source directory

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{FrontMatter, MarkdownRenderer, Project, ProjectMeta};
use crate::Folio;

/// Loads content from the source directory
pub struct ContentLoader<'a> {
    folio: &'a Folio,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self {
            folio,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Directory holding project files
    pub fn projects_dir(&self) -> PathBuf {
        self.folio.source_dir.join(&self.folio.config.projects.dir)
    }

    /// Load every project, in directory walk order
    pub fn load_projects(&self) -> Result<Vec<Project>> {
        let projects_dir = self.projects_dir();
        if !projects_dir.exists() {
            tracing::debug!("No projects directory at {:?}", projects_dir);
            return Ok(Vec::new());
        }

        let mut projects = Vec::new();

        for entry in WalkDir::new(&projects_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            match self.load_project(path) {
                Ok(project) => {
                    if project.published || self.folio.config.render_drafts {
                        projects.push(project);
                    } else {
                        tracing::debug!("Skipping unpublished project {}", project.slug);
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to load project {:?}: {}", path, e);
                }
            }
        }

        tracing::debug!("Loaded {} projects from {:?}", projects.len(), projects_dir);

        Ok(projects)
    }

    /// Load a single project from a file
    fn load_project(&self, path: &Path) -> Result<Project> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let slug = slug_for(path);

        let published_at = fm.parse_published_at();
        if published_at.is_none() {
            match &fm.published_at {
                Some(raw) => tracing::warn!("{}: unparsable publishedAt {:?}", slug, raw),
                None => tracing::warn!("{}: missing publishedAt", slug),
            }
        }

        let summary = fm
            .summary
            .or_else(|| MarkdownRenderer::first_paragraph(body))
            .unwrap_or_default();

        let meta = ProjectMeta {
            title: fm.title.unwrap_or_else(|| slug.clone()),
            summary,
            images: fm.images,
            link: fm.link.filter(|l| !l.trim().is_empty()),
            extra: fm.extra,
        };

        let mut project = Project::new(slug, published_at);
        project.meta = meta;
        project.content = body.to_string();
        project.html = self.renderer.render(body);
        project.published = fm.published;

        Ok(project)
    }
}

/// Slug from the file name; `index.*` files take their directory's name
fn slug_for(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled");

    if stem == "index" {
        if let Some(dir) = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str())
        {
            return dir.to_string();
        }
    }

    stem.to_string()
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e, "md" | "markdown" | "mdx"))
        .unwrap_or(false)
}
