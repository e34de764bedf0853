//! Generate project data files

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cards::{build_cards, ProjectCard, ProjectPage};
use crate::content::loader::ContentLoader;
use crate::content::Project;
use crate::projects::build_project_list;
use crate::Folio;

/// Full listing, written to `projects.json`
pub const PROJECTS_FILE: &str = "projects.json";
/// Featured window, written to `featured.json`
pub const FEATURED_FILE: &str = "featured.json";
/// Detail pages, one `<slug>.json` each
pub const PAGES_DIR: &str = "projects";

#[derive(Serialize)]
struct Listing<'a> {
    title: &'a str,
    author: &'a str,
    description: &'a str,
    language: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<String>,
    count: usize,
    projects: Vec<ProjectCard>,
}

/// Write the data files and return their paths
pub fn run(folio: &Folio) -> Result<Vec<PathBuf>> {
    let start = std::time::Instant::now();
    let config = &folio.config;

    let all = ContentLoader::new(folio).load_projects()?;
    tracing::info!("Loaded {} projects", all.len());

    fs::create_dir_all(&folio.public_dir)?;
    let mut written = Vec::new();

    let mut listings = vec![(PROJECTS_FILE, config.projects.query())];
    match config.projects.featured_query() {
        Some(featured) => listings.push((FEATURED_FILE, featured)),
        None => remove_stale(&folio.public_dir.join(FEATURED_FILE))?,
    }

    for (file, query) in listings {
        let ordered = build_project_list(&all, &query, &config.projects.priority);
        let listing = Listing {
            title: &config.title,
            author: &config.author,
            description: &config.description,
            language: &config.language,
            range: query.range.map(|r| r.to_string()),
            count: ordered.len(),
            projects: build_cards(config, &ordered),
        };

        let path = folio.public_dir.join(file);
        fs::write(&path, serde_json::to_string_pretty(&listing)?)?;
        tracing::debug!("Wrote {} projects to {:?}", listing.count, path);
        written.push(path);

        if file == PROJECTS_FILE {
            write_pages(folio, &ordered)?;
        }
    }

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(written)
}

/// Rewrite the detail pages from scratch so removed projects disappear
fn write_pages(folio: &Folio, ordered: &[Project]) -> Result<()> {
    let dir = folio.public_dir.join(PAGES_DIR);
    if dir.exists() {
        fs::remove_dir_all(&dir)?;
    }
    fs::create_dir_all(&dir)?;

    for (index, project) in ordered.iter().enumerate() {
        let page = ProjectPage::new(&folio.config, project, index);
        let path = dir.join(format!("{}.json", project.slug));
        fs::write(&path, serde_json::to_string_pretty(&page)?)?;
    }

    tracing::debug!("Wrote {} detail pages to {:?}", ordered.len(), dir);
    Ok(())
}

fn remove_stale(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
        tracing::info!("Removed stale {:?}", path);
    }
    Ok(())
}

/// Watch the source directory and config, regenerating on change
pub fn watch(folio: &Folio) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    if folio.source_dir.exists() {
        debouncer
            .watcher()
            .watch(&folio.source_dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", folio.source_dir);
    }

    let config_path = folio.base_dir.join("_config.yml");
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut folio = folio.clone();

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                if !events.iter().any(|e| is_relevant(&e.path)) {
                    continue;
                }

                for event in &events {
                    tracing::info!("File changed: {}", event.path.display());
                }

                // Priorities and exclusions live in the config, so reload it too
                match Folio::new(&folio.base_dir) {
                    Ok(reloaded) => folio = reloaded,
                    Err(e) => tracing::warn!("Keeping previous config: {}", e),
                }

                if let Err(e) = run(&folio) {
                    tracing::error!("Generation failed: {}", e);
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

fn is_relevant(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    !path_str.contains(".git") && !path_str.contains(".DS_Store") && !path_str.ends_with('~')
}
