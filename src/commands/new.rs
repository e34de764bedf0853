//! Create a new project

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::loader::ContentLoader;
use crate::Folio;

/// Write `source/_projects/<slug>.md` from the project scaffold
pub fn create_project(folio: &Folio, title: &str, slug: Option<&str>) -> Result<PathBuf> {
    let now = chrono::Local::now();

    let slug = match slug {
        Some(s) => slug::slugify(s),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from {:?}", title);
    }

    let target_dir = ContentLoader::new(folio).projects_dir();
    fs::create_dir_all(&target_dir)?;

    let file_path = target_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    // Load scaffold template
    let scaffold_path = folio.base_dir.join("scaffolds").join("project.md");
    let scaffold_content = if scaffold_path.exists() {
        fs::read_to_string(&scaffold_path)?
    } else {
        "---\ntitle: {{ title }}\nsummary: ''\npublishedAt: {{ date }}\nimages: []\n---\n"
            .to_string()
    };

    let content = scaffold_content
        .replace("{{ title }}", &yaml_quote(title))
        .replace("{{ date }}", &now.format("%Y-%m-%d").to_string())
        .replace("{{ slug }}", &slug);

    fs::write(&file_path, content)?;

    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Quote a scalar when it would otherwise confuse YAML
fn yaml_quote(s: &str) -> String {
    let needs_quotes = s.contains(": ")
        || s.contains(" #")
        || s.starts_with(|c: char| "!&*[]{}|>'\"%@`#,?-".contains(c));
    if needs_quotes {
        format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        s.to_string()
    }
}
