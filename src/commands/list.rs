//! List projects in display order

use anyhow::Result;

use crate::content::Project;
use crate::projects::{Priority, PriorityOverrides, ProjectQuery, ProjectRange};
use crate::Folio;

/// Options from the command line
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Slugs excluded in addition to `projects.exclude`
    pub exclude: Vec<String>,
    pub range: Option<ProjectRange>,
    /// Use the configured featured range
    pub featured: bool,
}

/// Combine configured and command-line options into one query
pub fn build_query(folio: &Folio, options: &ListOptions) -> Result<ProjectQuery> {
    let projects = &folio.config.projects;
    let mut query = projects.query().exclude(options.exclude.iter().cloned());

    if options.featured {
        match projects.featured {
            Some(range) => query = query.range(range),
            None => anyhow::bail!("No `projects.featured` range in _config.yml"),
        }
    }
    if let Some(range) = options.range {
        query = query.range(range);
    }

    Ok(query)
}

/// List projects
pub fn run(folio: &Folio, options: &ListOptions) -> Result<()> {
    let query = build_query(folio, options)?;
    let projects = folio.projects(&query)?;

    println!("Projects ({}):", projects.len());
    for line in format_lines(&projects, &folio.config.projects.priority) {
        println!("  {}", line);
    }

    Ok(())
}

fn format_lines(projects: &[Project], overrides: &PriorityOverrides) -> Vec<String> {
    projects
        .iter()
        .map(|p| {
            let date = p
                .published_at
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "----------".to_string());
            let pin = match overrides.priority_of(&p.slug) {
                Priority::Pinned(n) => format!(" (pinned {})", n),
                Priority::Unpinned => String::new(),
            };
            format!("{} - {} [{}]{}", date, p.meta.title, p.slug, pin)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_format_lines() {
        let date = Local.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let projects = vec![
            Project::new("queue", Some(date)).with_title("Queue"),
            Project::new("infra", None).with_title("Infra"),
        ];
        let overrides = PriorityOverrides::new().pin("queue", 1);

        let lines = format_lines(&projects, &overrides);
        assert_eq!(lines[0], "2024-06-01 - Queue [queue] (pinned 1)");
        assert_eq!(lines[1], "---------- - Infra [infra]");
    }

    #[test]
    fn test_build_query_merges_config_and_flags() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut folio = Folio::new(tmp.path()).unwrap();
        folio.config.projects.exclude = vec!["old".to_string()];
        folio.config.projects.featured = Some(ProjectRange::new(1, Some(2)).unwrap());

        let options = ListOptions {
            exclude: vec!["other".to_string()],
            featured: true,
            ..Default::default()
        };
        let query = build_query(&folio, &options).unwrap();
        assert!(query.exclude.contains("old"));
        assert!(query.exclude.contains("other"));
        assert_eq!(query.range, folio.config.projects.featured);

        // An explicit range wins over the featured one
        let options = ListOptions {
            range: Some(ProjectRange::starting_at(3).unwrap()),
            featured: true,
            ..Default::default()
        };
        let query = build_query(&folio, &options).unwrap();
        assert_eq!(query.range, Some(ProjectRange::starting_at(3).unwrap()));
    }

    #[test]
    fn test_featured_without_config_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        let options = ListOptions {
            featured: true,
            ..Default::default()
        };
        assert!(build_query(&folio, &options).is_err());
    }
}
