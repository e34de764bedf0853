//! Card data handed to the presentation layer

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::Project;
use crate::helpers::{asset_url, date_xml, format_date, full_url_for, project_url};

/// Number of leading cards whose images are loaded eagerly
pub const EAGER_CARDS: usize = 2;

/// Everything needed to render one project card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub slug: String,
    pub href: String,
    /// Absolute detail page URL, for sharing and feeds
    pub url: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    /// External link, empty when the project has none
    pub link: String,
    /// Load images eagerly instead of lazily
    pub eager: bool,
    /// Show a "view details" link to the project page
    pub has_details: bool,
    /// Display date in the site's `date_format`
    pub date: Option<String>,
    /// Machine-readable date
    pub published_at: Option<String>,
}

impl ProjectCard {
    pub fn new(config: &SiteConfig, project: &Project, index: usize) -> Self {
        Self {
            slug: project.slug.clone(),
            href: project_url(config, &project.slug),
            url: full_url_for(config, &format!("projects/{}", project.slug)),
            title: project.meta.title.clone(),
            description: project.meta.summary.trim().to_string(),
            images: project
                .meta
                .images
                .iter()
                .map(|image| asset_url(config, image))
                .collect(),
            link: project.meta.link.clone().unwrap_or_default(),
            eager: index < EAGER_CARDS,
            has_details: project.has_details(),
            date: project
                .published_at
                .map(|d| format_date(&d, &config.date_format)),
            published_at: project.published_at.map(|d| date_xml(&d)),
        }
    }
}

/// Detail page data: the card plus the rendered body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPage {
    #[serde(flatten)]
    pub card: ProjectCard,
    pub html: String,
}

impl ProjectPage {
    pub fn new(config: &SiteConfig, project: &Project, index: usize) -> Self {
        Self {
            card: ProjectCard::new(config, project, index),
            html: project.html.clone(),
        }
    }
}

/// Cards for an already ordered project list
pub fn build_cards(config: &SiteConfig, projects: &[Project]) -> Vec<ProjectCard> {
    projects
        .iter()
        .enumerate()
        .map(|(index, project)| ProjectCard::new(config, project, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn projects() -> Vec<Project> {
        let date = Local.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        vec![
            Project::new("one", Some(date))
                .with_title("One")
                .with_summary("  First project.  ")
                .with_content("## Details"),
            Project::new("two", None),
            Project::new("three", None),
        ]
    }

    #[test]
    fn test_first_two_cards_are_eager() {
        let cards = build_cards(&SiteConfig::default(), &projects());
        let eager: Vec<bool> = cards.iter().map(|c| c.eager).collect();
        assert_eq!(eager, vec![true, true, false]);
    }

    #[test]
    fn test_card_fields() {
        let config = SiteConfig::default();
        let mut list = projects();
        list[0].meta.images = vec!["/images/one.jpg".to_string()];
        list[0].meta.link = Some("https://github.com/x/one".to_string());

        let cards = build_cards(&config, &list);
        let one = &cards[0];
        assert_eq!(one.href, "/projects/one");
        assert_eq!(one.url, "http://example.com/projects/one");
        assert_eq!(one.title, "One");
        assert_eq!(one.description, "First project.");
        assert_eq!(one.images, vec!["/images/one.jpg"]);
        assert_eq!(one.link, "https://github.com/x/one");
        assert!(one.has_details);
        assert_eq!(one.date.as_deref(), Some("Jun 2024"));

        let two = &cards[1];
        assert_eq!(two.link, "");
        assert!(!two.has_details);
        assert_eq!(two.date, None);
    }

    #[test]
    fn test_page_carries_rendered_body() {
        let mut project = projects().remove(0);
        project.html = "<h2>Details</h2>\n".to_string();

        let page = ProjectPage::new(&SiteConfig::default(), &project, 0);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["slug"], "one");
        assert_eq!(json["href"], "/projects/one");
        assert_eq!(json["html"], "<h2>Details</h2>\n");
        assert_eq!(json["hasDetails"], true);
    }

    #[test]
    fn test_card_json_is_camel_case() {
        let cards = build_cards(&SiteConfig::default(), &projects()[..1]);
        let json = serde_json::to_string(&cards).unwrap();
        assert!(json.contains("\"hasDetails\":true"));
        assert!(json.contains("\"publishedAt\":\"2024-06-01T00:00:00"));
    }
}
