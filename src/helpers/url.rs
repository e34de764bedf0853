//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/images/cover.jpg") // -> "/portfolio/images/cover.jpg"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Detail page of a project
pub fn project_url(config: &SiteConfig, slug: &str) -> String {
    url_for(config, &format!("projects/{}", slug))
}

/// Resolve an image path; absolute URLs pass through untouched
pub fn asset_url(config: &SiteConfig, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
        path.to_string()
    } else {
        url_for(config, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.url = "https://example.com".to_string();
        config.root = "/portfolio/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/css/style.css"), "/portfolio/css/style.css");
        assert_eq!(url_for(&config, "about/"), "/portfolio/about/");
        assert_eq!(url_for(&config, ""), "/portfolio/");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "/about/"),
            "https://example.com/portfolio/about/"
        );
    }

    #[test]
    fn test_project_url() {
        assert_eq!(
            project_url(&SiteConfig::default(), "task-queue"),
            "/projects/task-queue"
        );
        assert_eq!(
            project_url(&test_config(), "task-queue"),
            "/portfolio/projects/task-queue"
        );
    }

    #[test]
    fn test_asset_url() {
        let config = test_config();
        assert_eq!(
            asset_url(&config, "/images/a.jpg"),
            "/portfolio/images/a.jpg"
        );
        assert_eq!(
            asset_url(&config, "https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
    }
}
