//! Front-matter parsing

use anyhow::{anyhow, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use crate::helpers::parse_date;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Front-matter of a project file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub summary: Option<String>,
    #[serde(rename = "publishedAt", alias = "published_at", alias = "date")]
    pub published_at: Option<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub images: Vec<String>,
    pub link: Option<String>,
    /// Projects are published by default
    #[serde(default = "default_published")]
    pub published: bool,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

fn default_published() -> bool {
    true
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: None,
            summary: None,
            published_at: None,
            images: Vec::new(),
            link: None,
            published: true,
            extra: HashMap::new(),
        }
    }
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let content = content.trim_start();

        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        if content.starts_with(";;;") || content.starts_with('{') {
            return Self::parse_json(content);
        }

        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str)> {
        let rest = &content[3..];
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing ---, treat as no front-matter
            return Ok((FrontMatter::default(), content));
        };

        let yaml_content = &rest[..end_pos];
        let remaining = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        // A leading --- that is really a markdown rule has no `key: value` lines
        if !yaml_content.lines().any(looks_like_yaml_key) {
            return Ok((FrontMatter::default(), content));
        }

        match serde_yaml::from_str::<FrontMatter>(yaml_content) {
            Ok(fm) => Ok((fm, remaining)),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse YAML front-matter, treating as content: {}",
                    e
                );
                Ok((FrontMatter::default(), content))
            }
        }
    }

    fn parse_json(content: &str) -> Result<(Self, &str)> {
        // JSON front-matter ends with ;;;
        if let Some(rest) = content.strip_prefix(";;;") {
            if let Some(end_pos) = rest.find(";;;") {
                let json_content = &rest[..end_pos];
                let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);

                let fm: FrontMatter = serde_json::from_str(json_content)
                    .map_err(|e| anyhow!("Failed to parse JSON front-matter: {}", e))?;

                return Ok((fm, remaining));
            }
        }

        if content.starts_with('{') {
            let mut depth = 0;
            let mut end_pos = 0;
            for (i, c) in content.char_indices() {
                match c {
                    '{' => depth += 1,
                    '}' => {
                        depth -= 1;
                        if depth == 0 {
                            end_pos = i + 1;
                            break;
                        }
                    }
                    _ => {}
                }
            }

            if end_pos > 0 {
                let json_content = &content[..end_pos];
                let remaining = content[end_pos..].trim_start_matches(['\n', '\r']);

                let fm: FrontMatter = serde_json::from_str(json_content)
                    .map_err(|e| anyhow!("Failed to parse JSON front-matter: {}", e))?;

                return Ok((fm, remaining));
            }
        }

        Err(anyhow!("Invalid JSON front-matter"))
    }

    /// Parse the publish date, `None` if missing or unparsable
    pub fn parse_published_at(&self) -> Option<DateTime<Local>> {
        self.published_at.as_deref().and_then(parse_date)
    }
}

/// `key:` followed by a space or end of line, where key is a plain identifier
fn looks_like_yaml_key(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return false;
    }

    let Some(colon_pos) = trimmed.find(':') else {
        return false;
    };
    let key = &trimmed[..colon_pos];
    let is_valid_key = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        && !matches!(key, "http" | "https" | "ftp" | "mailto");

    let after_colon = &trimmed[colon_pos + 1..];
    is_valid_key && (after_colon.is_empty() || after_colon.starts_with(' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Distributed Task Queue
summary: Real-time job scheduling across workers.
publishedAt: 2024-06-01
images:
  - /images/projects/queue/cover.jpg
  - /images/projects/queue/dashboard.jpg
link: https://github.com/example/queue
---

## Overview

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Distributed Task Queue"));
        assert_eq!(fm.published_at.as_deref(), Some("2024-06-01"));
        assert_eq!(fm.images.len(), 2);
        assert_eq!(fm.link.as_deref(), Some("https://github.com/example/queue"));
        assert!(fm.published);
        assert!(remaining.contains("This is the content."));
    }

    #[test]
    fn test_date_aliases() {
        let (fm, _) = FrontMatter::parse("---\ndate: 2024-03-01\n---\nbody").unwrap();
        assert_eq!(fm.published_at.as_deref(), Some("2024-03-01"));

        let (fm, _) = FrontMatter::parse("---\npublished_at: 2024-03-02\n---\nbody").unwrap();
        assert_eq!(fm.published_at.as_deref(), Some("2024-03-02"));
    }

    #[test]
    fn test_parse_json_frontmatter() {
        let content = r#"{"title": "Test Project", "images": ["a.png", "b.png"]}

This is content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Test Project"));
        assert_eq!(fm.images, vec!["a.png", "b.png"]);
        assert!(remaining.contains("This is content."));
    }

    #[test]
    fn test_single_string_images() {
        let (fm, _) = FrontMatter::parse("---\ntitle: X\nimages: cover.png\n---\n").unwrap();
        assert_eq!(fm.images, vec!["cover.png"]);
    }

    #[test]
    fn test_unparsable_date_yields_none() {
        let fm = FrontMatter {
            published_at: Some("sometime last spring".to_string()),
            ..Default::default()
        };
        assert!(fm.parse_published_at().is_none());

        let fm = FrontMatter {
            published_at: Some("2024-01-15".to_string()),
            ..Default::default()
        };
        let dt = fm.parse_published_at().unwrap();
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2024-01-15");
    }

    #[test]
    fn test_extra_fields_kept() {
        let (fm, _) = FrontMatter::parse("---\ntitle: X\nteam: [a, b]\n---\n").unwrap();
        assert!(fm.extra.contains_key("team"));
    }

    #[test]
    fn test_markdown_separator_not_yaml() {
        let content = r#"
---

Some text with a list:
- Item 1
- Item 2

---
More content here.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert!(remaining.contains("Some text"));
    }

    #[test]
    fn test_content_with_url_not_yaml() {
        let content = r#"
---

See https://example.com/path and http://test.com

---
More content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert!(remaining.contains("https://example.com"));
    }
}
