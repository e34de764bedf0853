//! Initialize a new portfolio site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    if target_dir.join("_config.yml").exists() {
        anyhow::bail!("{:?} already contains a _config.yml", target_dir);
    }

    // Create directory structure
    fs::create_dir_all(target_dir.join("source/_projects"))?;
    fs::create_dir_all(target_dir.join("scaffolds"))?;

    let config_content = r#"# Site
title: Portfolio
description: ''
author: John Doe
language: en

# URL
url: http://example.com
root: /

# Directory
source_dir: source
public_dir: public

# Writing
render_drafts: false

# Date format (Moment.js tokens)
date_format: MMM YYYY

# Projects
projects:
  dir: _projects
  # Pin projects ahead of the newest-first order; lower numbers come first
  priority:
    hello-world: 1
  # Slugs that never appear in listings
  exclude: []
  # Window of the ordered list shown as featured, e.g. "1..2" or [1, 2]
  featured: "1..2"
"#;

    fs::write(target_dir.join("_config.yml"), config_content)?;

    let project_scaffold = r#"---
title: {{ title }}
summary: ''
publishedAt: {{ date }}
images: []
link: ''
---
"#;

    fs::write(target_dir.join("scaffolds/project.md"), project_scaffold)?;

    // Create a sample project
    let now = chrono::Local::now();
    let sample_project = format!(
        r#"---
title: Hello World
summary: Your first project. Edit or delete it, then add your own.
publishedAt: {}
images: []
link: ''
---

## Overview

Projects live in `source/_projects`. The file name is the slug.

## Quick Start

```bash
$ folio new "My Next Project"
$ folio list
$ folio generate
```
"#,
        now.format("%Y-%m-%d")
    );

    fs::write(
        target_dir.join("source/_projects/hello-world.md"),
        sample_project,
    )?;

    Ok(())
}
