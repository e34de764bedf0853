//! Content module - handles projects and content processing

mod frontmatter;
pub mod loader;
mod markdown;
mod project;

pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use project::{Project, ProjectMeta};
