//! Configuration module

mod site;

pub use site::ProjectsConfig;
pub use site::SiteConfig;
