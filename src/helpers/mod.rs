//! Helper functions shared by commands, cards and the loader

mod date;
mod url;

pub use date::*;
pub use url::*;
