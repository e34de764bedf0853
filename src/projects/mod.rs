//! Project list builder
//!
//! Turns the unordered set of loaded projects into the sequence a page shows:
//! excluded slugs are dropped, pinned projects come first (lowest priority
//! value wins), everything else follows newest first, and an optional 1-based
//! range slices the result.

mod range;

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashSet;

pub use range::{ProjectRange, RangeError};

/// What the builder needs to know about an entry
pub trait ContentEntry {
    /// Stable identifier
    fn slug(&self) -> &str;

    /// Publication time, `None` when missing or unparsable
    fn published_at(&self) -> Option<DateTime<Local>>;
}

/// Display priority of a single entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    /// Manually pinned; lower values are shown first
    Pinned(u32),
    /// No override; sorts after every pinned entry
    Unpinned,
}

/// Slug to priority mapping from `projects.priority` in `_config.yml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityOverrides(IndexMap<String, u32>);

impl PriorityOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin `slug` at `priority`, replacing any previous value
    pub fn pin(mut self, slug: impl Into<String>, priority: u32) -> Self {
        self.0.insert(slug.into(), priority);
        self
    }

    pub fn priority_of(&self, slug: &str) -> Priority {
        self.0
            .get(slug)
            .map_or(Priority::Unpinned, |&p| Priority::Pinned(p))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(slug, p)| (slug.as_str(), *p))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for PriorityOverrides {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(s, p)| (s.into(), p)).collect())
    }
}

/// Filtering and pagination applied to one listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    pub exclude: HashSet<String>,
    pub range: Option<ProjectRange>,
}

impl ProjectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclude<I, S>(mut self, slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(slugs.into_iter().map(Into::into));
        self
    }

    pub fn range(mut self, range: ProjectRange) -> Self {
        self.range = Some(range);
        self
    }

    fn excludes(&self, slug: &str) -> bool {
        self.exclude.contains(slug)
    }
}

/// Build the ordered, filtered and paginated list of entries to display
///
/// Never fails: ranges past the end of the list yield fewer entries.
pub fn build_project_list<T>(
    entries: &[T],
    query: &ProjectQuery,
    overrides: &PriorityOverrides,
) -> Vec<T>
where
    T: ContentEntry + Clone,
{
    let mut keyed: Vec<_> = entries
        .iter()
        .filter(|entry| !query.excludes(entry.slug()))
        .map(|entry| (sort_key(entry, overrides), entry))
        .collect();

    // sort_by is stable, equal keys keep input order
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

    let ordered = match &query.range {
        Some(range) => range.apply(&keyed),
        None => &keyed[..],
    };

    tracing::debug!(
        "Built project list: {} of {} entries (excluded {}, range {:?})",
        ordered.len(),
        entries.len(),
        query.exclude.len(),
        query.range.map(|r| r.to_string())
    );

    ordered.iter().map(|(_, entry)| (*entry).clone()).collect()
}

/// Ordering key: priority first, then newest first
///
/// `Reverse(None)` sorts after every `Reverse(Some(_))`, so undated entries
/// land at the end of their priority group.
pub fn sort_key<T: ContentEntry>(
    entry: &T,
    overrides: &PriorityOverrides,
) -> (Priority, Reverse<Option<DateTime<Local>>>) {
    (overrides.priority_of(entry.slug()), Reverse(entry.published_at()))
}
