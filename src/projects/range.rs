//! 1-based pagination window over an ordered project list

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when constructing a [`ProjectRange`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("range start must be at least 1")]
    ZeroStart,

    #[error("range end {end} is before start {start}")]
    EndBeforeStart { start: usize, end: usize },

    #[error("invalid range {0:?}, expected N, N.. or N..M")]
    Invalid(String),
}

/// A window of 1-based positions `start..=end`, or `start..` when open ended
///
/// Applied after ordering. Bounds past the end of the list are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRange {
    start: usize,
    end: Option<usize>,
}

impl ProjectRange {
    /// Create a range, validating `start >= 1` and `end >= start`
    pub fn new(start: usize, end: Option<usize>) -> Result<Self, RangeError> {
        if start == 0 {
            return Err(RangeError::ZeroStart);
        }
        if let Some(end) = end {
            if end < start {
                return Err(RangeError::EndBeforeStart { start, end });
            }
        }
        Ok(Self { start, end })
    }

    /// Open-ended range starting at `start`
    pub fn starting_at(start: usize) -> Result<Self, RangeError> {
        Self::new(start, None)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> Option<usize> {
        self.end
    }

    /// Slice `items` to this window, clamping to its length
    pub fn apply<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = items.len();
        let lo = (self.start - 1).min(len);
        let hi = self.end.map_or(len, |end| end.min(len));
        &items[lo..hi]
    }
}

impl fmt::Display for ProjectRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}..{}", self.start, end),
            None => write!(f, "{}..", self.start),
        }
    }
}

impl FromStr for ProjectRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || RangeError::Invalid(s.to_string());
        let parse = |part: &str| part.trim().parse::<usize>().map_err(|_| invalid());

        let (start, end) = if let Some((start, end)) = s.split_once("..") {
            let end = end.trim();
            let end = if end.is_empty() { None } else { Some(parse(end)?) };
            (parse(start)?, end)
        } else if let Some((start, end)) = s.split_once('-') {
            (parse(start)?, Some(parse(end)?))
        } else {
            (parse(s)?, None)
        };

        Self::new(start, end)
    }
}

impl Serialize for ProjectRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepts `"1..2"`, `3`, `[1]` or `[1, 2]`
impl<'de> Deserialize<'de> for ProjectRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RangeVisitor;

        impl<'de> Visitor<'de> for RangeVisitor {
            type Value = ProjectRange;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a range string, a start position, or [start, end]")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                let start = usize::try_from(value)
                    .map_err(|_| E::custom(RangeError::Invalid(value.to_string())))?;
                ProjectRange::starting_at(start).map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                let start = usize::try_from(value).map_err(|_| E::custom(RangeError::ZeroStart))?;
                ProjectRange::starting_at(start).map_err(E::custom)
            }

            fn visit_seq<S: SeqAccess<'de>>(self, mut seq: S) -> Result<Self::Value, S::Error> {
                let start: usize = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let end: Option<usize> = seq.next_element::<Option<usize>>()?.flatten();
                ProjectRange::new(start, end).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(RangeVisitor)
    }
}
