//! Row limits for the shrunk and expanded states.

use crate::parsers::{parse_row_limit, run_parser, StyleParseError};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Maximum number of rows rendered in a given expand/collapse state.
///
/// Variant order matters: every `Limited` value compares below `Unbounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum RowLimit {
    Limited(usize),
    #[default]
    Unbounded,
}

impl RowLimit {
    pub fn parse(s: &str) -> Result<Self, StyleParseError> {
        run_parser(parse_row_limit, s)
    }

    pub fn is_bounded(self) -> bool {
        matches!(self, RowLimit::Limited(_))
    }

    pub fn rows(self) -> Option<usize> {
        match self {
            RowLimit::Limited(rows) => Some(rows),
            RowLimit::Unbounded => None,
        }
    }

    /// Number of rows this limit admits out of `row_count`.
    pub fn clamp(self, row_count: usize) -> usize {
        match self {
            RowLimit::Limited(rows) => rows.min(row_count),
            RowLimit::Unbounded => row_count,
        }
    }

    /// Whether the zero-based row `index` is rendered under this limit.
    pub fn admits(self, index: usize) -> bool {
        match self {
            RowLimit::Limited(rows) => index < rows,
            RowLimit::Unbounded => true,
        }
    }
}

impl fmt::Display for RowLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowLimit::Limited(rows) => write!(f, "{}", rows),
            RowLimit::Unbounded => f.write_str("unbounded"),
        }
    }
}

impl Serialize for RowLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RowLimit::Limited(rows) => serializer.serialize_u64(*rows as u64),
            RowLimit::Unbounded => serializer.serialize_str("unbounded"),
        }
    }
}

impl<'de> Deserialize<'de> for RowLimit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RowLimitDef {
            Str(String),
            Num(usize),
        }

        match RowLimitDef::deserialize(deserializer)? {
            RowLimitDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            RowLimitDef::Num(rows) => Ok(RowLimit::Limited(rows)),
        }
    }
}
