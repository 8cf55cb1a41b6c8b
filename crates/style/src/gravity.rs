//! Alignment of rows within the container and of boxes within a row.
use crate::parsers::{parse_horizontal_gravity, parse_vertical_gravity, StyleParseError};
use serde::{Deserialize, Serialize};

/// Horizontal alignment of a row, relative to the flow direction.
/// Under right-to-left flow `Start` is the right edge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HorizontalGravity {
    #[default]
    Start,
    Center,
    End,
}

impl HorizontalGravity {
    pub fn parse(s: &str) -> Result<Self, StyleParseError> {
        parse_horizontal_gravity(s)
    }

    /// Offset of a run of `occupied` pixels inside `available` pixels.
    pub fn offset(self, available: f32, occupied: f32) -> f32 {
        match self {
            HorizontalGravity::Start => 0.0,
            HorizontalGravity::Center => (available - occupied) / 2.0,
            HorizontalGravity::End => available - occupied,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalGravity {
    #[default]
    Top,
    Center,
    Bottom,
}

impl VerticalGravity {
    pub fn parse(s: &str) -> Result<Self, StyleParseError> {
        parse_vertical_gravity(s)
    }

    pub fn offset(self, available: f32, occupied: f32) -> f32 {
        match self {
            VerticalGravity::Top => 0.0,
            VerticalGravity::Center => (available - occupied) / 2.0,
            VerticalGravity::Bottom => available - occupied,
        }
    }
}
