//! Spacing policies for gaps between boxes and between rows.
use crate::parsers::{parse_last_row_spacing, parse_spacing_policy, run_parser, StyleParseError};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Rule for computing the gap between adjacent boxes (or rows).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpacingPolicy {
    /// A fixed gap in pixels.
    Fixed(f32),
    /// Distribute the remaining space evenly across the gaps.
    Auto,
    /// Like `Auto`, but falls back to the given minimum when the axis is unconstrained.
    MinAuto(f32),
}

impl Default for SpacingPolicy {
    fn default() -> Self {
        SpacingPolicy::Fixed(0.0)
    }
}

impl SpacingPolicy {
    pub fn parse(s: &str) -> Result<Self, StyleParseError> {
        run_parser(parse_spacing_policy, s)
    }

    pub fn is_auto(self) -> bool {
        matches!(self, SpacingPolicy::Auto | SpacingPolicy::MinAuto(_))
    }

    /// The policy to use when the axis it applies to has no constraint.
    /// There is no remaining space to distribute, so automatic policies become fixed.
    pub fn for_unconstrained_axis(self) -> Self {
        match self {
            SpacingPolicy::Auto => SpacingPolicy::Fixed(0.0),
            SpacingPolicy::MinAuto(min) => SpacingPolicy::Fixed(min),
            fixed => fixed,
        }
    }

    /// The gap assumed while packing boxes into rows, before a row's final spacing is known.
    pub fn packing_gap(self, min_child_spacing: f32) -> f32 {
        match self {
            SpacingPolicy::Fixed(px) => px,
            SpacingPolicy::Auto => min_child_spacing,
            SpacingPolicy::MinAuto(min) => min,
        }
    }

    /// Resolves the gap for a run of `count` items whose sizes add up to `used`
    /// inside `available` pixels.
    pub fn resolve(self, available: f32, used: f32, count: usize) -> f32 {
        match self {
            SpacingPolicy::Fixed(px) => px,
            SpacingPolicy::Auto if count > 1 => ((available - used) / (count - 1) as f32).max(0.0),
            SpacingPolicy::MinAuto(min) if count > 1 => {
                ((available - used) / (count - 1) as f32).max(min)
            }
            SpacingPolicy::Auto | SpacingPolicy::MinAuto(_) => 0.0,
        }
    }

    /// Clamps negative and non-finite pixel values to zero.
    pub fn sanitized(self) -> Self {
        match self {
            SpacingPolicy::Fixed(px) if !px.is_finite() || px < 0.0 => SpacingPolicy::Fixed(0.0),
            SpacingPolicy::MinAuto(min) if !min.is_finite() || min < 0.0 => {
                SpacingPolicy::MinAuto(0.0)
            }
            other => other,
        }
    }
}

impl fmt::Display for SpacingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpacingPolicy::Fixed(px) => write!(f, "{}px", px),
            SpacingPolicy::Auto => f.write_str("auto"),
            SpacingPolicy::MinAuto(min) => write!(f, "min-auto({}px)", min),
        }
    }
}

impl Serialize for SpacingPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SpacingPolicy::Fixed(px) => serializer.serialize_f32(*px),
            other => serializer.collect_str(other),
        }
    }
}

impl<'de> Deserialize<'de> for SpacingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum SpacingDef {
            Str(String),
            Num(f32),
        }

        match SpacingDef::deserialize(deserializer)? {
            SpacingDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            SpacingDef::Num(px) => Ok(SpacingPolicy::Fixed(px)),
        }
    }
}

/// Spacing override for the trailing row of the container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LastRowSpacing {
    /// Use the container's general child spacing.
    #[default]
    Undefined,
    /// Reuse the resolved spacing of the row above.
    Align,
    Policy(SpacingPolicy),
}

impl LastRowSpacing {
    pub fn parse(s: &str) -> Result<Self, StyleParseError> {
        run_parser(parse_last_row_spacing, s)
    }

    pub fn sanitized(self) -> Self {
        match self {
            LastRowSpacing::Policy(policy) => LastRowSpacing::Policy(policy.sanitized()),
            other => other,
        }
    }
}

impl fmt::Display for LastRowSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LastRowSpacing::Undefined => f.write_str("undefined"),
            LastRowSpacing::Align => f.write_str("align"),
            LastRowSpacing::Policy(policy) => policy.fmt(f),
        }
    }
}

impl Serialize for LastRowSpacing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LastRowSpacing::Policy(policy) => policy.serialize(serializer),
            other => serializer.collect_str(other),
        }
    }
}

impl<'de> Deserialize<'de> for LastRowSpacing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum LastRowDef {
            Str(String),
            Num(f32),
        }

        match LastRowDef::deserialize(deserializer)? {
            LastRowDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            LastRowDef::Num(px) => Ok(LastRowSpacing::Policy(SpacingPolicy::Fixed(px))),
        }
    }
}
