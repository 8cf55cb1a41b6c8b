//! Loading [`FlowConfig`] from host-provided sources.

use crate::error::FlowError;
use std::path::Path;
use wrapflow_style::parsers::{parse_horizontal_gravity, parse_vertical_gravity};
use wrapflow_style::{FlowConfig, LastRowSpacing, RowLimit, SpacingPolicy, StyleParseError};
use wrapflow_types::Edges;

/// Constructors for [`FlowConfig`] that need the root crate's error type.
pub trait FlowConfigExt: Sized {
    /// Parses a camelCase JSON object. Missing keys keep their defaults.
    fn from_json(json: &str) -> Result<Self, FlowError>;

    /// Reads and parses a JSON file.
    fn from_path(path: impl AsRef<Path>) -> Result<Self, FlowError>;

    /// Builds a configuration from string attributes, the way a markup
    /// host hands them over (`childSpacing="auto"`, `shrinkRows="2"`).
    fn from_attributes<'a, I>(attributes: I) -> Result<Self, FlowError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>;
}

impl FlowConfigExt for FlowConfig {
    fn from_json(json: &str) -> Result<Self, FlowError> {
        let config: FlowConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    fn from_path(path: impl AsRef<Path>) -> Result<Self, FlowError> {
        let path = path.as_ref();
        log::debug!("Loading flow configuration from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn from_attributes<'a, I>(attributes: I) -> Result<Self, FlowError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = FlowConfig::default();
        for (name, value) in attributes {
            apply_attribute(&mut config, name, value.trim())?;
        }
        Ok(config.sanitized())
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, FlowError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(FlowError::Style(StyleParseError::InvalidValue {
            property: name.to_string(),
            value: value.to_string(),
        })),
    }
}

fn parse_pixels(name: &str, value: &str) -> Result<f32, FlowError> {
    match SpacingPolicy::parse(value)? {
        SpacingPolicy::Fixed(px) => Ok(px),
        _ => Err(FlowError::Style(StyleParseError::InvalidValue {
            property: name.to_string(),
            value: value.to_string(),
        })),
    }
}

fn apply_attribute(config: &mut FlowConfig, name: &str, value: &str) -> Result<(), FlowError> {
    match name {
        "flowEnabled" => config.flow_enabled = parse_flag(name, value)?,
        "childSpacing" => config.child_spacing = SpacingPolicy::parse(value)?,
        "minChildSpacing" => config.min_child_spacing = parse_pixels(name, value)?,
        "lastRowSpacing" => config.last_row_spacing = LastRowSpacing::parse(value)?,
        "rowSpacing" => config.row_spacing = SpacingPolicy::parse(value)?,
        "rtl" => config.rtl = parse_flag(name, value)?,
        "shrinkRows" | "shrinkRowLimit" => config.shrink_row_limit = RowLimit::parse(value)?,
        "expandRows" | "expandRowLimit" => config.expand_row_limit = RowLimit::parse(value)?,
        "enableShrinkToggleWhenExpanded" => {
            config.enable_shrink_toggle_when_expanded = parse_flag(name, value)?
        }
        "horizontalGravity" => config.horizontal_gravity = parse_horizontal_gravity(value)?,
        "verticalGravity" => config.vertical_gravity = parse_vertical_gravity(value)?,
        "rowVerticalGravity" => config.row_vertical_gravity = parse_vertical_gravity(value)?,
        "isExpanded" => config.is_expanded = parse_flag(name, value)?,
        "padding" => config.padding = Edges::all(parse_pixels(name, value)?),
        _ => return Err(FlowError::UnknownAttribute(name.to_string())),
    }
    Ok(())
}
