//! Low-level nom parser functions for flow container attribute values.
//!
//! Spacing values are written the way they appear in host attribute sets:
//! `"auto"`, `"min-auto(8)"`, `"12"`, `"12px"`, plus the last-row keywords
//! `"align"` and `"undefined"`. Row limits are a count or `"unbounded"`.

use crate::gravity::{HorizontalGravity, VerticalGravity};
use crate::limit::RowLimit;
use crate::spacing::{LastRowSpacing, SpacingPolicy};
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit1, space0};
use nom::combinator::{map, map_res, opt, value, verify};
use nom::number::complete::float;
use nom::sequence::{delimited, preceded, terminated};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during attribute parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

// --- Helper Parsers ---

fn ws<'a, O, F>(inner: F) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(space0, inner, space0)
}

/// Parses a finite pixel length with an optional `px` suffix (e.g., "12", "12.5px").
pub fn parse_px(input: &str) -> IResult<&str, f32> {
    terminated(verify(float, |v: &f32| v.is_finite()), opt(tag_no_case("px"))).parse(input)
}

/// Parses a child or row spacing policy.
pub fn parse_spacing_policy(input: &str) -> IResult<&str, SpacingPolicy> {
    alt((
        map(
            preceded(
                tag_no_case("min-auto"),
                delimited(ws(char('(')), parse_px, ws(char(')'))),
            ),
            SpacingPolicy::MinAuto,
        ),
        value(SpacingPolicy::Auto, tag_no_case("auto")),
        map(parse_px, SpacingPolicy::Fixed),
    ))
    .parse(input)
}

/// Parses the spacing override for the trailing row.
pub fn parse_last_row_spacing(input: &str) -> IResult<&str, LastRowSpacing> {
    alt((
        value(LastRowSpacing::Align, tag_no_case("align")),
        value(LastRowSpacing::Undefined, tag_no_case("undefined")),
        map(parse_spacing_policy, LastRowSpacing::Policy),
    ))
    .parse(input)
}

/// Parses a row limit: a non-negative count or `unbounded`.
pub fn parse_row_limit(input: &str) -> IResult<&str, RowLimit> {
    alt((
        value(RowLimit::Unbounded, tag_no_case("unbounded")),
        map_res(digit1, |digits: &str| {
            digits.parse::<usize>().map(RowLimit::Limited)
        }),
    ))
    .parse(input)
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(mut parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
{
    match parser.parse(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

// --- High-level Parse Functions ---

/// Parses a horizontal gravity keyword. `left`/`right` are accepted as aliases
/// of the flow-relative `start`/`end`.
pub fn parse_horizontal_gravity(s: &str) -> Result<HorizontalGravity, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "start" | "left" => Ok(HorizontalGravity::Start),
        "center" | "center-horizontal" => Ok(HorizontalGravity::Center),
        "end" | "right" => Ok(HorizontalGravity::End),
        _ => Err(StyleParseError::InvalidValue {
            property: "horizontal-gravity".to_string(),
            value: s.to_string(),
        }),
    }
}

/// Parses a vertical gravity keyword.
pub fn parse_vertical_gravity(s: &str) -> Result<VerticalGravity, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "top" => Ok(VerticalGravity::Top),
        "center" | "center-vertical" => Ok(VerticalGravity::Center),
        "bottom" => Ok(VerticalGravity::Bottom),
        _ => Err(StyleParseError::InvalidValue {
            property: "vertical-gravity".to_string(),
            value: s.to_string(),
        }),
    }
}
