mod common;

use common::fixtures::*;
use common::{container_with, init_logger, lay_out, TestResult};
use wrapflow::{
    FlowConfig, FlowConfigExt, FlowError, HorizontalGravity, LastRowSpacing, RowLimit,
    SpacingPolicy,
};

const CONFIG_JSON: &str = r#"{
    "childSpacing": "12px",
    "lastRowSpacing": "align",
    "rowSpacing": 4,
    "shrinkRowLimit": 2,
    "expandRowLimit": "unbounded",
    "horizontalGravity": "center"
}"#;

#[test]
fn test_json_config_drives_layout() -> TestResult {
    init_logger();
    let config = FlowConfig::from_json(CONFIG_JSON)?;
    assert_eq!(config.child_spacing, SpacingPolicy::Fixed(12.0));
    assert_eq!(config.last_row_spacing, LastRowSpacing::Align);
    assert_eq!(config.shrink_row_limit, RowLimit::Limited(2));
    assert_eq!(config.horizontal_gravity, HorizontalGravity::Center);

    let mut container = container_with(config, uniform_boxes(5, 100.0, 20.0));
    let laid_out = lay_out(&mut container, 250.0).ok_or("no layout")?;
    assert_eq!(laid_out.rows, vec![vec![0, 1], vec![2, 3], vec![4]]);
    // Two admitted rows and one gap.
    assert_eq!(laid_out.height, 44.0);
    // Rows of 212 centred in 250.
    assert_eq!(laid_out.placements[0].x, 19.0);
    assert_eq!(laid_out.placements[2].y, 24.0);
    assert_eq!(laid_out.placements[4], wrapflow::Rect::ZERO);
    Ok(())
}

#[test]
fn test_malformed_json_is_reported() {
    let err = FlowConfig::from_json("{ \"childSpacing\": ").unwrap_err();
    assert!(matches!(err, FlowError::Json(_)));

    let err = FlowConfig::from_json(r#"{ "childSpacing": "sideways" }"#).unwrap_err();
    assert!(matches!(err, FlowError::Json(_)));
    assert!(err.to_string().starts_with("Configuration JSON is invalid"));
}

#[test]
fn test_missing_config_file_is_io_error() {
    let err = FlowConfig::from_path("/nonexistent/wrapflow/config.json").unwrap_err();
    assert!(matches!(err, FlowError::Io(_)));
}

#[test]
fn test_attributes_match_json() -> TestResult {
    let from_attributes = FlowConfig::from_attributes([
        ("childSpacing", "12px"),
        ("lastRowSpacing", "align"),
        ("rowSpacing", "4"),
        ("shrinkRows", "2"),
        ("expandRows", "unbounded"),
        ("horizontalGravity", "center"),
    ])?;
    assert_eq!(from_attributes, FlowConfig::from_json(CONFIG_JSON)?);
    Ok(())
}

#[test]
fn test_bad_attribute_value_is_style_error() {
    let err = FlowConfig::from_attributes([("rowSpacing", "lots")]).unwrap_err();
    assert!(matches!(err, FlowError::Style(_)));
}
