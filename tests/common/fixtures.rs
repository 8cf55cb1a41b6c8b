use wrapflow::{ChildBox, FlowConfig, RowLimit, SpacingPolicy};

/// Tag-like items of varying width, as a tag cloud would show them.
pub fn tag_labels() -> Vec<&'static str> {
    vec![
        "rust", "layout", "flow", "wrap", "geometry", "rows", "toggle", "spacing", "gravity",
        "rtl",
    ]
}

/// Eight pixels per character plus sixteen of horizontal padding.
pub fn tag_box(label: &&'static str, position: usize) -> ChildBox {
    ChildBox::new(position, label.len() as f32 * 8.0 + 16.0, 24.0)
}

pub fn uniform_boxes(count: usize, width: f32, height: f32) -> Vec<ChildBox> {
    (0..count).map(|i| ChildBox::new(i, width, height)).collect()
}

pub fn spaced(px: f32) -> FlowConfig {
    FlowConfig {
        child_spacing: SpacingPolicy::Fixed(px),
        ..Default::default()
    }
}

pub fn collapsible(shrink_rows: usize) -> FlowConfig {
    FlowConfig {
        shrink_row_limit: RowLimit::Limited(shrink_rows),
        expand_row_limit: RowLimit::Unbounded,
        ..Default::default()
    }
}
