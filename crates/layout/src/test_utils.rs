use crate::engine::FlowLayout;
use crate::measurer;
use crate::row::FlowMeasurement;
use wrapflow_style::FlowConfig;
use wrapflow_traits::IntrinsicSizeProvider;
use wrapflow_types::{ChildBox, Rect, SizeConstraint};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `count` content boxes of identical size, indexed from 0.
pub fn uniform_boxes(count: usize, width: f32, height: f32) -> Vec<ChildBox> {
    (0..count).map(|i| ChildBox::new(i, width, height)).collect()
}

/// Content boxes with the given widths and a common height.
pub fn boxes_with_widths(widths: &[f32], height: f32) -> Vec<ChildBox> {
    widths
        .iter()
        .enumerate()
        .map(|(i, w)| ChildBox::new(i, *w, height))
        .collect()
}

/// Appends a toggle box after the content, the way the adapter injects it.
pub fn with_toggle(mut children: Vec<ChildBox>, width: f32, height: f32) -> Vec<ChildBox> {
    let index = children.len();
    children.push(ChildBox::toggle(index, width, height));
    children
}

/// Measures with intrinsic sizes, an `AtMost` width and an unconstrained height.
pub fn measure_at_most(children: &[ChildBox], width: f32, config: &FlowConfig) -> FlowMeasurement {
    measurer::measure(
        children,
        &IntrinsicSizeProvider,
        SizeConstraint::at_most(width),
        SizeConstraint::unspecified(),
        config,
    )
}

/// Measures with an `Exact` width and places at the origin.
pub fn layout_exact(children: &[ChildBox], width: f32, config: &FlowConfig) -> (FlowLayout, Vec<Rect>) {
    let mut layout = FlowLayout::new();
    layout.measure(
        children,
        &IntrinsicSizeProvider,
        SizeConstraint::exact(width),
        SizeConstraint::unspecified(),
        config,
    );
    let placements = layout
        .place_at_origin(children)
        .map(|p| p.to_vec())
        .unwrap_or_default();
    (layout, placements)
}

pub fn row_members(measurement: &FlowMeasurement) -> Vec<Vec<usize>> {
    measurement
        .rows
        .iter()
        .map(|row| row.children.clone())
        .collect()
}
