pub mod fixtures;

use wrapflow::{
    ChildBox, FlowConfig, FlowContainer, IntrinsicSizeProvider, Rect, SizeConstraint,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Result of one measure + place cycle on a container.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOut {
    pub width: f32,
    pub height: f32,
    pub rows: Vec<Vec<usize>>,
    pub placements: Vec<Rect>,
}

/// Runs a full pass with intrinsic sizes against an exact width.
pub fn lay_out(container: &mut FlowContainer, width: f32) -> Option<LaidOut> {
    let size = container.measure(
        &IntrinsicSizeProvider,
        SizeConstraint::exact(width),
        SizeConstraint::unspecified(),
    );
    let placements = container.place()?.to_vec();
    let rows = container
        .measurement()?
        .rows
        .iter()
        .map(|row| row.children.clone())
        .collect();
    Some(LaidOut {
        width: size.width,
        height: size.height,
        rows,
        placements,
    })
}

/// A refreshed container holding `children`.
pub fn container_with(config: FlowConfig, children: Vec<ChildBox>) -> FlowContainer {
    let mut container = FlowContainer::new(config);
    container.set_children(children);
    container.mark_refreshed();
    container
}
