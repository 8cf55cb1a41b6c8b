use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("No measurement available: measure must run before place.")]
    NotMeasured,
    #[error("Measurement covers {measured} children but the container holds {current}.")]
    ChildCountMismatch { measured: usize, current: usize },
}

pub mod engine;
pub mod measurer;
pub mod placer;
pub mod row;
pub mod state;
pub mod util;

pub use self::engine::FlowLayout;
pub use self::row::{FlowMeasurement, Row};
pub use self::state::{ExpandState, RefreshState};

// Re-export the types every caller of the engine needs
pub use wrapflow_style::FlowConfig;
pub use wrapflow_traits::MeasuredSizeProvider;
pub use wrapflow_types::{ChildBox, Rect, Size, SizeConstraint};

#[cfg(test)]
mod test_utils;
