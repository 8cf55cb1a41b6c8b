//! Wrap-flow layout for hosts: a container that owns its children and
//! configuration, an adapter that populates it from data, and JSON or
//! attribute-based configuration loading.
//!
//! The geometry itself lives in `wrapflow-layout`; this crate re-exports the
//! pieces a host needs so it can depend on `wrapflow` alone.

pub mod adapter;
pub mod config;
pub mod container;
pub mod error;

pub use adapter::FlowAdapter;
pub use config::FlowConfigExt;
pub use container::FlowContainer;
pub use error::FlowError;

pub use wrapflow_layout::{ExpandState, FlowLayout, FlowMeasurement, LayoutError, RefreshState, Row};
pub use wrapflow_style::{
    FlowConfig, HorizontalGravity, LastRowSpacing, RowLimit, SpacingPolicy, StyleParseError,
    VerticalGravity,
};
pub use wrapflow_traits::{
    InMemorySizeProvider, IntrinsicSizeProvider, MeasureError, MeasuredSizeProvider,
};
pub use wrapflow_types::{ChildBox, Edges, MeasureMode, Rect, Size, SizeConstraint, Visibility};
