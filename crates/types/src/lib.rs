pub mod child;
pub mod constraint;
pub mod geometry;

pub use child::{ChildBox, Visibility};
pub use constraint::{MeasureMode, SizeConstraint};
pub use geometry::{Edges, Rect, Size};
