pub mod config;
pub mod gravity;
pub mod limit;
pub mod parsers;
pub mod spacing;

pub use config::FlowConfig;
pub use gravity::{HorizontalGravity, VerticalGravity};
pub use limit::RowLimit;
pub use parsers::StyleParseError;
pub use spacing::{LastRowSpacing, SpacingPolicy};
