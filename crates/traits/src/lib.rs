pub mod measure;

pub use measure::{InMemorySizeProvider, IntrinsicSizeProvider, MeasureError, MeasuredSizeProvider};
