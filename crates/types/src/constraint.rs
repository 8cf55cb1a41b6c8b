//! Size constraints exchanged between a container and the size provider.

use serde::{Deserialize, Serialize};

/// How a dimension constraint should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeasureMode {
    /// The dimension must be exactly the given size.
    Exact,
    /// The dimension may be anything up to the given size.
    AtMost,
    /// No constraint; the size value is meaningless.
    #[default]
    Unspecified,
}

/// A single-axis constraint: a mode plus a pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SizeConstraint {
    pub mode: MeasureMode,
    pub size: f32,
}

impl SizeConstraint {
    pub fn exact(size: f32) -> Self {
        Self {
            mode: MeasureMode::Exact,
            size: size.max(0.0),
        }
    }

    pub fn at_most(size: f32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size: size.max(0.0),
        }
    }

    pub fn unspecified() -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size: 0.0,
        }
    }

    pub fn is_bounded(&self) -> bool {
        self.mode != MeasureMode::Unspecified
    }

    /// Clamps `value` into the constraint. Unspecified constraints leave it untouched.
    pub fn constrain(&self, value: f32) -> f32 {
        match self.mode {
            MeasureMode::Exact => self.size,
            MeasureMode::AtMost => value.min(self.size).max(0.0),
            MeasureMode::Unspecified => value.max(0.0),
        }
    }

    /// Derives the constraint a wrap-content child sees after `used` pixels of this
    /// dimension are already taken.
    ///
    /// Bounded parents hand children an upper bound; unspecified parents stay unspecified.
    pub fn for_child(&self, used: f32) -> Self {
        match self.mode {
            MeasureMode::Exact | MeasureMode::AtMost => Self::at_most(self.size - used),
            MeasureMode::Unspecified => Self::unspecified(),
        }
    }
}
