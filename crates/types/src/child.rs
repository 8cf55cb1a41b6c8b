//! The box model the flow container arranges.

use crate::geometry::{Edges, Size};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    #[default]
    Visible,
    /// Takes no space and receives a zero-area placement.
    Collapsed,
}

/// One rectangular content box owned by the host.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChildBox {
    /// Position of the box in the container's child list.
    pub index: usize,
    /// Unconstrained content size, margins excluded.
    pub intrinsic: Size,
    pub margins: Edges,
    pub visibility: Visibility,
    /// Marks the injected "show more / show less" control.
    pub is_toggle: bool,
}

impl ChildBox {
    pub fn new(index: usize, width: f32, height: f32) -> Self {
        Self {
            index,
            intrinsic: Size::new(width, height),
            ..Default::default()
        }
    }

    pub fn toggle(index: usize, width: f32, height: f32) -> Self {
        Self {
            is_toggle: true,
            ..Self::new(index, width, height)
        }
    }

    pub fn with_margins(mut self, margins: Edges) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn is_collapsed(&self) -> bool {
        self.visibility == Visibility::Collapsed
    }
}
