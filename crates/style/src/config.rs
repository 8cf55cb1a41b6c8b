//! The configuration a flow container reads on every layout pass.

use crate::gravity::{HorizontalGravity, VerticalGravity};
use crate::limit::RowLimit;
use crate::spacing::{LastRowSpacing, SpacingPolicy};
use serde::{Deserialize, Serialize};
use wrapflow_types::Edges;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowConfig {
    /// When false every box is kept on a single row.
    pub flow_enabled: bool,
    /// Horizontal gap between boxes of a row.
    pub child_spacing: SpacingPolicy,
    /// Gap assumed while packing rows whose spacing is `Auto`.
    pub min_child_spacing: f32,
    /// Override for the trailing row's horizontal gap.
    pub last_row_spacing: LastRowSpacing,
    /// Vertical gap between rows.
    pub row_spacing: SpacingPolicy,
    /// Lay boxes out right-to-left.
    pub rtl: bool,
    /// Rows shown while shrunk.
    pub shrink_row_limit: RowLimit,
    /// Rows shown while expanded.
    pub expand_row_limit: RowLimit,
    /// Keep the toggle visible after expanding so the content can be shrunk again.
    pub enable_shrink_toggle_when_expanded: bool,
    pub horizontal_gravity: HorizontalGravity,
    /// Position of the whole block of rows inside the container.
    pub vertical_gravity: VerticalGravity,
    /// Position of each box inside its row.
    pub row_vertical_gravity: VerticalGravity,
    pub is_expanded: bool,
    /// Physical insets. `left` and `right` are not swapped under `rtl`, so an
    /// rtl pass mirrors an ltr pass only when both horizontal sides are equal.
    pub padding: Edges,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            flow_enabled: true,
            child_spacing: SpacingPolicy::Fixed(0.0),
            min_child_spacing: 0.0,
            last_row_spacing: LastRowSpacing::Undefined,
            row_spacing: SpacingPolicy::Fixed(0.0),
            rtl: false,
            shrink_row_limit: RowLimit::Unbounded,
            expand_row_limit: RowLimit::Unbounded,
            enable_shrink_toggle_when_expanded: true,
            horizontal_gravity: HorizontalGravity::Start,
            vertical_gravity: VerticalGravity::Top,
            row_vertical_gravity: VerticalGravity::Top,
            is_expanded: false,
            padding: Edges::default(),
        }
    }
}

impl FlowConfig {
    /// The row limit of the current expand/collapse state.
    pub fn active_row_limit(&self) -> RowLimit {
        if self.is_expanded {
            self.expand_row_limit
        } else {
            self.shrink_row_limit
        }
    }

    /// Whether the two row limits leave room for a toggle at all.
    pub fn limits_allow_toggle(&self) -> bool {
        self.shrink_row_limit.is_bounded() && self.shrink_row_limit < self.expand_row_limit
    }

    /// Whether a toggle box, if present, takes part in this pass.
    pub fn toggle_enabled(&self) -> bool {
        self.limits_allow_toggle()
            && !(self.is_expanded && !self.enable_shrink_toggle_when_expanded)
    }

    /// Returns a copy with out-of-range values clamped.
    pub fn sanitized(&self) -> Self {
        let mut config = self.clone();
        config.child_spacing = self.child_spacing.sanitized();
        config.last_row_spacing = self.last_row_spacing.sanitized();
        config.row_spacing = self.row_spacing.sanitized();
        config.min_child_spacing = if self.min_child_spacing.is_finite() {
            self.min_child_spacing.max(0.0)
        } else {
            0.0
        };
        config.padding = self.padding.finite().non_negative();

        if config != *self {
            log::warn!(
                "Flow configuration had negative or non-finite spacing or padding; clamped to zero"
            );
        }
        if self.shrink_row_limit.is_bounded() && self.shrink_row_limit > self.expand_row_limit {
            log::warn!(
                "Shrink row limit {} exceeds expand row limit {}; toggle disabled",
                self.shrink_row_limit,
                self.expand_row_limit
            );
        }
        config
    }
}
