//! Per-pass row model produced by the measurer and consumed by the placer.

use wrapflow_style::RowLimit;
use wrapflow_types::Size;

/// A horizontal run of boxes. Rebuilt from scratch on every measurement pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    /// Child indices in flow order.
    pub children: Vec<usize>,
    /// Resolved horizontal gap between the boxes of this row.
    pub spacing: f32,
    /// Tallest box of the row, margins included.
    pub height: f32,
    /// Occupied width with packing gaps, trailing gap excluded.
    pub width: f32,
}

impl Row {
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.children.contains(&index)
    }
}

/// Everything a measurement pass resolves. The placer needs nothing else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowMeasurement {
    pub rows: Vec<Row>,
    /// Content size (margins excluded) per child index. `None` for boxes that
    /// were not assigned to a row during this pass.
    pub child_sizes: Vec<Option<Size>>,
    /// Resolved container size, padding included.
    pub size: Size,
    /// Height of the admitted rows plus row gaps, padding excluded.
    pub content_height: f32,
    /// Resolved vertical gap between rows.
    pub row_spacing: f32,
    /// Row limit that was active for this pass.
    pub row_limit: RowLimit,
    /// Index of the toggle box when it was laid out.
    pub toggle: Option<usize>,
    /// True when the toggle was substituted for content that did not fit.
    pub truncated: bool,
}

impl FlowMeasurement {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows rendered under the active row limit.
    pub fn visible_rows(&self) -> &[Row] {
        &self.rows[..self.row_limit.clamp(self.rows.len())]
    }

    /// Reverse lookup from child index to the row holding it.
    pub fn row_of(&self, index: usize) -> Option<usize> {
        if index >= self.child_sizes.len() {
            return None;
        }
        self.rows.iter().position(|row| row.contains(index))
    }
}
