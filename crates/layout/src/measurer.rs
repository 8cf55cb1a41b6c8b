//! The measurement pass: row membership, per-row spacing and container size.
//!
//! Boxes are visited once in child order and packed greedily into rows. When
//! the container is row-limited and holds a toggle box, the last admitted row
//! is watched so the toggle can be swapped in for the first box that would
//! leave it no room. Right-to-left flow is a placement concern only; the
//! iteration order here never changes.

use crate::row::{FlowMeasurement, Row};
use wrapflow_style::{FlowConfig, LastRowSpacing, RowLimit, SpacingPolicy};
use wrapflow_traits::MeasuredSizeProvider;
use wrapflow_types::{ChildBox, Edges, MeasureMode, Size, SizeConstraint};

/// Accumulates the row currently being filled.
#[derive(Debug, Default)]
struct RowBuilder {
    children: Vec<usize>,
    /// Box widths plus one packing gap per box.
    width: f32,
    /// Box widths alone, used to distribute automatic spacing.
    boxes_width: f32,
    max_height: f32,
}

impl RowBuilder {
    fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn push(&mut self, index: usize, outer: Size, gap: f32) {
        self.children.push(index);
        self.width += outer.width + gap;
        self.boxes_width += outer.width;
        self.max_height = self.max_height.max(outer.height);
    }

    fn finish(self, spacing: f32, gap: f32) -> Row {
        Row {
            spacing,
            height: self.max_height,
            width: (self.width - gap).max(0.0),
            children: self.children,
        }
    }
}

/// Constraints and policies that stay fixed for the whole pass.
struct Pass<'a> {
    provider: &'a dyn MeasuredSizeProvider,
    width: SizeConstraint,
    height: SizeConstraint,
    padding: Edges,
    row_size: f32,
    allow_flow: bool,
    child_spacing: SpacingPolicy,
    gap: f32,
    limit: RowLimit,
}

impl Pass<'_> {
    /// Measures `child` and returns its size with margins added, or `None` when
    /// the provider cannot answer for it yet.
    fn measure_outer(&self, index: usize, child: &ChildBox, used_height: f32) -> Option<Size> {
        let margins = child.margins;
        let width = self.width.for_child(self.padding.horizontal() + margins.horizontal());
        let height = self
            .height
            .for_child(self.padding.vertical() + used_height + margins.vertical());

        match self.provider.measure_box(child, width, height) {
            Ok(size) => Some(Size::new(
                size.width.max(0.0) + margins.horizontal(),
                size.height.max(0.0) + margins.vertical(),
            )),
            Err(err) => {
                log::debug!(
                    "{} could not measure box {}: {}; skipping it this pass",
                    self.provider.name(),
                    index,
                    err
                );
                None
            }
        }
    }

    fn resolve_spacing(&self, policy: SpacingPolicy, row: &RowBuilder) -> f32 {
        policy.resolve(self.row_size, row.boxes_width, row.children.len())
    }
}

/// The toggle box the pass may substitute, measured lazily.
struct Toggle<'a> {
    index: usize,
    child: &'a ChildBox,
    outer: Option<Size>,
}

impl Toggle<'_> {
    fn outer_size(&mut self, pass: &Pass, used_height: f32) -> Option<Size> {
        if self.outer.is_none() {
            self.outer = pass.measure_outer(self.index, self.child, used_height);
        }
        self.outer
    }
}

fn content_size(outer: Size, margins: Edges) -> Size {
    Size::new(
        (outer.width - margins.horizontal()).max(0.0),
        (outer.height - margins.vertical()).max(0.0),
    )
}

fn find_toggle(children: &[ChildBox]) -> Option<usize> {
    let mut toggles = children
        .iter()
        .enumerate()
        .filter(|(_, child)| child.is_toggle && !child.is_collapsed())
        .map(|(index, _)| index);
    let first = toggles.next();
    if toggles.next().is_some() {
        log::warn!("More than one toggle box in flow container; only the first is used as toggle");
    }
    first
}

/// Runs the measurement pass.
///
/// `config` is used as given; callers that accept host input should pass
/// [`FlowConfig::sanitized`].
pub fn measure(
    children: &[ChildBox],
    provider: &dyn MeasuredSizeProvider,
    width: SizeConstraint,
    height: SizeConstraint,
    config: &FlowConfig,
) -> FlowMeasurement {
    let child_spacing = if width.is_bounded() {
        config.child_spacing
    } else {
        config.child_spacing.for_unconstrained_axis()
    };
    let pass = Pass {
        provider,
        width,
        height,
        padding: config.padding,
        row_size: (width.size - config.padding.horizontal()).max(0.0),
        allow_flow: config.flow_enabled && width.is_bounded(),
        child_spacing,
        gap: child_spacing.packing_gap(config.min_child_spacing),
        limit: config.active_row_limit(),
    };

    let toggle_index = find_toggle(children);
    let mut toggle = toggle_index
        .filter(|_| config.toggle_enabled())
        .map(|index| Toggle {
            index,
            child: &children[index],
            outer: None,
        });
    let mut truncation = toggle.is_some() && pass.limit.is_bounded();
    let last_content = children
        .iter()
        .enumerate()
        .rev()
        .find(|(index, child)| Some(*index) != toggle_index && !child.is_collapsed())
        .map(|(index, _)| index);

    let mut rows: Vec<Row> = Vec::new();
    let mut current = RowBuilder::default();
    let mut child_sizes: Vec<Option<Size>> = vec![None; children.len()];
    let mut used_height = 0.0f32;
    let mut toggle_placed = false;
    let mut substituted = false;
    let mut finished_early = false;

    for (index, child) in children.iter().enumerate() {
        if Some(index) == toggle_index || child.is_collapsed() {
            continue;
        }
        let Some(mut outer) = pass.measure_outer(index, child, used_height) else {
            continue;
        };
        let mut margins = child.margins;
        let mut slot = index;
        let mut next_row = false;

        if pass.allow_flow {
            // One-based number of the row this box lands on.
            let mut row_number = rows.len() + 1;
            if let Some(max_rows) = pass.limit.rows() {
                if !current.is_empty()
                    && row_number + 1 == max_rows
                    && current.width + outer.width >= pass.row_size
                {
                    row_number += 1;
                    next_row = true;
                }
            }

            let on_last_row = pass.limit.rows() == Some(row_number);
            let toggle_outer = match toggle.as_mut() {
                Some(t) if truncation && on_last_row => {
                    let size = t.outer_size(&pass, used_height);
                    if size.is_none() {
                        truncation = false;
                    }
                    size
                }
                _ => None,
            };

            if let Some(toggle_outer) = toggle_outer {
                let row_width = if next_row { 0.0 } else { current.width };
                if row_width + outer.width + pass.gap > pass.row_size - toggle_outer.width {
                    if Some(index) == last_content && row_width + outer.width <= pass.row_size {
                        log::debug!("Last box {} fills the final row; toggle not needed", index);
                        finished_early = true;
                    } else if next_row {
                        outer.width = (outer.width - toggle_outer.width - pass.gap).max(0.0);
                    } else if let Some(t) = toggle.as_ref() {
                        log::debug!("Toggle box {} replaces box {} on row {}", t.index, index, rows.len());
                        slot = t.index;
                        outer = toggle_outer;
                        margins = t.child.margins;
                        toggle_placed = true;
                        substituted = true;
                    }
                }
            } else if !current.is_empty() {
                next_row = current.width + outer.width >= pass.row_size;
            }
        }

        if next_row {
            let spacing = pass.resolve_spacing(pass.child_spacing, &current);
            let closed = std::mem::take(&mut current).finish(spacing, pass.gap);
            if pass.limit.admits(rows.len()) {
                used_height += closed.height;
            }
            log::trace!(
                "Row {} closed: {} boxes, width {:.1}, height {:.1}, spacing {:.1}",
                rows.len(),
                closed.len(),
                closed.width,
                closed.height,
                closed.spacing
            );
            rows.push(closed);
        }

        current.push(slot, outer, pass.gap);
        child_sizes[slot] = Some(content_size(outer, margins));

        if toggle_placed || finished_early {
            break;
        }
    }

    if config.is_expanded && !toggle_placed && !finished_early {
        if let Some(t) = toggle.as_mut() {
            if let Some(outer) = t.outer_size(&pass, used_height) {
                let pinned_to_last_row = truncation && pass.limit.rows() == Some(rows.len() + 1);
                if pass.allow_flow
                    && !pinned_to_last_row
                    && !current.is_empty()
                    && current.width + outer.width >= pass.row_size
                {
                    let spacing = pass.resolve_spacing(pass.child_spacing, &current);
                    let closed = std::mem::take(&mut current).finish(spacing, pass.gap);
                    if pass.limit.admits(rows.len()) {
                        used_height += closed.height;
                    }
                    rows.push(closed);
                }
                current.push(t.index, outer, pass.gap);
                child_sizes[t.index] = Some(content_size(outer, t.child.margins));
                toggle_placed = true;
            }
        }
    }

    if !current.is_empty() {
        let spacing = match config.last_row_spacing {
            LastRowSpacing::Align => match rows.last() {
                Some(previous) => previous.spacing,
                None => pass.resolve_spacing(pass.child_spacing, &current),
            },
            LastRowSpacing::Undefined => pass.resolve_spacing(pass.child_spacing, &current),
            LastRowSpacing::Policy(policy) => {
                let policy = if width.is_bounded() {
                    policy
                } else {
                    policy.for_unconstrained_axis()
                };
                pass.resolve_spacing(policy, &current)
            }
        };
        rows.push(current.finish(spacing, pass.gap));
    }

    let toggle_laid_out = toggle.filter(|_| toggle_placed).map(|t| t.index);

    let admitted = pass.limit.clamp(rows.len());
    let rows_height: f32 = rows.iter().take(admitted).map(|row| row.height).sum();
    let (row_spacing, measured_height) = resolve_height(&pass, config, rows_height, admitted);
    let container_width = resolve_width(&pass, &rows);
    let container_height = match height.mode {
        MeasureMode::Exact => height.size,
        _ => measured_height,
    };

    let measurement = FlowMeasurement {
        child_sizes,
        size: Size::new(container_width, container_height),
        content_height: (measured_height - pass.padding.vertical()).max(0.0),
        row_spacing,
        row_limit: pass.limit,
        toggle: toggle_laid_out,
        truncated: substituted,
        rows,
    };
    log::debug!(
        "Measured flow: {} rows ({} admitted), size {:.1}x{:.1}",
        measurement.rows.len(),
        admitted,
        measurement.size.width,
        measurement.size.height
    );
    measurement
}

fn resolve_width(pass: &Pass, rows: &[Row]) -> f32 {
    let widest = rows.iter().map(|row| row.width).fold(0.0f32, f32::max);
    let resolved = if pass.child_spacing.is_auto() {
        pass.width.size
    } else if pass.width.is_bounded() {
        (widest + pass.padding.horizontal()).min(pass.width.size)
    } else {
        widest + pass.padding.horizontal()
    };
    pass.width.constrain(resolved)
}

/// Returns the resolved row gap and the container height before an exact
/// height constraint is applied on top.
fn resolve_height(pass: &Pass, config: &FlowConfig, rows_height: f32, admitted: usize) -> (f32, f32) {
    let policy = if pass.height.is_bounded() {
        config.row_spacing
    } else {
        config.row_spacing.for_unconstrained_axis()
    };
    let padding = pass.padding.vertical();

    if policy.is_auto() {
        let available = (pass.height.size - padding).max(0.0);
        let spacing = policy.resolve(available, rows_height, admitted);
        return (spacing, pass.height.size);
    }

    let spacing = policy.resolve(0.0, 0.0, 0);
    let gaps = admitted.saturating_sub(1) as f32;
    let total = rows_height + spacing * gaps + padding;
    let height = if pass.height.is_bounded() {
        total.min(pass.height.size)
    } else {
        total
    };
    (spacing, height)
}
