//! The placement pass: turns a measurement into one rectangle per child.

use crate::LayoutError;
use crate::row::FlowMeasurement;
use wrapflow_style::{FlowConfig, VerticalGravity};
use wrapflow_types::{ChildBox, Rect};

/// Positions every child inside `container`.
///
/// The result holds exactly one rect per child. Boxes outside the admitted
/// rows, boxes dropped by toggle truncation and collapsed boxes all receive
/// [`Rect::ZERO`].
///
/// # Errors
///
/// Returns [`LayoutError::ChildCountMismatch`] when `measurement` was produced
/// for a different child list.
pub fn place(
    measurement: &FlowMeasurement,
    children: &[ChildBox],
    container: Rect,
    config: &FlowConfig,
) -> Result<Vec<Rect>, LayoutError> {
    if measurement.child_sizes.len() != children.len() {
        return Err(LayoutError::ChildCountMismatch {
            measured: measurement.child_sizes.len(),
            current: children.len(),
        });
    }

    let mut placements = vec![Rect::ZERO; children.len()];
    let padding = config.padding;
    let available_width = container.width - padding.horizontal();
    let available_height = container.height - padding.vertical();
    let leading_edge = if config.rtl {
        container.right() - padding.right
    } else {
        container.x + padding.left
    };
    // Auto spacing rows already span the full width.
    let suppress_gravity = config.child_spacing.is_auto();

    let mut y = container.y
        + padding.top
        + config
            .vertical_gravity
            .offset(available_height, measurement.content_height)
            .max(0.0);

    for (row_index, row) in measurement.visible_rows().iter().enumerate() {
        let offset = if suppress_gravity || row.is_empty() {
            0.0
        } else {
            config.horizontal_gravity.offset(available_width, row.width)
        };
        let mut x = if config.rtl {
            leading_edge - offset
        } else {
            leading_edge + offset
        };

        for &index in &row.children {
            let (Some(child), Some(Some(size))) =
                (children.get(index), measurement.child_sizes.get(index))
            else {
                continue;
            };
            if child.is_collapsed() {
                continue;
            }
            let margins = child.margins;
            let top = match config.row_vertical_gravity {
                VerticalGravity::Top => y + margins.top,
                VerticalGravity::Center => {
                    y + margins.top + (row.height - margins.vertical() - size.height) / 2.0
                }
                VerticalGravity::Bottom => y + row.height - margins.bottom - size.height,
            };

            let advance = size.width + row.spacing + margins.horizontal();
            placements[index] = if config.rtl {
                let rect = Rect::new(x - margins.right - size.width, top, size.width, size.height);
                x -= advance;
                rect
            } else {
                let rect = Rect::new(x + margins.left, top, size.width, size.height);
                x += advance;
                rect
            };
        }

        log::trace!("Placed row {} at y {:.1}", row_index, y);
        y += row.height + measurement.row_spacing;
    }

    Ok(placements)
}
