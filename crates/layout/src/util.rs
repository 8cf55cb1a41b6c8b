use wrapflow_types::Rect;

/// Robust floating point comparison for layout calculations.
/// Handles `Option<f32>` to support `None` representing an absent value.
pub fn floats_fuzzy_eq(a: Option<f32>, b: Option<f32>) -> bool {
    const EPSILON: f32 = 0.01;
    match (a, b) {
        (Some(va), Some(vb)) => (va - vb).abs() < EPSILON,
        (None, None) => true,
        _ => false,
    }
}

/// Helper for comparing slices of floats (e.g., row widths).
pub fn float_slices_fuzzy_eq(a: &[f32], b: &[f32]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    const EPSILON: f32 = 0.01;
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < EPSILON)
}

pub fn rects_fuzzy_eq(a: &Rect, b: &Rect) -> bool {
    float_slices_fuzzy_eq(&[a.x, a.y, a.width, a.height], &[b.x, b.y, b.width, b.height])
}

/// Horizontal center of `rect` mirrored about the vertical midline of `container`.
pub fn mirrored_center_x(rect: &Rect, container: &Rect) -> f32 {
    2.0 * container.center_x() - rect.center_x()
}
