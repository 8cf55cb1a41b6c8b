//! MeasuredSizeProvider trait for abstracting box measurement.
//!
//! The flow engine never measures content itself. Whatever hosts the boxes
//! (a widget toolkit, a text shaper, a test table) answers "how big is this
//! box under these constraints" through this trait.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;
use wrapflow_types::{ChildBox, Size, SizeConstraint};

/// Error type for measurement requests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    #[error("Box {0} is not ready to be measured")]
    NotReady(usize),

    #[error("Box {0} is unknown to the size provider")]
    Unknown(usize),

    #[error("Size provider state lock poisoned")]
    LockPoisoned,
}

/// A trait for measuring boxes under width/height constraints.
///
/// Returned sizes exclude the box's margins; the layout engine adds them.
///
/// # Implementations
///
/// - `IntrinsicSizeProvider`: answers with each box's intrinsic size, clamped to the constraints
/// - `InMemorySizeProvider`: answers from a pre-populated table keyed by child index
///
/// # Example
///
/// ```ignore
/// let provider = InMemorySizeProvider::new();
/// provider.insert(0, Size::new(80.0, 24.0))?;
/// let size = provider.measure_box(&child, width, height)?;
/// ```
pub trait MeasuredSizeProvider: Send + Sync + Debug {
    /// Measure `child` under the given constraints.
    ///
    /// # Errors
    ///
    /// Any error makes the layout engine skip the box for the current pass.
    fn measure_box(
        &self,
        child: &ChildBox,
        width: SizeConstraint,
        height: SizeConstraint,
    ) -> Result<Size, MeasureError>;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Measures boxes by their intrinsic size, the way a wrap-content box behaves.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntrinsicSizeProvider;

impl MeasuredSizeProvider for IntrinsicSizeProvider {
    fn measure_box(
        &self,
        child: &ChildBox,
        width: SizeConstraint,
        height: SizeConstraint,
    ) -> Result<Size, MeasureError> {
        Ok(Size::new(
            width.constrain(child.intrinsic.width),
            height.constrain(child.intrinsic.height),
        ))
    }

    fn name(&self) -> &'static str {
        "IntrinsicSizeProvider"
    }
}

/// A size provider backed by a table of pre-measured sizes.
///
/// Boxes without an entry report [`MeasureError::NotReady`], which lets tests and
/// hosts model content that has not finished loading.
#[derive(Debug, Default)]
pub struct InMemorySizeProvider {
    sizes: RwLock<HashMap<usize, Size>>,
    clamp_to_constraints: bool,
}

impl InMemorySizeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the provider clamp stored sizes to `AtMost`/`Exact` constraints.
    pub fn clamped(mut self) -> Self {
        self.clamp_to_constraints = true;
        self
    }

    /// Record the measured size of the box at `index`.
    ///
    /// # Errors
    ///
    /// Returns `MeasureError::LockPoisoned` if the internal lock is poisoned.
    pub fn insert(&self, index: usize, size: Size) -> Result<(), MeasureError> {
        let mut sizes = self.sizes.write().map_err(|_| MeasureError::LockPoisoned)?;
        sizes.insert(index, size);
        Ok(())
    }

    /// Forget the size of the box at `index`.
    ///
    /// Returns `None` if the lock is poisoned or no size was recorded.
    pub fn remove(&self, index: usize) -> Option<Size> {
        self.sizes.write().ok()?.remove(&index)
    }

    /// Clear every recorded size.
    ///
    /// Does nothing if the lock is poisoned.
    pub fn clear(&self) {
        if let Ok(mut sizes) = self.sizes.write() {
            sizes.clear();
        }
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.sizes.read().map(|s| s.len()).unwrap_or(0)
    }

    /// Returns `true` if the lock is poisoned (safe default).
    pub fn is_empty(&self) -> bool {
        self.sizes.read().map(|s| s.is_empty()).unwrap_or(true)
    }
}

impl MeasuredSizeProvider for InMemorySizeProvider {
    fn measure_box(
        &self,
        child: &ChildBox,
        width: SizeConstraint,
        height: SizeConstraint,
    ) -> Result<Size, MeasureError> {
        let sizes = self.sizes.read().map_err(|_| MeasureError::LockPoisoned)?;
        let size = sizes
            .get(&child.index)
            .copied()
            .ok_or(MeasureError::NotReady(child.index))?;
        if self.clamp_to_constraints {
            Ok(Size::new(width.constrain(size.width), height.constrain(size.height)))
        } else {
            Ok(size)
        }
    }

    fn name(&self) -> &'static str {
        "InMemorySizeProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intrinsic_provider_respects_upper_bound() {
        let child = ChildBox::new(0, 120.0, 30.0);
        let size = IntrinsicSizeProvider
            .measure_box(&child, SizeConstraint::at_most(100.0), SizeConstraint::unspecified())
            .unwrap();
        assert_eq!(size, Size::new(100.0, 30.0));
    }

    #[test]
    fn intrinsic_provider_unconstrained_returns_intrinsic() {
        let child = ChildBox::new(3, 42.0, 7.0);
        let size = IntrinsicSizeProvider
            .measure_box(&child, SizeConstraint::unspecified(), SizeConstraint::unspecified())
            .unwrap();
        assert_eq!(size, child.intrinsic);
    }

    #[test]
    fn in_memory_provider_reports_missing_boxes() {
        let provider = InMemorySizeProvider::new();
        provider.insert(0, Size::new(10.0, 10.0)).unwrap();

        let missing = ChildBox::new(1, 0.0, 0.0);
        let result = provider.measure_box(
            &missing,
            SizeConstraint::unspecified(),
            SizeConstraint::unspecified(),
        );
        assert_eq!(result, Err(MeasureError::NotReady(1)));
    }

    #[test]
    fn in_memory_provider_ignores_intrinsic_size() {
        let provider = InMemorySizeProvider::new();
        provider.insert(2, Size::new(55.0, 12.0)).unwrap();

        let child = ChildBox::new(2, 999.0, 999.0);
        let size = provider
            .measure_box(&child, SizeConstraint::at_most(10.0), SizeConstraint::unspecified())
            .unwrap();
        assert_eq!(size, Size::new(55.0, 12.0));
    }

    #[test]
    fn in_memory_provider_clamped_mode() {
        let provider = InMemorySizeProvider::new().clamped();
        provider.insert(0, Size::new(55.0, 12.0)).unwrap();
        let size = provider
            .measure_box(
                &ChildBox::new(0, 0.0, 0.0),
                SizeConstraint::at_most(40.0),
                SizeConstraint::unspecified(),
            )
            .unwrap();
        assert_eq!(size.width, 40.0);
    }

    #[test]
    fn in_memory_provider_remove_and_clear() {
        let provider = InMemorySizeProvider::new();
        provider.insert(0, Size::zero()).unwrap();
        provider.insert(1, Size::zero()).unwrap();
        assert_eq!(provider.len(), 2);

        assert!(provider.remove(0).is_some());
        provider.clear();
        assert!(provider.is_empty());
    }
}
