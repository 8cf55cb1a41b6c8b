//! Drives measurement and placement passes and keeps their results.

use crate::LayoutError;
use crate::measurer;
use crate::placer;
use crate::row::FlowMeasurement;
use wrapflow_style::FlowConfig;
use wrapflow_traits::MeasuredSizeProvider;
use wrapflow_types::{ChildBox, Rect, Size, SizeConstraint};

/// Results of the most recent measurement, with the configuration it ran under.
#[derive(Debug, Clone)]
struct MeasuredPass {
    config: FlowConfig,
    measurement: FlowMeasurement,
}

/// Owns the per-pass row and geometry buffers of one flow container.
///
/// Buffers are overwritten, never merged: each `measure` replaces the previous
/// measurement and discards the previous placements.
#[derive(Debug, Default, Clone)]
pub struct FlowLayout {
    pass: Option<MeasuredPass>,
    placements: Vec<Rect>,
}

impl FlowLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a measurement pass and returns the resolved container size.
    pub fn measure(
        &mut self,
        children: &[ChildBox],
        provider: &dyn MeasuredSizeProvider,
        width: SizeConstraint,
        height: SizeConstraint,
        config: &FlowConfig,
    ) -> Size {
        let config = config.sanitized();
        let measurement = measurer::measure(children, provider, width, height, &config);
        let size = measurement.size;
        self.placements.clear();
        self.pass = Some(MeasuredPass {
            config,
            measurement,
        });
        size
    }

    /// Runs a placement pass over the last measurement.
    ///
    /// # Errors
    ///
    /// `LayoutError::NotMeasured` when no measurement exists, or
    /// `LayoutError::ChildCountMismatch` when `children` changed since it ran.
    pub fn place(&mut self, children: &[ChildBox], container: Rect) -> Result<&[Rect], LayoutError> {
        let pass = self.pass.as_ref().ok_or(LayoutError::NotMeasured)?;
        self.placements = placer::place(&pass.measurement, children, container, &pass.config)?;
        Ok(&self.placements)
    }

    /// Places into a container rect at the origin with the measured size.
    pub fn place_at_origin(&mut self, children: &[ChildBox]) -> Result<&[Rect], LayoutError> {
        let size = self
            .measurement()
            .map(|m| m.size)
            .ok_or(LayoutError::NotMeasured)?;
        self.place(children, Rect::new(0.0, 0.0, size.width, size.height))
    }

    pub fn measurement(&self) -> Option<&FlowMeasurement> {
        self.pass.as_ref().map(|pass| &pass.measurement)
    }

    /// Placements of the last placement pass; empty until one has run.
    pub fn placements(&self) -> &[Rect] {
        &self.placements
    }

    pub fn row_of(&self, index: usize) -> Option<usize> {
        self.measurement()?.row_of(index)
    }

    pub fn row_count(&self) -> usize {
        self.measurement().map_or(0, FlowMeasurement::row_count)
    }

    /// Drops all cached geometry.
    pub fn invalidate(&mut self) {
        self.pass = None;
        self.placements.clear();
    }
}
