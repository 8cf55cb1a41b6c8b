//! Host-facing flow container: child list, configuration and layout state.

use wrapflow_layout::{ExpandState, FlowLayout, FlowMeasurement, RefreshState};
use wrapflow_style::FlowConfig;
use wrapflow_traits::MeasuredSizeProvider;
use wrapflow_types::{ChildBox, Rect, Size, SizeConstraint};

/// A flow container as a host framework sees it.
///
/// The container starts `Stale`: no pass runs until the host (or a
/// [`FlowAdapter`](crate::FlowAdapter)) has populated the children and called
/// [`mark_refreshed`](Self::mark_refreshed). Any structural change to the
/// child list moves it back to `Stale`. Configuration changes and expand flips
/// keep the child list but discard all cached geometry.
#[derive(Debug, Clone, Default)]
pub struct FlowContainer {
    config: FlowConfig,
    children: Vec<ChildBox>,
    expand: ExpandState,
    refresh: RefreshState,
    layout: FlowLayout,
    needs_layout: bool,
}

impl FlowContainer {
    pub fn new(config: FlowConfig) -> Self {
        Self {
            expand: ExpandState::from_expanded(config.is_expanded),
            config,
            needs_layout: true,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Applies `update` to the configuration and schedules a new pass.
    ///
    /// Setting `is_expanded` through here is equivalent to
    /// [`set_expanded`](Self::set_expanded).
    pub fn update_config(&mut self, update: impl FnOnce(&mut FlowConfig)) {
        update(&mut self.config);
        self.expand = ExpandState::from_expanded(self.config.is_expanded);
        self.invalidate();
    }

    pub fn children(&self) -> &[ChildBox] {
        &self.children
    }

    /// Replaces the child list. The container stays `Stale` until refreshed.
    pub fn set_children(&mut self, children: Vec<ChildBox>) {
        self.refresh = RefreshState::Stale;
        self.children = children;
        self.invalidate();
    }

    /// Appends a child during population, re-indexing it to its position.
    pub fn push_pending_child(&mut self, mut child: ChildBox) {
        self.refresh = RefreshState::Stale;
        child.index = self.children.len();
        self.children.push(child);
        self.invalidate();
    }

    pub fn clear_children(&mut self) {
        self.refresh = RefreshState::Stale;
        self.children.clear();
        self.invalidate();
    }

    /// Declares the child list complete and consistent.
    pub fn mark_refreshed(&mut self) {
        self.refresh = RefreshState::Fresh;
        self.needs_layout = true;
    }

    pub fn refresh_state(&self) -> RefreshState {
        self.refresh
    }

    /// Runs the measurement pass.
    ///
    /// Returns a zero size and leaves the cached geometry untouched while the
    /// child list is stale.
    pub fn measure(
        &mut self,
        provider: &dyn MeasuredSizeProvider,
        width: SizeConstraint,
        height: SizeConstraint,
    ) -> Size {
        if !self.refresh.is_fresh() {
            log::debug!("Skipping measurement: child list not refreshed");
            return Size::zero();
        }
        self.layout
            .measure(&self.children, provider, width, height, &self.config)
    }

    /// Places every child inside a container rect at the origin with the
    /// measured size. `None` while stale or before any measurement.
    pub fn place(&mut self) -> Option<&[Rect]> {
        let size = self.layout.measurement()?.size;
        self.place_in(Rect::new(0.0, 0.0, size.width, size.height))
    }

    /// Places every child inside `container`.
    pub fn place_in(&mut self, container: Rect) -> Option<&[Rect]> {
        if !self.refresh.is_fresh() {
            log::debug!("Skipping placement: child list not refreshed");
            return None;
        }
        match self.layout.place(&self.children, container) {
            Ok(placements) => {
                self.needs_layout = false;
                Some(placements)
            }
            Err(err) => {
                log::debug!("Skipping placement: {}", err);
                None
            }
        }
    }

    pub fn measurement(&self) -> Option<&FlowMeasurement> {
        self.layout.measurement()
    }

    /// Placements of the last completed pass.
    pub fn placements(&self) -> &[Rect] {
        self.layout.placements()
    }

    pub fn row_of(&self, index: usize) -> Option<usize> {
        self.layout.row_of(index)
    }

    pub fn row_count(&self) -> usize {
        self.layout.row_count()
    }

    pub fn expand_state(&self) -> ExpandState {
        self.expand
    }

    pub fn is_expanded(&self) -> bool {
        self.expand.is_expanded()
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        let state = ExpandState::from_expanded(expanded);
        if state == self.expand {
            return;
        }
        log::debug!("Flow container {:?} -> {:?}", self.expand, state);
        self.expand = state;
        self.config.is_expanded = expanded;
        self.invalidate();
    }

    /// Flips the expand state and returns the new one.
    pub fn toggle_expanded(&mut self) -> ExpandState {
        self.set_expanded(!self.is_expanded());
        self.expand
    }

    /// True when geometry was discarded since the last successful placement.
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    fn invalidate(&mut self) {
        self.layout.invalidate();
        self.needs_layout = true;
    }
}
