//! Small state machines the host drives between layout passes.

/// Expand/collapse state of a row-limited container.
///
/// Each state selects its own row limit; a transition discards all geometry and
/// the next pass lays out against the other limit. No intermediate state exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExpandState {
    #[default]
    Shrunk,
    Expanded,
}

impl ExpandState {
    pub fn from_expanded(expanded: bool) -> Self {
        if expanded {
            ExpandState::Expanded
        } else {
            ExpandState::Shrunk
        }
    }

    pub fn is_expanded(self) -> bool {
        self == ExpandState::Expanded
    }

    pub fn flipped(self) -> Self {
        match self {
            ExpandState::Shrunk => ExpandState::Expanded,
            ExpandState::Expanded => ExpandState::Shrunk,
        }
    }
}

/// Whether the child list is consistent enough to lay out.
///
/// Any structural mutation of the child list moves the container to `Stale`;
/// only an explicit refresh after population moves it back to `Fresh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefreshState {
    #[default]
    Stale,
    Fresh,
}

impl RefreshState {
    pub fn is_fresh(self) -> bool {
        self == RefreshState::Fresh
    }
}
