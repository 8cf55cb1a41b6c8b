//! Populates a [`FlowContainer`] from a data list.

use crate::container::FlowContainer;
use std::fmt;
use wrapflow_layout::ExpandState;
use wrapflow_types::ChildBox;

type BoxFactory<T> = Box<dyn Fn(&T, usize) -> ChildBox>;
type ToggleFactory = Box<dyn Fn() -> ChildBox>;
type ExpandHook = Box<dyn FnMut(bool) -> bool>;

/// Turns items into child boxes and injects the expand/collapse toggle.
///
/// The box factory receives each item with its position. The optional expand
/// hook is called with the state the container is about to enter; returning
/// `true` means the host handled the flip itself and the container is left
/// untouched.
pub struct FlowAdapter<T> {
    items: Vec<T>,
    box_factory: BoxFactory<T>,
    toggle_factory: Option<ToggleFactory>,
    expand_hook: Option<ExpandHook>,
}

impl<T> FlowAdapter<T> {
    pub fn new(items: Vec<T>, box_factory: impl Fn(&T, usize) -> ChildBox + 'static) -> Self {
        Self {
            items,
            box_factory: Box::new(box_factory),
            toggle_factory: None,
            expand_hook: None,
        }
    }

    pub fn with_toggle(mut self, toggle_factory: impl Fn() -> ChildBox + 'static) -> Self {
        self.toggle_factory = Some(Box::new(toggle_factory));
        self
    }

    pub fn with_expand_hook(mut self, hook: impl FnMut(bool) -> bool + 'static) -> Self {
        self.expand_hook = Some(Box::new(hook));
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rebuilds the container's children from the current items.
    ///
    /// The toggle is appended last, and only when the container's row limits
    /// leave room for one.
    pub fn notify_data_set_changed(&mut self, container: &mut FlowContainer) {
        container.clear_children();
        for (position, item) in self.items.iter().enumerate() {
            container.push_pending_child((self.box_factory)(item, position));
        }

        if let Some(factory) = &self.toggle_factory {
            if container.config().limits_allow_toggle() {
                let mut toggle = factory();
                toggle.is_toggle = true;
                container.push_pending_child(toggle);
                if let Some(hook) = self.expand_hook.as_mut() {
                    hook(container.is_expanded());
                }
            } else {
                log::debug!("Row limits leave no room for a toggle; not injecting it");
            }
        }

        log::debug!(
            "Populated flow container with {} boxes from {} items",
            container.children().len(),
            self.items.len()
        );
        container.mark_refreshed();
    }

    /// Handles activation of the toggle box and returns the resulting state.
    pub fn activate_toggle(&mut self, container: &mut FlowContainer) -> ExpandState {
        let target = container.expand_state().flipped();
        let handled = self
            .expand_hook
            .as_mut()
            .is_some_and(|hook| hook(target.is_expanded()));
        if handled {
            log::debug!("Expand hook handled the flip to {:?}", target);
        } else {
            container.set_expanded(target.is_expanded());
        }
        container.expand_state()
    }

    /// Replaces the items and re-populates the container.
    pub fn set_data(&mut self, items: Vec<T>, container: &mut FlowContainer) {
        self.items = items;
        self.notify_data_set_changed(container);
    }
}

impl<T: fmt::Debug> fmt::Debug for FlowAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowAdapter")
            .field("items", &self.items)
            .field("has_toggle", &self.toggle_factory.is_some())
            .field("has_expand_hook", &self.expand_hook.is_some())
            .finish()
    }
}
