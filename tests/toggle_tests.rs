mod common;

use common::fixtures::*;
use common::{init_logger, lay_out, TestResult};
use std::cell::RefCell;
use std::rc::Rc;
use wrapflow::{ChildBox, ExpandState, FlowAdapter, FlowConfig, FlowContainer, Rect, RowLimit};

fn box_adapter(count: usize) -> FlowAdapter<usize> {
    FlowAdapter::new((0..count).collect(), |_, position| {
        ChildBox::new(position, 80.0, 20.0)
    })
    .with_toggle(|| ChildBox::new(0, 50.0, 20.0))
}

#[test]
fn test_toggle_truncates_shrunk_container() -> TestResult {
    init_logger();
    let mut adapter = box_adapter(6);
    let mut container = FlowContainer::new(collapsible(1));
    adapter.notify_data_set_changed(&mut container);

    assert_eq!(container.children().len(), 7);
    assert!(container.children()[6].is_toggle);
    assert_eq!(container.children()[6].index, 6);

    let laid_out = lay_out(&mut container, 300.0).ok_or("no layout")?;
    assert_eq!(laid_out.rows, vec![vec![0, 1, 2, 6]]);
    assert_eq!(laid_out.placements[6], Rect::new(240.0, 0.0, 50.0, 20.0));
    for hidden in 3..6 {
        assert_eq!(laid_out.placements[hidden], Rect::ZERO);
    }
    assert!(container.measurement().ok_or("no measurement")?.truncated);
    Ok(())
}

#[test]
fn test_activating_toggle_expands_and_collapses() -> TestResult {
    let mut adapter = box_adapter(6);
    let mut container = FlowContainer::new(collapsible(1));
    adapter.notify_data_set_changed(&mut container);
    let shrunk = lay_out(&mut container, 300.0).ok_or("no layout")?;

    assert_eq!(adapter.activate_toggle(&mut container), ExpandState::Expanded);
    assert!(container.needs_layout());
    let expanded = lay_out(&mut container, 300.0).ok_or("no layout")?;
    assert_eq!(expanded.rows, vec![vec![0, 1, 2], vec![3, 4, 5, 6]]);
    assert_eq!(expanded.height, 40.0);
    assert_eq!(expanded.placements[6], Rect::new(240.0, 20.0, 50.0, 20.0));

    assert_eq!(adapter.activate_toggle(&mut container), ExpandState::Shrunk);
    let shrunk_again = lay_out(&mut container, 300.0).ok_or("no layout")?;
    assert_eq!(shrunk, shrunk_again);
    Ok(())
}

#[test]
fn test_expand_hook_can_veto_the_flip() -> TestResult {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let recorded = Rc::clone(&calls);
    let mut adapter = box_adapter(6).with_expand_hook(move |expanding| {
        recorded.borrow_mut().push(expanding);
        expanding
    });
    let mut container = FlowContainer::new(collapsible(1));
    adapter.notify_data_set_changed(&mut container);
    lay_out(&mut container, 300.0).ok_or("no layout")?;

    assert_eq!(adapter.activate_toggle(&mut container), ExpandState::Shrunk);
    assert!(!container.needs_layout());
    assert_eq!(*calls.borrow(), vec![false, true]);
    Ok(())
}

#[test]
fn test_toggle_hidden_when_expanded_without_shrink_toggle() -> TestResult {
    let mut adapter = box_adapter(6);
    let mut container = FlowContainer::new(FlowConfig {
        enable_shrink_toggle_when_expanded: false,
        ..collapsible(1)
    });
    adapter.notify_data_set_changed(&mut container);
    adapter.activate_toggle(&mut container);

    let laid_out = lay_out(&mut container, 300.0).ok_or("no layout")?;
    assert_eq!(laid_out.rows, vec![vec![0, 1, 2], vec![3, 4, 5]]);
    assert_eq!(laid_out.placements[6], Rect::ZERO);
    Ok(())
}

#[test]
fn test_toggle_not_injected_without_room_between_limits() {
    let mut adapter = box_adapter(6);

    let mut unbounded = FlowContainer::new(FlowConfig::default());
    adapter.notify_data_set_changed(&mut unbounded);
    assert_eq!(unbounded.children().len(), 6);

    let mut equal = FlowContainer::new(FlowConfig {
        shrink_row_limit: RowLimit::Limited(2),
        expand_row_limit: RowLimit::Limited(2),
        ..Default::default()
    });
    adapter.notify_data_set_changed(&mut equal);
    assert!(equal.children().iter().all(|child| !child.is_toggle));
}

#[test]
fn test_content_that_fits_needs_no_toggle() -> TestResult {
    let mut adapter = box_adapter(3);
    let mut container = FlowContainer::new(collapsible(1));
    adapter.notify_data_set_changed(&mut container);

    let laid_out = lay_out(&mut container, 300.0).ok_or("no layout")?;
    assert_eq!(laid_out.rows, vec![vec![0, 1, 2]]);
    assert_eq!(laid_out.placements[3], Rect::ZERO);
    Ok(())
}

#[test]
fn test_set_data_repopulates_container() -> TestResult {
    let mut adapter = box_adapter(6);
    let mut container = FlowContainer::new(collapsible(1));
    adapter.notify_data_set_changed(&mut container);
    lay_out(&mut container, 300.0).ok_or("no layout")?;

    adapter.set_data(vec![10, 11], &mut container);
    assert_eq!(adapter.len(), 2);
    assert_eq!(container.children().len(), 3);
    let laid_out = lay_out(&mut container, 300.0).ok_or("no layout")?;
    assert_eq!(laid_out.rows, vec![vec![0, 1]]);
    Ok(())
}
