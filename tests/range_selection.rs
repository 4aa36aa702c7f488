use balance_chart_wasm::domain::balance::{DataPoint, PeriodDataset};
use balance_chart_wasm::domain::chart::{
    AxisDomain, RangeSelectionEngine, ReleaseOutcome, SelectionState, XBound, YBound, ZoomWindow,
};
use quickcheck_macros::quickcheck;

fn three_points() -> PeriodDataset {
    let mut dataset = PeriodDataset::new();
    dataset
        .load(vec![
            DataPoint::new(100, 1.0, 9000.0),
            DataPoint::new(200, 1.1, 9500.0),
            DataPoint::new(300, 0.9, 8800.0),
        ])
        .unwrap();
    dataset
}

#[test]
fn drag_across_the_period_commits_zoom() {
    let dataset = three_points();
    let mut engine = RangeSelectionEngine::new();

    engine.press(100);
    assert_eq!(engine.state(), SelectionState::Selecting);
    engine.move_to(Some(300));
    let outcome = engine.release(&dataset);

    assert_eq!(engine.state(), SelectionState::Zoomed);
    let window = *engine.zoom_window();
    assert_eq!(outcome, ReleaseOutcome::Committed(window));
    assert_eq!(window.x_left, XBound::Time(100));
    assert_eq!(window.x_right, XBound::Time(300));
    assert_eq!(window.y_bottom_a, YBound::Value(8800.0));
    assert_eq!(window.y_top_a, YBound::Value(9500.0));
    assert_eq!(window.y_bottom_b, YBound::Value(0.0));
    assert_eq!(window.y_top_b, YBound::Value(1.0));
    assert!(engine.draft().is_none());
}

#[test]
fn reset_is_idempotent() {
    let dataset = three_points();
    let mut engine = RangeSelectionEngine::new();
    engine.press(100);
    engine.move_to(Some(200));
    engine.release(&dataset);

    engine.reset();
    let once = engine.clone();
    engine.reset();

    assert_eq!(engine, once);
    assert_eq!(engine.state(), SelectionState::Idle);
    assert_eq!(engine.zoom_window(), &ZoomWindow::full());
}

#[test]
fn commit_then_reset_round_trips_to_full_view() {
    let dataset = three_points();
    let mut engine = RangeSelectionEngine::new();
    let initial = engine.clone();

    engine.press(200);
    engine.move_to(Some(300));
    assert!(matches!(engine.release(&dataset), ReleaseOutcome::Committed(_)));
    assert!(engine.is_zoomed());

    engine.reset();
    assert_eq!(engine, initial);
}

#[test]
fn new_drag_replaces_committed_zoom() {
    let dataset = three_points();
    let mut engine = RangeSelectionEngine::new();
    engine.press(100);
    engine.move_to(Some(300));
    engine.release(&dataset);

    engine.press(100);
    assert_eq!(engine.state(), SelectionState::Selecting);
    assert_eq!(engine.zoom_window().x_range(), Some((100, 300)));

    engine.move_to(Some(200));
    engine.release(&dataset);
    let window = engine.zoom_window();
    assert_eq!(window.x_range(), Some((100, 200)));
    assert_eq!(window.usdt_domain(), Some(AxisDomain::new(9000.0, 9500.0)));
    assert_eq!(window.btc_domain(), Some(AxisDomain::new(1.0, 1.0)));
}

#[test]
fn degenerate_drag_from_zoomed_falls_back_to_full_view() {
    let dataset = three_points();
    let mut engine = RangeSelectionEngine::new();
    engine.press(100);
    engine.move_to(Some(300));
    engine.release(&dataset);

    engine.press(200);
    assert_eq!(engine.release(&dataset), ReleaseOutcome::Discarded);
    assert_eq!(engine.state(), SelectionState::Idle);
    assert_eq!(engine.zoom_window(), &ZoomWindow::full());
}

#[test]
fn press_while_selecting_restarts_the_draft() {
    let mut engine = RangeSelectionEngine::new();
    engine.press(100);
    engine.move_to(Some(300));
    engine.press(200);

    let draft = engine.draft().unwrap();
    assert_eq!((draft.anchor, draft.current), (Some(200), Some(200)));
    assert_eq!(engine.highlight(), None);
}

#[quickcheck]
fn zero_width_drag_never_zooms(time: i64, zoom_first: bool) -> bool {
    let dataset = three_points();
    let mut engine = RangeSelectionEngine::new();
    if zoom_first {
        engine.press(100);
        engine.move_to(Some(300));
        engine.release(&dataset);
    }

    engine.press(time);
    engine.move_to(Some(time));
    let outcome = engine.release(&dataset);

    outcome == ReleaseOutcome::Discarded
        && engine.state() == SelectionState::Idle
        && engine.zoom_window() == &ZoomWindow::full()
}

#[quickcheck]
fn press_then_release_never_zooms(time: i64, zoom_first: bool) -> bool {
    let dataset = three_points();
    let mut engine = RangeSelectionEngine::new();
    if zoom_first {
        engine.press(100);
        engine.move_to(Some(300));
        engine.release(&dataset);
    }

    engine.press(time);
    let outcome = engine.release(&dataset);

    outcome == ReleaseOutcome::Discarded
        && engine.state() == SelectionState::Idle
        && engine.zoom_window() == &ZoomWindow::full()
        && engine.draft().is_none()
}

#[quickcheck]
fn unresolved_endpoint_never_zooms(anchor: i64, current: Option<i64>) -> bool {
    let dataset = three_points();
    let mut engine = RangeSelectionEngine::new();
    engine.press(anchor);
    engine.move_to(current);
    let outcome = engine.release(&dataset);

    let resolvable = |t: i64| dataset.index_of_time(t).is_some();
    let commits = match current {
        Some(current) => current != anchor && resolvable(anchor) && resolvable(current),
        None => false,
    };

    match outcome {
        ReleaseOutcome::Committed(_) => commits && engine.state() == SelectionState::Zoomed,
        ReleaseOutcome::Discarded => !commits && engine.state() == SelectionState::Idle,
        ReleaseOutcome::Ignored => false,
    }
}
