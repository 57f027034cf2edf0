// Host-side tests for the slide navigator state machine.

use site_core::navigator::{GestureAccumulator, SwipeTracker, Transition};
use site_core::{Direction, EdgePolicy, NavOutcome, NavState, NavigationTuning, SlideNavigator};

fn four_slides() -> SlideNavigator {
    SlideNavigator::new(4, NavigationTuning::default())
}

#[test]
fn starts_idle_at_zero() {
    let nav = four_slides();
    assert_eq!(nav.state(), NavState::Idle(0));
    assert_eq!(nav.last_index(), 3);
}

#[test]
fn two_quick_wheel_ticks_commit_one_advance() {
    let mut nav = four_slides();
    assert_eq!(nav.on_wheel(40.0, 1_000.0), NavOutcome::Pending);
    let outcome = nav.on_wheel(50.0, 1_060.0);
    assert_eq!(
        outcome,
        NavOutcome::Committed(Transition {
            from: 0,
            to: 1,
            direction: Direction::Advance,
            reset_scroll: false,
        })
    );
    assert_eq!(nav.wheel_total(), 0.0);
    assert_eq!(nav.settle(1_060.0 + nav.tuning().transition_ms), Some(1));
    assert_eq!(nav.state(), NavState::Idle(1));
}

#[test]
fn single_small_tick_does_not_commit() {
    let mut nav = four_slides();
    assert_eq!(nav.on_wheel(30.0, 0.0), NavOutcome::Pending);
    assert_eq!(nav.state(), NavState::Idle(0));
    assert_eq!(nav.wheel_total(), 30.0);
}

#[test]
fn exactly_threshold_does_not_commit() {
    let mut nav = four_slides();
    assert_eq!(nav.on_wheel(80.0, 0.0), NavOutcome::Pending);
    assert!(matches!(nav.on_wheel(1.0, 10.0), NavOutcome::Committed(_)));
}

#[test]
fn quiet_period_restarts_accumulation() {
    let mut nav = four_slides();
    assert_eq!(nav.on_wheel(50.0, 0.0), NavOutcome::Pending);
    // 200ms later: the earlier 50 is forgotten
    assert_eq!(nav.on_wheel(50.0, 200.0), NavOutcome::Pending);
    assert_eq!(nav.wheel_total(), 50.0);
    assert_eq!(nav.state(), NavState::Idle(0));
}

#[test]
fn direction_change_restarts_accumulation() {
    let mut nav = four_slides();
    nav.on_wheel(70.0, 0.0);
    nav.on_wheel(-30.0, 20.0);
    assert_eq!(nav.wheel_total(), -30.0);
}

#[test]
fn input_during_transition_is_dropped() {
    let mut nav = four_slides();
    assert!(matches!(nav.on_wheel(100.0, 0.0), NavOutcome::Committed(_)));
    assert!(nav.is_locked());
    assert_eq!(nav.on_wheel(500.0, 100.0), NavOutcome::Ignored);
    assert_eq!(nav.step(Direction::Advance, 200.0), NavOutcome::Ignored);
    assert_eq!(nav.wheel_total(), 0.0);
    assert_eq!(nav.target(), 1);
    assert_eq!(nav.index(), 0);

    // Lock released by the next input after the duration
    let after = nav.tuning().transition_ms + 1.0;
    assert!(matches!(nav.on_wheel(100.0, after), NavOutcome::Committed(t) if t.from == 1 && t.to == 2));
}

#[test]
fn advancing_past_the_end_is_a_noop_that_clears_the_accumulator() {
    let mut nav = four_slides();
    let mut now = 0.0;
    for _ in 0..3 {
        assert!(matches!(nav.step(Direction::Advance, now), NavOutcome::Committed(_)));
        now += 1_000.0;
    }
    nav.settle(now);
    assert_eq!(nav.index(), 3);

    assert_eq!(nav.on_wheel(90.0, now), NavOutcome::AtEdge(Direction::Advance));
    assert_eq!(nav.state(), NavState::Idle(3));
    assert_eq!(nav.wheel_total(), 0.0);
}

#[test]
fn retreating_at_zero_stays_at_zero() {
    let mut nav = four_slides();
    assert_eq!(nav.on_wheel(-120.0, 0.0), NavOutcome::AtEdge(Direction::Retreat));
    assert_eq!(nav.state(), NavState::Idle(0));
}

#[test]
fn wrap_policy_cycles_around() {
    let mut nav = four_slides().with_edge_policy(EdgePolicy::Wrap);
    assert!(matches!(nav.step(Direction::Retreat, 0.0), NavOutcome::Committed(t) if t.to == 3));
    nav.settle(10_000.0);
    assert!(matches!(nav.step(Direction::Advance, 10_000.0), NavOutcome::Committed(t) if t.to == 0));
}

#[test]
fn single_slide_never_moves() {
    let mut nav = SlideNavigator::new(1, NavigationTuning::default()).with_edge_policy(EdgePolicy::Wrap);
    assert_eq!(nav.step(Direction::Advance, 0.0), NavOutcome::AtEdge(Direction::Advance));
    assert_eq!(nav.state(), NavState::Idle(0));
}

#[test]
fn swipe_up_advances_once_per_touch() {
    let mut nav = four_slides().with_scroll_reset(true);
    nav.on_touch_start(600.0, 0.0);
    assert_eq!(nav.on_touch_move(560.0, 10.0), NavOutcome::Pending);
    let outcome = nav.on_touch_move(500.0, 20.0);
    assert_eq!(
        outcome.transition(),
        Some(Transition {
            from: 0,
            to: 1,
            direction: Direction::Advance,
            reset_scroll: true,
        })
    );
    // Same touch keeps moving after the lock has gone: no second commit
    assert_eq!(nav.on_touch_move(100.0, 5_000.0), NavOutcome::Pending);
    nav.on_touch_end();
    assert_eq!(nav.index(), 1);
}

#[test]
fn swipe_down_retreats() {
    let mut nav = four_slides();
    nav.step(Direction::Advance, 0.0);
    nav.on_touch_start(100.0, 5_000.0);
    assert!(matches!(nav.on_touch_move(250.0, 5_010.0), NavOutcome::Committed(t) if t.to == 0));
}

#[test]
fn touch_started_during_lock_is_not_tracked() {
    let mut nav = four_slides();
    nav.step(Direction::Advance, 0.0);
    nav.on_touch_start(600.0, 10.0);
    assert_eq!(nav.on_touch_move(300.0, 20.0), NavOutcome::Ignored);
}

#[test]
fn lock_remaining_counts_down() {
    let mut nav = four_slides();
    assert_eq!(nav.lock_remaining_ms(0.0), None);
    nav.step(Direction::Advance, 100.0);
    let total = nav.tuning().transition_ms;
    assert_eq!(nav.lock_remaining_ms(100.0), Some(total));
    assert_eq!(nav.lock_remaining_ms(100.0 + total * 2.0), Some(0.0));
}

#[test]
fn accumulator_and_tracker_primitives() {
    let mut acc = GestureAccumulator::default();
    acc.add(50.0);
    acc.add(f32::NAN);
    assert_eq!(acc.total(), 50.0);
    assert_eq!(acc.commit(80.0), None);
    acc.add(-100.0);
    assert_eq!(acc.commit(80.0), Some(Direction::Retreat));
    assert_eq!(acc.total(), 0.0);

    let mut swipe = SwipeTracker::default();
    assert_eq!(swipe.moved(0.0, 80.0), None);
    swipe.start(0.0);
    assert!(swipe.is_tracking());
    assert_eq!(swipe.moved(90.0, 80.0), Some(Direction::Retreat));
    assert!(!swipe.is_tracking());
}
