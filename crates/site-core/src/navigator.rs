//! Discrete slide navigation driven by wheel, swipe and key input.
//!
//! A navigator holds the current slide index of one page and moves it by
//! exactly one step per committed gesture. Raw wheel/touch deltas are summed
//! by an accumulator until they cross a threshold; the commit then starts a
//! fixed-length transition during which all further input is dropped.
//!
//! Time is passed in explicitly as milliseconds so the state machine can be
//! driven from browser event timestamps, timers, or a test script alike.

use crate::config::NavigationTuning;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Advance,
    Retreat,
}

impl Direction {
    /// Positive deltas (scrolling down, swiping up) advance.
    #[inline]
    pub fn from_delta(delta: f32) -> Option<Direction> {
        if delta > 0.0 {
            Some(Direction::Advance)
        } else if delta < 0.0 {
            Some(Direction::Retreat)
        } else {
            None
        }
    }
}

/// What happens at either end of the slide set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgePolicy {
    #[default]
    Clamp,
    Wrap,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavState {
    Idle(usize),
    Transitioning { from: usize, to: usize, until_ms: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    /// The page wants the window scrolled back to the top.
    pub reset_scroll: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// Input absorbed; threshold not crossed yet.
    Pending,
    /// Dropped because a transition is in flight.
    Ignored,
    /// Committed toward an edge that does not move under `Clamp`.
    AtEdge(Direction),
    Committed(Transition),
}

impl NavOutcome {
    pub fn transition(&self) -> Option<Transition> {
        match self {
            NavOutcome::Committed(t) => Some(*t),
            _ => None,
        }
    }
}

/// Sign-consistent running total of unconsumed delta.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureAccumulator {
    total: f32,
}

impl GestureAccumulator {
    /// A delta against the current direction restarts the total from it.
    pub fn add(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        if self.total != 0.0 && delta != 0.0 && self.total.signum() != delta.signum() {
            self.total = delta;
        } else {
            self.total += delta;
        }
    }

    /// Consumes the total once its magnitude exceeds `threshold`.
    pub fn commit(&mut self, threshold: f32) -> Option<Direction> {
        if self.total.abs() > threshold {
            let direction = Direction::from_delta(self.total);
            self.total = 0.0;
            direction
        } else {
            None
        }
    }

    #[inline]
    pub fn reset(&mut self) {
        self.total = 0.0;
    }

    #[inline]
    pub fn total(&self) -> f32 {
        self.total
    }
}

/// Wheel accumulation with a quiet-period reset, so slow independent ticks
/// never add up to an accidental transition.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelAccumulator {
    acc: GestureAccumulator,
    last_event_ms: Option<f64>,
}

impl WheelAccumulator {
    pub fn push(&mut self, delta: f32, now_ms: f64, tuning: &NavigationTuning) -> Option<Direction> {
        if let Some(last) = self.last_event_ms {
            if now_ms - last > tuning.wheel_quiet_ms {
                self.acc.reset();
            }
        }
        self.last_event_ms = Some(now_ms);
        self.acc.add(delta);
        self.acc.commit(tuning.wheel_threshold)
    }

    pub fn reset(&mut self) {
        self.acc.reset();
    }

    pub fn total(&self) -> f32 {
        self.acc.total()
    }
}

/// Vertical swipe tracking for one touch sequence. Commits at most once
/// per touchstart.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start_y: Option<f32>,
}

impl SwipeTracker {
    pub fn start(&mut self, y: f32) {
        self.start_y = Some(y);
    }

    /// Finger moving up (start above current) advances.
    pub fn moved(&mut self, y: f32, threshold: f32) -> Option<Direction> {
        let start = self.start_y?;
        let delta = start - y;
        if delta.abs() > threshold {
            self.start_y = None;
            Direction::from_delta(delta)
        } else {
            None
        }
    }

    pub fn end(&mut self) {
        self.start_y = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.start_y.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct SlideNavigator {
    len: usize,
    state: NavState,
    edge: EdgePolicy,
    tuning: NavigationTuning,
    wheel: WheelAccumulator,
    swipe: SwipeTracker,
    reset_scroll_on_commit: bool,
}

impl SlideNavigator {
    /// `len` is clamped to at least one slide.
    pub fn new(len: usize, tuning: NavigationTuning) -> Self {
        Self {
            len: len.max(1),
            state: NavState::Idle(0),
            edge: EdgePolicy::Clamp,
            tuning,
            wheel: WheelAccumulator::default(),
            swipe: SwipeTracker::default(),
            reset_scroll_on_commit: false,
        }
    }

    pub fn with_edge_policy(mut self, edge: EdgePolicy) -> Self {
        self.edge = edge;
        self
    }

    pub fn with_scroll_reset(mut self, reset: bool) -> Self {
        self.reset_scroll_on_commit = reset;
        self
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn last_index(&self) -> usize {
        self.len - 1
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn tuning(&self) -> &NavigationTuning {
        &self.tuning
    }

    /// Index the page is at (the origin while a transition runs).
    pub fn index(&self) -> usize {
        match self.state {
            NavState::Idle(i) => i,
            NavState::Transitioning { from, .. } => from,
        }
    }

    /// Index the page is showing or heading to.
    pub fn target(&self) -> usize {
        match self.state {
            NavState::Idle(i) => i,
            NavState::Transitioning { to, .. } => to,
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.state, NavState::Transitioning { .. })
    }

    pub fn wheel_total(&self) -> f32 {
        self.wheel.total()
    }

    /// Milliseconds until the transition lock releases, if locked.
    pub fn lock_remaining_ms(&self, now_ms: f64) -> Option<f64> {
        match self.state {
            NavState::Transitioning { until_ms, .. } => Some((until_ms - now_ms).max(0.0)),
            NavState::Idle(_) => None,
        }
    }

    /// Releases an expired transition lock. Returns the new index if it did.
    pub fn settle(&mut self, now_ms: f64) -> Option<usize> {
        match self.state {
            NavState::Transitioning { to, until_ms, .. } if now_ms >= until_ms => {
                self.state = NavState::Idle(to);
                Some(to)
            }
            _ => None,
        }
    }

    pub fn on_wheel(&mut self, delta_y: f32, now_ms: f64) -> NavOutcome {
        self.settle(now_ms);
        if self.is_locked() {
            self.wheel.reset();
            return NavOutcome::Ignored;
        }
        match self.wheel.push(delta_y, now_ms, &self.tuning) {
            Some(direction) => self.commit(direction, now_ms),
            None => NavOutcome::Pending,
        }
    }

    pub fn on_touch_start(&mut self, y: f32, now_ms: f64) {
        self.settle(now_ms);
        if self.is_locked() {
            self.swipe.end();
        } else {
            self.swipe.start(y);
        }
    }

    pub fn on_touch_move(&mut self, y: f32, now_ms: f64) -> NavOutcome {
        self.settle(now_ms);
        if self.is_locked() {
            self.swipe.end();
            return NavOutcome::Ignored;
        }
        match self.swipe.moved(y, self.tuning.touch_threshold_px) {
            Some(direction) => self.commit(direction, now_ms),
            None => NavOutcome::Pending,
        }
    }

    pub fn on_touch_end(&mut self) {
        self.swipe.end();
    }

    /// An already-committed step (arrow key, nav button).
    pub fn step(&mut self, direction: Direction, now_ms: f64) -> NavOutcome {
        self.settle(now_ms);
        if self.is_locked() {
            return NavOutcome::Ignored;
        }
        self.commit(direction, now_ms)
    }

    fn commit(&mut self, direction: Direction, now_ms: f64) -> NavOutcome {
        self.wheel.reset();
        self.swipe.end();
        let from = self.index();
        let Some(to) = self.neighbour(from, direction) else {
            log::debug!("[nav] {:?} at edge {}", direction, from);
            return NavOutcome::AtEdge(direction);
        };
        self.state = NavState::Transitioning {
            from,
            to,
            until_ms: now_ms + self.tuning.transition_ms,
        };
        log::info!("[nav] slide {} -> {}", from, to);
        NavOutcome::Committed(Transition {
            from,
            to,
            direction,
            reset_scroll: self.reset_scroll_on_commit,
        })
    }

    fn neighbour(&self, index: usize, direction: Direction) -> Option<usize> {
        let last = self.last_index();
        match (direction, self.edge) {
            (Direction::Advance, _) if index < last => Some(index + 1),
            (Direction::Retreat, _) if index > 0 => Some(index - 1),
            (_, EdgePolicy::Clamp) => None,
            // A single slide has nowhere to wrap to.
            (_, EdgePolicy::Wrap) if last == 0 => None,
            (Direction::Advance, EdgePolicy::Wrap) => Some(0),
            (Direction::Retreat, EdgePolicy::Wrap) => Some(last),
        }
    }
}
