// Property tests: scale linearity, slide index bounds, one transition per
// lock window.

use proptest::prelude::*;
use site_core::config::ViewportConfig;
use site_core::viewport::compute;
use site_core::{NavOutcome, NavigationTuning, SlideNavigator, ViewportState};

#[derive(Clone, Debug)]
enum Input {
    Wheel(f32),
    TouchStart(f32),
    TouchMove(f32),
    TouchEnd,
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        (-300.0f32..300.0).prop_map(Input::Wheel),
        (0.0f32..900.0).prop_map(Input::TouchStart),
        (0.0f32..900.0).prop_map(Input::TouchMove),
        Just(Input::TouchEnd),
    ]
}

proptest! {
    #[test]
    fn scale_is_linear_in_width(width in 1.0f32..4000.0, x in 0.0f32..1440.0) {
        let vp = compute(&ViewportConfig::default(), ViewportState::new(width, 800.0));
        let expected = width / vp.reference_width;
        prop_assert!((vp.scale.factor() - expected).abs() < 1e-5);
        prop_assert!((vp.design_to_screen(x) - x * expected).abs() <= 1.0);
        prop_assert!(vp.scale.factor() > 0.0);
    }

    #[test]
    fn index_never_leaves_bounds(
        len in 1usize..8,
        steps in prop::collection::vec((input_strategy(), 0.0f64..400.0), 0..200),
    ) {
        let mut nav = SlideNavigator::new(len, NavigationTuning::default());
        let mut now = 0.0;
        for (input, gap) in steps {
            now += gap;
            let before = nav.target();
            let outcome = match input {
                Input::Wheel(d) => nav.on_wheel(d, now),
                Input::TouchStart(y) => { nav.on_touch_start(y, now); NavOutcome::Pending }
                Input::TouchMove(y) => nav.on_touch_move(y, now),
                Input::TouchEnd => { nav.on_touch_end(); NavOutcome::Pending }
            };
            prop_assert!(nav.index() < len);
            prop_assert!(nav.target() < len);
            if let NavOutcome::Committed(t) = outcome {
                prop_assert_eq!(t.from, before);
                prop_assert_eq!(t.from.abs_diff(t.to), 1);
            }
            if let NavOutcome::AtEdge(_) = outcome {
                prop_assert_eq!(nav.target(), before);
                prop_assert_eq!(nav.wheel_total(), 0.0);
            }
        }
    }

    #[test]
    fn at_most_one_commit_per_transition_window(
        deltas in prop::collection::vec((50.0f32..400.0, 1.0f64..120.0), 1..300),
    ) {
        let tuning = NavigationTuning::default();
        let mut nav = SlideNavigator::new(1000, tuning);
        let mut now = 0.0;
        let mut last_commit: Option<f64> = None;
        for (delta, gap) in deltas {
            now += gap;
            if let NavOutcome::Committed(_) = nav.on_wheel(delta, now) {
                if let Some(prev) = last_commit {
                    prop_assert!(now - prev >= tuning.transition_ms);
                }
                last_commit = Some(now);
            }
        }
    }
}
