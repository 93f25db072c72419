//! Property-based invariant tests for the update controller.
//!
//! ## Invariants
//!
//! 1. Immediate policy: recompute count == notification count
//! 2. Burst coalescing: gaps shorter than the delay yield exactly one
//!    recompute, due `delay` after the last notification
//! 3. Commit-on-change: the sink sees no two consecutive equal values
//! 4. Disposal: nothing is published after `dispose`, whatever comes next

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use fitscale_core::{DesignSize, ObservedSize, RateLimitPolicy, ScaleEngine};
use fitscale_runtime::{Clock, ManualClock, ResizeOutcome, TimerToken, UpdateController};
use proptest::prelude::*;

// ── Strategies ────────────────────────────────────────────────────────────

fn arb_observed() -> impl Strategy<Value = ObservedSize> {
    (0u32..=4, 0u32..=4)
        .prop_map(|(w, h)| ObservedSize::new(f64::from(w) * 480.0, f64::from(h) * 270.0))
}

#[derive(Debug, Clone)]
enum Step {
    Resize(ObservedSize),
    Advance(u64),
    Poll,
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        arb_observed().prop_map(Step::Resize),
        (0u64..=250).prop_map(Step::Advance),
        Just(Step::Poll),
    ]
}

type Controller = UpdateController<
    Box<dyn FnMut() -> Option<ObservedSize>>,
    Box<dyn FnMut(f64)>,
    ManualClock,
>;

type Harness = (
    Controller,
    ManualClock,
    Rc<Cell<ObservedSize>>,
    Rc<RefCell<Vec<f64>>>,
);

fn harness(policy: RateLimitPolicy) -> Harness {
    let clock = ManualClock::new();
    let size = Rc::new(Cell::new(ObservedSize::new(1920.0, 1080.0)));
    let commits = Rc::new(RefCell::new(Vec::new()));
    let provider: Box<dyn FnMut() -> Option<ObservedSize>> = {
        let size = Rc::clone(&size);
        Box::new(move || Some(size.get()))
    };
    let sink: Box<dyn FnMut(f64)> = {
        let commits = Rc::clone(&commits);
        Box::new(move |scale| commits.borrow_mut().push(scale))
    };
    let controller = UpdateController::new(
        ScaleEngine::new(DesignSize::FULL_HD),
        policy,
        provider,
        sink,
        clock.clone(),
    );
    (controller, clock, size, commits)
}

/// Drive one step; returns the token if a recompute was scheduled.
fn apply(
    controller: &mut Controller,
    clock: &ManualClock,
    size: &Cell<ObservedSize>,
    step: Step,
) -> Option<TimerToken> {
    match step {
        Step::Resize(observed) => {
            size.set(observed);
            match controller.notify_resize() {
                ResizeOutcome::Scheduled { token, .. } => Some(token),
                _ => None,
            }
        }
        Step::Advance(ms) => {
            clock.advance_ms(ms);
            None
        }
        Step::Poll => {
            controller.poll();
            None
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn immediate_recomputes_per_notification(sizes in prop::collection::vec(arb_observed(), 1..50)) {
        let (mut controller, _, size, _) = harness(RateLimitPolicy::immediate());
        for observed in &sizes {
            size.set(*observed);
            let outcome = controller.notify_resize();
            prop_assert!(matches!(outcome, ResizeOutcome::Recomputed(_)));
        }
        let stats = controller.stats();
        prop_assert_eq!(stats.notifications, sizes.len() as u64);
        prop_assert_eq!(stats.recomputes, sizes.len() as u64);
    }

    #[test]
    fn burst_yields_single_recompute(
        delay in 1u64..=500,
        gaps in prop::collection::vec(0u64..=1000, 1..30),
    ) {
        let (mut controller, clock, size, _) = harness(RateLimitPolicy::debounce(delay));
        size.set(ObservedSize::new(960.0, 1080.0));

        let mut last_notify = Duration::ZERO;
        for gap in &gaps {
            // Keep every gap strictly inside the window.
            clock.advance_ms(gap % delay);
            last_notify = clock.now_mono();
            controller.notify_resize();
            prop_assert_eq!(controller.poll(), None);
        }
        prop_assert_eq!(controller.stats().recomputes, 0);

        let due = last_notify + Duration::from_millis(delay);
        prop_assert_eq!(controller.next_deadline(), Some(due));

        clock.set(due - Duration::from_millis(1));
        prop_assert_eq!(controller.poll(), None);
        clock.set(due);
        prop_assert!(controller.poll().is_some());
        prop_assert_eq!(controller.stats().recomputes, 1);
        prop_assert_eq!(controller.scale(), 0.5);
    }

    #[test]
    fn sink_never_sees_repeats(
        delay in 0u64..=150,
        steps in prop::collection::vec(arb_step(), 1..80),
    ) {
        let (mut controller, clock, size, commits) = harness(RateLimitPolicy::debounce(delay));
        controller.initialize();
        for step in steps {
            apply(&mut controller, &clock, &size, step);
        }
        let commits = commits.borrow();
        for pair in commits.windows(2) {
            prop_assert_ne!(pair[0], pair[1]);
        }
        prop_assert_eq!(controller.stats().commits, commits.len() as u64);
        prop_assert_eq!(controller.version(), commits.len() as u64);
        if let Some(last) = commits.last() {
            prop_assert_eq!(*last, controller.scale());
        }
    }

    #[test]
    fn nothing_published_after_dispose(
        delay in 1u64..=150,
        before in prop::collection::vec(arb_step(), 0..30),
        after in prop::collection::vec(arb_step(), 0..30),
    ) {
        let (mut controller, clock, size, commits) = harness(RateLimitPolicy::debounce(delay));
        let mut tokens = Vec::new();
        for step in before {
            tokens.extend(apply(&mut controller, &clock, &size, step));
        }
        controller.dispose();
        let published = commits.borrow().len();
        for step in after {
            tokens.extend(apply(&mut controller, &clock, &size, step));
        }
        for token in tokens {
            prop_assert_eq!(controller.fire(token), None);
        }
        prop_assert!(!controller.is_pending());
        prop_assert_eq!(commits.borrow().len(), published);
    }
}
