//! Viewport classification partition and touch-target tests
//!
//! The classification must partition every non-negative width into exactly
//! one bucket, with the documented boundary behaviour and no hysteresis.

use proptest::prelude::*;

use plaquer_core::{touch_target_size, ViewportClass, ViewportClassifier, MIN_TOUCH_TARGET};

proptest! {
    /// Every non-negative width lands in exactly one bucket
    #[test]
    fn classification_is_a_partition(width in 0.0f64..100_000.0) {
        let class = ViewportClass::classify(width);
        let buckets = [class.is_compact(), class.is_medium(), class.is_expanded()];
        prop_assert_eq!(buckets.iter().filter(|b| **b).count(), 1);
    }

    /// Classification is a pure function of width: same input, same bucket,
    /// regardless of what was observed before
    #[test]
    fn classification_has_no_hysteresis(
        width in 0.0f64..4096.0,
        history in prop::collection::vec(0.0f64..4096.0, 0..20),
    ) {
        let classifier = ViewportClassifier::new(width);
        let before = classifier.current();

        for w in history {
            classifier.observe_width(w);
        }
        classifier.observe_width(width);

        prop_assert_eq!(classifier.current(), before);
        prop_assert_eq!(classifier.current(), ViewportClass::classify(width));
    }

    /// Touch targets on compact viewports never dip below the floor
    #[test]
    fn compact_touch_targets_meet_floor(base in 0.0f64..200.0) {
        let size = touch_target_size(base, true);
        prop_assert!(size >= MIN_TOUCH_TARGET);
        prop_assert!(size >= base);
    }

    /// Non-compact viewports keep the requested size unchanged
    #[test]
    fn non_compact_touch_targets_unchanged(base in 0.0f64..200.0) {
        prop_assert_eq!(touch_target_size(base, false), base);
    }
}

/// The documented boundary table
#[test]
fn test_breakpoint_boundaries() {
    assert_eq!(ViewportClass::classify(0.0), ViewportClass::Compact);
    assert_eq!(ViewportClass::classify(767.0), ViewportClass::Compact);
    assert_eq!(ViewportClass::classify(767.999), ViewportClass::Compact);
    assert_eq!(ViewportClass::classify(768.0), ViewportClass::Medium);
    assert_eq!(ViewportClass::classify(1023.0), ViewportClass::Medium);
    assert_eq!(ViewportClass::classify(1023.999), ViewportClass::Medium);
    assert_eq!(ViewportClass::classify(1024.0), ViewportClass::Expanded);
    assert_eq!(ViewportClass::classify(3840.0), ViewportClass::Expanded);
}

/// Fixed touch-target values around the 44px floor
#[test]
fn test_touch_target_table() {
    assert_eq!(touch_target_size(30.0, true), 44.0);
    assert_eq!(touch_target_size(50.0, true), 50.0);
    assert_eq!(touch_target_size(30.0, false), 30.0);
    assert_eq!(touch_target_size(44.0, true), 44.0);
}

/// Observers see every signal in order, with the fresh class
#[test]
fn test_observer_sees_fresh_class_synchronously() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let classifier = ViewportClassifier::new(1280.0);
    let seen: Rc<RefCell<Vec<ViewportClass>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let _sub = classifier.subscribe(move |class| sink.borrow_mut().push(class));

    classifier.observe_width(700.0);
    classifier.observe_width(800.0);
    classifier.observe_width(1100.0);

    assert_eq!(
        *seen.borrow(),
        vec![
            ViewportClass::Compact,
            ViewportClass::Medium,
            ViewportClass::Expanded
        ]
    );
    assert_eq!(classifier.width(), 1100.0);
}

/// Two subscribers, one dropped: only the live one keeps firing
#[test]
fn test_teardown_leaves_no_dangling_observers() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let classifier = ViewportClassifier::new(500.0);
    let first = Rc::new(RefCell::new(0));
    let second = Rc::new(RefCell::new(0));

    let a = Rc::clone(&first);
    let sub_a = classifier.subscribe(move |_| *a.borrow_mut() += 1);
    let b = Rc::clone(&second);
    let _sub_b = classifier.subscribe(move |_| *b.borrow_mut() += 1);

    classifier.observe_width(600.0);
    drop(sub_a);
    classifier.observe_width(900.0);

    assert_eq!(*first.borrow(), 1);
    assert_eq!(*second.borrow(), 2);
}
