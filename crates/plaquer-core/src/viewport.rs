//! Viewport classification and touch-target sizing.
//!
//! Classifies the available display width into one of three disjoint
//! buckets and rebroadcasts the classification on every observed resize
//! signal. The classifier has no opinion about where width signals come
//! from; the desktop shell bridges window resize events into
//! [`ViewportClassifier::observe_width`].

use std::sync::Arc;

use parking_lot::Mutex;

use crate::observers::Registry;

/// Width breakpoints in logical pixels
pub mod breakpoints {
    /// Widths below this are compact (phone-sized)
    pub const COMPACT_MAX: f64 = 768.0;
    /// Widths below this (and at least [`COMPACT_MAX`]) are medium
    pub const MEDIUM_MAX: f64 = 1024.0;
}

/// Minimum touch-target edge on compact viewports, logical pixels.
///
/// Platform-derived accessibility floor, not a style preference. Not
/// configurable.
pub const MIN_TOUCH_TARGET: f64 = 44.0;

/// Disjoint width buckets. Exactly one applies to any width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// width < 768
    Compact,
    /// 768 <= width < 1024
    Medium,
    /// width >= 1024
    Expanded,
}

impl ViewportClass {
    /// Classify a width. Pure; no hysteresis.
    pub fn classify(width: f64) -> Self {
        if width < breakpoints::COMPACT_MAX {
            Self::Compact
        } else if width < breakpoints::MEDIUM_MAX {
            Self::Medium
        } else {
            Self::Expanded
        }
    }

    pub fn is_compact(&self) -> bool {
        matches!(self, Self::Compact)
    }

    pub fn is_medium(&self) -> bool {
        matches!(self, Self::Medium)
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, Self::Expanded)
    }
}

/// Touch-friendly size for an interactive element.
///
/// Compact viewports are assumed to be touch-driven, so the size is clamped
/// up to the 44px minimum. Larger viewports keep the requested size
/// unchanged.
pub fn touch_target_size(base: f64, is_compact: bool) -> f64 {
    if is_compact {
        base.max(MIN_TOUCH_TARGET)
    } else {
        base
    }
}

struct ClassifierState {
    width: f64,
    class: ViewportClass,
    observers: Registry<ViewportClass>,
}

/// Live width classification with synchronous observer notification.
///
/// Cheap to clone; clones share state. Observers registered through
/// [`subscribe`](Self::subscribe) are invoked on every observed width
/// signal (no debouncing, even when the class is unchanged) and removed
/// when their [`ViewportSubscription`] is dropped.
#[derive(Clone)]
pub struct ViewportClassifier {
    state: Arc<Mutex<ClassifierState>>,
}

impl ViewportClassifier {
    pub fn new(initial_width: f64) -> Self {
        Self {
            state: Arc::new(Mutex::new(ClassifierState {
                width: initial_width,
                class: ViewportClass::classify(initial_width),
                observers: Registry::new(),
            })),
        }
    }

    /// Latest classification
    pub fn current(&self) -> ViewportClass {
        self.state.lock().class
    }

    /// Latest observed width
    pub fn width(&self) -> f64 {
        self.state.lock().width
    }

    /// Record a resize or orientation-change signal.
    ///
    /// Recomputes the class and notifies every observer synchronously with
    /// the fresh value. Observers must not re-enter the classifier.
    pub fn observe_width(&self, width: f64) {
        let mut state = self.state.lock();
        state.width = width;
        state.class = ViewportClass::classify(width);
        let class = state.class;
        state.observers.notify(class);
    }

    /// Register an observer. The returned guard removes it when dropped;
    /// hold the guard for as long as notifications are wanted.
    pub fn subscribe(&self, callback: impl Fn(ViewportClass) + 'static) -> ViewportSubscription {
        let id = self.state.lock().observers.add(Box::new(callback));
        ViewportSubscription {
            state: Arc::clone(&self.state),
            id,
        }
    }
}

/// Observer registration guard. Dropping it detaches the observer.
pub struct ViewportSubscription {
    state: Arc<Mutex<ClassifierState>>,
    id: u64,
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        self.state.lock().observers.remove(self.id);
    }
}

/// Display safe-area insets in logical pixels, supplied by the host.
///
/// Desktops report zero on all edges; notched or home-indicator displays
/// report non-zero bottom/top insets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SafeAreaInsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl SafeAreaInsets {
    /// Bottom padding for a bottom navigation bar: the base padding plus
    /// the bottom inset, so the bar clears home indicators.
    pub fn bottom_nav_padding(&self, base: f64) -> f64 {
        base + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn boundary_widths() {
        assert_eq!(ViewportClass::classify(767.0), ViewportClass::Compact);
        assert_eq!(ViewportClass::classify(768.0), ViewportClass::Medium);
        assert_eq!(ViewportClass::classify(1023.0), ViewportClass::Medium);
        assert_eq!(ViewportClass::classify(1024.0), ViewportClass::Expanded);
    }

    #[test]
    fn notifies_on_every_signal_without_debouncing() {
        let classifier = ViewportClassifier::new(500.0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let _sub = classifier.subscribe(move |class| sink.borrow_mut().push(class));

        // Same bucket twice, then a transition
        classifier.observe_width(400.0);
        classifier.observe_width(410.0);
        classifier.observe_width(900.0);

        assert_eq!(
            *seen.borrow(),
            vec![
                ViewportClass::Compact,
                ViewportClass::Compact,
                ViewportClass::Medium
            ]
        );
    }

    #[test]
    fn dropped_subscription_stops_notifications() {
        let classifier = ViewportClassifier::new(500.0);
        let count = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&count);
        let sub = classifier.subscribe(move |_| *counter.borrow_mut() += 1);
        classifier.observe_width(600.0);
        drop(sub);
        classifier.observe_width(700.0);

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn bottom_nav_padding_adds_inset() {
        let insets = SafeAreaInsets {
            bottom: 34.0,
            ..Default::default()
        };
        assert_eq!(insets.bottom_nav_padding(8.0), 42.0);
        assert_eq!(SafeAreaInsets::default().bottom_nav_padding(8.0), 8.0);
    }
}
