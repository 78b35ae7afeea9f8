//! Haptic feedback patterns and the vibration capability.
//!
//! Waveforms are alternating vibrate/pause durations in milliseconds, the
//! pattern format of platform vibration APIs. Triggering is a silent no-op
//! on hosts without vibration hardware (every desktop), so callers fire
//! patterns unconditionally.

use std::sync::Arc;

/// Named feedback patterns used across the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticPattern {
    /// Subtle tick for hover-grade interactions
    Light,
    /// Standard tap acknowledgement
    Medium,
    /// Emphatic confirmation
    Heavy,
    /// Action completed (collect, save)
    Success,
    /// Attention without failure
    Warning,
    /// Action failed
    Error,
    /// Picker/segmented-control selection change
    Selection,
}

impl HapticPattern {
    /// Vibrate/pause milliseconds for this pattern
    pub fn waveform(&self) -> &'static [u32] {
        match self {
            Self::Light => &[10],
            Self::Medium => &[20],
            Self::Heavy => &[30],
            Self::Success => &[10, 50, 20],
            Self::Warning => &[20, 100, 20],
            Self::Error => &[30, 80, 30, 80, 30],
            Self::Selection => &[5],
        }
    }
}

/// Vibration capability provided by the host environment
pub trait VibrationHost {
    /// Whether this host can vibrate at all
    fn can_vibrate(&self) -> bool;

    /// Play a waveform of alternating vibrate/pause milliseconds
    fn vibrate(&self, waveform: &[u32]);
}

/// Host with no vibration hardware; every trigger is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVibration;

impl VibrationHost for NoVibration {
    fn can_vibrate(&self) -> bool {
        false
    }

    fn vibrate(&self, _waveform: &[u32]) {}
}

/// Haptic feedback trigger bound to a host capability
#[derive(Clone)]
pub struct Haptics {
    host: Arc<dyn VibrationHost>,
}

impl Haptics {
    pub fn new(host: Arc<dyn VibrationHost>) -> Self {
        Self { host }
    }

    /// Haptics bound to a host that cannot vibrate
    pub fn disabled() -> Self {
        Self::new(Arc::new(NoVibration))
    }

    /// Play a pattern. Does nothing when the host cannot vibrate.
    pub fn trigger(&self, pattern: HapticPattern) {
        if !self.host.can_vibrate() {
            tracing::trace!(?pattern, "vibration unavailable, skipping");
            return;
        }
        self.host.vibrate(pattern.waveform());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingHost {
        played: Rc<RefCell<Vec<Vec<u32>>>>,
        available: bool,
    }

    impl VibrationHost for RecordingHost {
        fn can_vibrate(&self) -> bool {
            self.available
        }

        fn vibrate(&self, waveform: &[u32]) {
            self.played.borrow_mut().push(waveform.to_vec());
        }
    }

    #[test]
    fn triggers_waveform_on_capable_host() {
        let played = Rc::new(RefCell::new(Vec::new()));
        let haptics = Haptics::new(Arc::new(RecordingHost {
            played: Rc::clone(&played),
            available: true,
        }));

        haptics.trigger(HapticPattern::Success);
        assert_eq!(*played.borrow(), vec![vec![10, 50, 20]]);
    }

    #[test]
    fn skips_when_host_cannot_vibrate() {
        let played = Rc::new(RefCell::new(Vec::new()));
        let haptics = Haptics::new(Arc::new(RecordingHost {
            played: Rc::clone(&played),
            available: false,
        }));

        haptics.trigger(HapticPattern::Error);
        assert!(played.borrow().is_empty());
    }

    #[test]
    fn waveforms_have_odd_length() {
        // Patterns end on a vibrate step, never a dangling pause
        for pattern in [
            HapticPattern::Light,
            HapticPattern::Medium,
            HapticPattern::Heavy,
            HapticPattern::Success,
            HapticPattern::Warning,
            HapticPattern::Error,
            HapticPattern::Selection,
        ] {
            assert_eq!(pattern.waveform().len() % 2, 1, "{pattern:?}");
        }
    }
}
