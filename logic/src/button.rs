use embassy_time::{Duration, Instant};

use crate::PressKind;

/// Classifies press/release gestures on an active-low push-button.
///
/// A falling edge records the press instant; the matching rising edge measures
/// the hold and classifies it against `LONG_PRESS_MS` (strictly greater than
/// the threshold is long, the threshold itself is short).
pub struct ButtonClassifier<const LONG_PRESS_MS: u64> {
    pressed_at: Instant,
}

impl<const LONG_PRESS_MS: u64> ButtonClassifier<LONG_PRESS_MS> {
    /// The press instant starts at the epoch zero, so a release observed
    /// before any press measures the whole uptime. Known startup artifact;
    /// deliberately not guarded against.
    pub fn new() -> Self {
        Self {
            pressed_at: Instant::from_ticks(0),
        }
    }

    pub fn long_press_threshold() -> Duration {
        Duration::from_millis(LONG_PRESS_MS)
    }

    /// Feed the button level observed at an edge. Returns a classification on
    /// release edges, `None` on press edges. Runs in the edge-handling
    /// context: no blocking, no allocation.
    pub fn on_edge(&mut self, pressed: bool, now: Instant) -> Option<PressKind> {
        if pressed {
            self.pressed_at = now;
            None
        } else {
            let held = now - self.pressed_at;
            Some(if held > Self::long_press_threshold() {
                PressKind::Long
            } else {
                PressKind::Short
            })
        }
    }
}

#[mutants::skip]
impl<const LONG_PRESS_MS: u64> Default for ButtonClassifier<LONG_PRESS_MS> {
    fn default() -> Self {
        Self::new()
    }
}
