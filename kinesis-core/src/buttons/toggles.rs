//! Toggle state shared between button handlers and the render loop
//!
//! Each flag has exactly one writer (its button handler) and is read by the
//! render loop. Accesses are `SeqCst` so a flip made by a preempting handler
//! is visible to the next render iteration without a lock.

use portable_atomic::{AtomicBool, Ordering};

/// Shared toggle flags
pub struct ToggleState {
    pwm_enabled: AtomicBool,
    border_visible: AtomicBool,
}

impl Default for ToggleState {
    fn default() -> Self {
        Self::new()
    }
}

impl ToggleState {
    /// LEDs enabled and border visible, as at power-on
    pub const fn new() -> Self {
        Self::with_state(true, true)
    }

    pub const fn with_state(pwm_enabled: bool, border_visible: bool) -> Self {
        Self {
            pwm_enabled: AtomicBool::new(pwm_enabled),
            border_visible: AtomicBool::new(border_visible),
        }
    }

    /// Whether the LED channels should be running
    pub fn pwm_enabled(&self) -> bool {
        self.pwm_enabled.load(Ordering::SeqCst)
    }

    /// Flip the LED gate, returning the new value
    pub fn toggle_pwm(&self) -> bool {
        !self.pwm_enabled.fetch_not(Ordering::SeqCst)
    }

    /// Whether the border outline should be drawn
    pub fn border_visible(&self) -> bool {
        self.border_visible.load(Ordering::SeqCst)
    }

    pub fn set_border_visible(&self, visible: bool) {
        self.border_visible.store(visible, Ordering::SeqCst);
    }
}
