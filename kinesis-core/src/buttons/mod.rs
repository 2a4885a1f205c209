//! Debounced push-buttons
//!
//! Two buttons, each with its own refractory window:
//!
//! - **Power** gates both LED channels on and off.
//! - **Select** flips an indicator LED and shows or hides the border.
//!
//! Handlers only touch the window, the [`ToggleState`] flags and (for
//! select) the indicator pin. The render loop picks the flags up on its next
//! iteration and does the PWM and display work.

pub mod debounce;
pub mod toggles;

pub use debounce::{DebounceWindow, EdgeOutcome};
pub use toggles::ToggleState;

use kinesis_hal::OutputPin;

/// Logical button source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Power,
    Select,
}

/// Effect of an accepted edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEffect {
    /// LED channels gated to the new value
    PwmEnabled(bool),
    /// Border visibility changed to the new value
    BorderVisible(bool),
}

/// LED gate button
pub struct PowerButton {
    window: DebounceWindow,
}

impl PowerButton {
    pub const fn new(refractory_ms: u32) -> Self {
        Self {
            window: DebounceWindow::new(refractory_ms),
        }
    }

    /// Handle a falling edge at `now_ms`
    ///
    /// Returns `None` for a bounce.
    pub fn on_falling_edge(&mut self, now_ms: u32, toggles: &ToggleState) -> Option<ButtonEffect> {
        match self.window.on_edge(now_ms) {
            EdgeOutcome::Accepted => Some(ButtonEffect::PwmEnabled(toggles.toggle_pwm())),
            EdgeOutcome::Rejected => None,
        }
    }

    pub fn window(&self) -> &DebounceWindow {
        &self.window
    }
}

/// Border / indicator button
///
/// The border is visible while the indicator LED is off.
pub struct SelectButton<P> {
    window: DebounceWindow,
    indicator: P,
}

impl<P: OutputPin> SelectButton<P> {
    /// Create the button, syncing the indicator with the current border state
    pub fn new(refractory_ms: u32, mut indicator: P, toggles: &ToggleState) -> Self {
        indicator.set_state(!toggles.border_visible());
        Self {
            window: DebounceWindow::new(refractory_ms),
            indicator,
        }
    }

    /// Handle a falling edge at `now_ms`
    ///
    /// Returns `None` for a bounce.
    pub fn on_falling_edge(&mut self, now_ms: u32, toggles: &ToggleState) -> Option<ButtonEffect> {
        match self.window.on_edge(now_ms) {
            EdgeOutcome::Accepted => {
                self.indicator.toggle();
                // Read back after the toggle: visibility follows the new level
                let visible = !self.indicator.is_set_high();
                toggles.set_border_visible(visible);
                Some(ButtonEffect::BorderVisible(visible))
            }
            EdgeOutcome::Rejected => None,
        }
    }

    pub fn window(&self) -> &DebounceWindow {
        &self.window
    }

    pub fn indicator(&self) -> &P {
        &self.indicator
    }
}
