//! Button tasks
//!
//! Each task parks on a falling edge, timestamps it and hands it to its
//! debouncer. Bounces are dropped silently.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use kinesis_core::buttons::{Button, PowerButton, SelectButton, ToggleState};

use crate::board::Indicator;

/// Milliseconds since boot, wrapping
fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}

/// Button A: gates both LED channels
#[embassy_executor::task]
pub async fn power_button_task(
    mut pin: Input<'static>,
    refractory_ms: u32,
    toggles: &'static ToggleState,
) {
    let mut button = PowerButton::new(refractory_ms);

    loop {
        pin.wait_for_falling_edge().await;
        if let Some(effect) = button.on_falling_edge(now_ms(), toggles) {
            debug!("{} button: {}", Button::Power, effect);
        }
    }
}

/// Joystick push: flips the indicator LED and the border
#[embassy_executor::task]
pub async fn select_button_task(
    mut pin: Input<'static>,
    indicator: Indicator,
    refractory_ms: u32,
    toggles: &'static ToggleState,
) {
    let mut button = SelectButton::new(refractory_ms, indicator, toggles);

    loop {
        pin.wait_for_falling_edge().await;
        if let Some(effect) = button.on_falling_edge(now_ms(), toggles) {
            debug!("{} button: {}", Button::Select, effect);
        }
    }
}
