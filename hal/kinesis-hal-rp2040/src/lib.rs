//! RP2040-specific HAL for the joystick firmware
//!
//! This crate provides RP2040 implementations of the shared `kinesis-hal`
//! traits, plus the GPIO mapping rules the board module checks at boot:
//!
//! - ADC channel and PWM slice/channel lookup by GPIO ([`pins`])
//! - A two-channel joystick converter (`rp2040` feature)
//! - A two-channel LED slice (`rp2040` feature)
//!
//! The lookups have no embassy-rp dependency, so `cargo test` runs them on
//! the host. The firmware enables `rp2040` for the peripheral adapters.

#![no_std]

pub mod pins;

#[cfg(feature = "rp2040")]
pub mod adc;
#[cfg(feature = "rp2040")]
pub mod pwm;

pub use pins::{AdcChannel, PwmOutput, SLICE_COUNT};

#[cfg(feature = "rp2040")]
pub use adc::JoystickAdc;
#[cfg(feature = "rp2040")]
pub use pwm::LedSlice;

// Re-export shared traits from kinesis-hal for convenience
pub use kinesis_hal::{AnalogInput, PwmChannel, PwmSlice};
