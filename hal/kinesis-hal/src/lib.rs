//! Kinesis Hardware Abstraction Layer
//!
//! This crate defines the peripheral traits the joystick pipeline consumes.
//! Chip-specific HALs (currently RP2040) implement them, and host tests
//! implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (kinesis-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  kinesis-core (pipeline, render loop)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  kinesis-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  kinesis-hal-rp2040                     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`adc::AnalogInput`] - Multiplexed blocking analog conversion
//! - [`pwm::PwmSlice`] - Two-channel PWM slice with a shared enable
//! - [`gpio::OutputPin`] - Digital output

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod pwm;

// Re-export key traits at crate root for convenience
pub use adc::AnalogInput;
pub use gpio::{EhOutput, OutputPin};
pub use pwm::{PwmChannel, PwmSlice};
