//! Board-agnostic core logic for the joystick cursor firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Analog sampling of the two joystick axes
//! - Brightness mapping (deadzone + distance from centre)
//! - Cursor mapping (integer scaling + clamp-and-hold)
//! - Debounced button handling and the shared toggle state
//! - The render loop tying it all together
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod buttons;
pub mod config;
pub mod input;
pub mod mapping;
pub mod render;
pub mod traits;
