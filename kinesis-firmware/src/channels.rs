//! State shared between tasks
//!
//! Button tasks write the toggle flags, the render task reads them once per
//! iteration.

use kinesis_core::buttons::ToggleState;

/// LED gate and border visibility, both on at power-up
pub static TOGGLES: ToggleState = ToggleState::new();
