//! Output sink traits
//!
//! These traits define the interface between the render loop and the
//! display implementation. PWM and analog input traits live in
//! `kinesis-hal`.

pub mod display;

pub use display::{DisplaySink, Fill, PixelColor, Rect};
