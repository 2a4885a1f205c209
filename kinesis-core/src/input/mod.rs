//! Joystick input acquisition

pub mod sampler;

pub use sampler::{AnalogSampler, SampleReading, SamplerError};
