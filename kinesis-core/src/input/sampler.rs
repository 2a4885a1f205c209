//! Two-axis analog sampler
//!
//! Reads the joystick X and Y axes through a single multiplexed converter.

use kinesis_hal::AnalogInput;

/// Converter channel wired to the X axis
pub const X_CHANNEL: u8 = 0;

/// Converter channel wired to the Y axis
pub const Y_CHANNEL: u8 = 1;

/// One raw reading of both joystick axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleReading {
    /// Raw X axis value
    pub x: u16,
    /// Raw Y axis value
    pub y: u16,
}

impl SampleReading {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Startup check failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SamplerError {
    /// A probe conversion returned a value the converter cannot produce
    OutOfRange {
        channel: u8,
        raw: u16,
    },
}

/// Joystick sampler
///
/// Owns the converter for the lifetime of the program.
pub struct AnalogSampler<A> {
    adc: A,
    x_channel: u8,
    y_channel: u8,
}

impl<A: AnalogInput> AnalogSampler<A> {
    /// Create a sampler on the default channels (X on 0, Y on 1)
    pub fn new(adc: A) -> Self {
        Self::with_channels(adc, X_CHANNEL, Y_CHANNEL)
    }

    /// Create a sampler on explicit channels
    pub fn with_channels(adc: A, x_channel: u8, y_channel: u8) -> Self {
        Self {
            adc,
            x_channel,
            y_channel,
        }
    }

    /// Run one conversion per axis and check the converter answers sanely
    ///
    /// Called once at boot. Without analog input the device is useless, so
    /// callers treat an error here as fatal.
    pub fn probe(mut self) -> Result<Self, SamplerError> {
        let raw_max = self.adc.raw_max();
        for channel in [self.x_channel, self.y_channel] {
            self.adc.select_channel(channel);
            let raw = self.adc.read_raw();
            if raw > raw_max {
                return Err(SamplerError::OutOfRange { channel, raw });
            }
        }
        Ok(self)
    }

    /// Sample both axes, X first
    pub fn sample(&mut self) -> SampleReading {
        self.adc.select_channel(self.x_channel);
        let x = self.adc.read_raw();
        self.adc.select_channel(self.y_channel);
        let y = self.adc.read_raw();
        SampleReading { x, y }
    }

    /// Largest raw value the converter produces
    pub fn raw_max(&self) -> u16 {
        self.adc.raw_max()
    }
}
