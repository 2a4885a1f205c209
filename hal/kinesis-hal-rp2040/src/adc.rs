//! Joystick converter
//!
//! Both axes share the single RP2040 ADC; see [`crate::pins::AdcChannel`]
//! for which GPIO feeds which channel.

use embassy_rp::adc::{self, Adc, Blocking, Channel};
use kinesis_hal::AnalogInput;

/// Blocking converter over the two joystick axes
///
/// Channel `0` is the first pin handed to [`JoystickAdc::new`], channel `1`
/// the second. Selecting any other index keeps the previous selection.
pub struct JoystickAdc {
    adc: Adc<'static, Blocking>,
    channels: [Channel<'static>; 2],
    selected: usize,
}

impl JoystickAdc {
    /// Take the converter and both axis channels
    ///
    /// Runs one conversion per channel so a dead converter shows up here
    /// instead of in the render loop.
    pub fn new(
        mut adc: Adc<'static, Blocking>,
        mut x: Channel<'static>,
        mut y: Channel<'static>,
    ) -> Result<Self, adc::Error> {
        let _x_raw = adc.blocking_read(&mut x)?;
        let _y_raw = adc.blocking_read(&mut y)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("ADC probe: x={} y={}", _x_raw, _y_raw);

        Ok(Self {
            adc,
            channels: [x, y],
            selected: 0,
        })
    }
}

impl AnalogInput for JoystickAdc {
    fn select_channel(&mut self, channel: u8) {
        let index = channel as usize;
        if index < self.channels.len() {
            self.selected = index;
        }
    }

    fn read_raw(&mut self) -> u16 {
        match self.adc.blocking_read(&mut self.channels[self.selected]) {
            Ok(raw) => raw,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::panic!("ADC conversion on channel {} failed: {}", self.selected, _e);
                #[cfg(not(feature = "defmt"))]
                panic!("ADC conversion failed");
            }
        }
    }
}
