//! LED PWM slice
//!
//! See [`crate::pins::PwmOutput`] for the GPIO to slice mapping.

use embassy_rp::pwm::{Config, Pwm};
use fixed::FixedU16;
use kinesis_hal::{PwmChannel, PwmSlice};

/// One slice driving two LEDs
///
/// Keeps a shadow of the slice configuration; every change rewrites the
/// whole configuration, which is how embassy-rp exposes the registers.
pub struct LedSlice {
    pwm: Pwm<'static>,
    config: Config,
}

impl LedSlice {
    /// Configure the slice with a fixed wrap and clock divider
    ///
    /// `clk_div_x16` is the divider in 8.4 fixed point (`97` = 6.0625).
    /// The slice starts stopped with both levels at zero.
    pub fn new(mut pwm: Pwm<'static>, wrap: u16, clk_div_x16: u16) -> Self {
        let mut config = Config::default();
        config.top = wrap;
        config.divider = FixedU16::from_bits(clk_div_x16);
        config.compare_a = 0;
        config.compare_b = 0;
        config.enable = false;
        pwm.set_config(&config);

        Self { pwm, config }
    }

    /// Current compare level of one channel
    pub fn level(&self, channel: PwmChannel) -> u16 {
        match channel {
            PwmChannel::A => self.config.compare_a,
            PwmChannel::B => self.config.compare_b,
        }
    }
}

impl PwmSlice for LedSlice {
    fn set_channel_level(&mut self, channel: PwmChannel, level: u16) {
        match channel {
            PwmChannel::A => self.config.compare_a = level,
            PwmChannel::B => self.config.compare_b = level,
        }
        self.pwm.set_config(&self.config);
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.config.enable = enabled;
        self.pwm.set_config(&self.config);
    }

    fn is_enabled(&self) -> bool {
        self.config.enable
    }
}
