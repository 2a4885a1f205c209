//! GPIO mux rules
//!
//! Which ADC channel and which PWM slice/channel sit behind a GPIO. Pure
//! lookups, so they build and test on the host without embassy-rp.
//!
//! RP2040 has a single ADC with 5 channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor
//!
//! It has 8 PWM slices with two channels each. GPIO `n` is wired to slice
//! `(n / 2) % 8`, channel A for even pins and B for odd pins.

use kinesis_hal::PwmChannel;

/// Number of PWM slices on RP2040
pub const SLICE_COUNT: u8 = 8;

/// Number of user GPIOs on RP2040
pub const GPIO_COUNT: u8 = 30;

/// ADC channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    /// ADC0 on GPIO26
    Adc0,
    /// ADC1 on GPIO27
    Adc1,
    /// ADC2 on GPIO28
    Adc2,
    /// ADC3 on GPIO29
    Adc3,
    /// Internal temperature sensor
    Temperature,
}

impl AdcChannel {
    /// Get the GPIO pin for this ADC channel
    pub fn gpio(&self) -> Option<u8> {
        match self {
            AdcChannel::Adc0 => Some(26),
            AdcChannel::Adc1 => Some(27),
            AdcChannel::Adc2 => Some(28),
            AdcChannel::Adc3 => Some(29),
            AdcChannel::Temperature => None,
        }
    }

    /// Get ADC channel from GPIO pin
    pub fn from_gpio(gpio: u8) -> Option<Self> {
        match gpio {
            26 => Some(AdcChannel::Adc0),
            27 => Some(AdcChannel::Adc1),
            28 => Some(AdcChannel::Adc2),
            29 => Some(AdcChannel::Adc3),
            _ => None,
        }
    }

    /// Hardware mux index
    pub fn index(&self) -> u8 {
        *self as u8
    }
}

/// PWM slice and channel behind a GPIO
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmOutput {
    pub slice: u8,
    pub channel: PwmChannel,
}

impl PwmOutput {
    /// Get the PWM output from a GPIO pin
    pub fn from_gpio(gpio: u8) -> Option<Self> {
        if gpio >= GPIO_COUNT {
            return None;
        }
        Some(Self {
            slice: (gpio >> 1) % SLICE_COUNT,
            channel: if gpio & 1 == 0 {
                PwmChannel::A
            } else {
                PwmChannel::B
            },
        })
    }

    /// Whether two GPIOs drive the A and B channels of the same slice
    pub fn is_pair(a: u8, b: u8) -> bool {
        match (Self::from_gpio(a), Self::from_gpio(b)) {
            (Some(a), Some(b)) => {
                a.slice == b.slice && a.channel == PwmChannel::A && b.channel == PwmChannel::B
            }
            _ => false,
        }
    }
}
