//! Joystick deflection to LED brightness
//!
//! Each axis drives one LED channel. The duty value is the raw distance from
//! the centre reference, with a deadzone around the centre that keeps the
//! LED off while the stick rests.
//!
//! The reference board uses the PWM wrap value (2048) as the centre, not the
//! ADC mid-scale (2047). The off-by-one is inside the deadzone, so it is
//! invisible in practice, but the formula is kept literal.

use crate::config::DeviceConfig;
use crate::input::SampleReading;

/// Duty values for both LED channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BrightnessLevel {
    /// Channel A duty (driven by X)
    pub a: u16,
    /// Channel B duty (driven by Y)
    pub b: u16,
}

/// Deadzone brightness mapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessMapper {
    center: u16,
    tolerance: u16,
}

impl BrightnessMapper {
    /// Create a mapper with an explicit centre and deadzone
    pub const fn new(center: u16, tolerance: u16) -> Self {
        Self { center, tolerance }
    }

    /// Create a mapper from the device configuration
    pub fn from_config(config: &DeviceConfig) -> Self {
        Self::new(config.brightness_center(), config.joystick.deadzone)
    }

    /// Map a sample to duty values for both channels
    pub fn map(&self, sample: SampleReading) -> BrightnessLevel {
        BrightnessLevel {
            a: self.axis(sample.x),
            b: self.axis(sample.y),
        }
    }

    /// Map one raw axis value
    ///
    /// Not re-clamped to the wrap value; the PWM counter treats anything at
    /// or above wrap as fully on.
    pub fn axis(&self, raw: u16) -> u16 {
        let distance = raw.abs_diff(self.center);
        if distance < self.tolerance {
            0
        } else {
            distance
        }
    }

    pub fn center(&self) -> u16 {
        self.center
    }

    pub fn tolerance(&self) -> u16 {
        self.tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference() -> BrightnessMapper {
        BrightnessMapper::from_config(&DeviceConfig::default())
    }

    #[test]
    fn test_reference_constants() {
        let mapper = reference();
        assert_eq!(mapper.center(), 2048);
        assert_eq!(mapper.tolerance(), 150);
    }

    #[test]
    fn test_centre_is_off() {
        let mapper = reference();
        assert_eq!(mapper.map(SampleReading::new(2048, 2048)), BrightnessLevel { a: 0, b: 0 });
    }

    #[test]
    fn test_deadzone_edges() {
        let mapper = reference();
        // |1899 - 2048| = 149 is inside, 150 is not
        assert_eq!(mapper.axis(1899), 0);
        assert_eq!(mapper.axis(1898), 150);
        assert_eq!(mapper.axis(2197), 0);
        assert_eq!(mapper.axis(2198), 150);
    }

    #[test]
    fn test_far_from_centre() {
        let mapper = reference();
        assert_eq!(mapper.axis(500), 1548);
        assert_eq!(mapper.map(SampleReading::new(500, 2048)), BrightnessLevel { a: 1548, b: 0 });
    }

    #[test]
    fn test_quarter_scale_is_not_centred() {
        // Raw 1024 is a quarter of the 12-bit range, far outside the deadzone
        assert_eq!(reference().axis(1024), 1024);
    }

    #[test]
    fn test_centre_follows_wrap_not_adc_midscale() {
        let mapper = reference();
        // ADC mid-scale is 2047; the mapper still measures from 2048
        assert_eq!(mapper.axis(2047), 0);
        assert_eq!(mapper.axis(0), 2048);
        assert_eq!(mapper.axis(4095), 2047);
    }

    #[test]
    fn test_recalibrated_centre() {
        let mut config = DeviceConfig::default();
        config.joystick.center = Some(2047);
        let mapper = BrightnessMapper::from_config(&config);
        assert_eq!(mapper.axis(0), 2047);
        assert_eq!(mapper.axis(4095), 2048);
    }

    proptest! {
        #[test]
        fn prop_inside_deadzone_is_off(offset in 0u16..150, above in any::<bool>()) {
            let raw = if above { 2048 + offset } else { 2048 - offset };
            prop_assert_eq!(reference().axis(raw), 0);
        }

        #[test]
        fn prop_outside_deadzone_is_distance(raw in 0u16..=4095) {
            let mapper = reference();
            prop_assume!(raw.abs_diff(2048) >= 150);
            prop_assert_eq!(mapper.axis(raw), raw.abs_diff(2048));
        }

        #[test]
        fn prop_never_exceeds_wrap(x in 0u16..=4095, y in 0u16..=4095) {
            let level = reference().map(SampleReading::new(x, y));
            prop_assert!(level.a <= 2048);
            prop_assert!(level.b <= 2048);
        }
    }
}
