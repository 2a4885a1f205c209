//! Complete device configuration
//!
//! Groups every section and checks the cross-section constraints the
//! pipeline relies on (the cursor must fit inside the display, the deadzone
//! must fit inside the PWM range, and so on).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{
    ButtonConfig, CursorAxis, CursorConfig, DisplayConfig, JoystickConfig, PwmConfig,
    RenderConfig,
};

/// Largest clock divider the 8.4 fixed-point register holds
pub const MAX_CLK_DIV_X16: u16 = 0x0FFF;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// PWM wrap value is zero
    ZeroWrap,
    /// Clock divider below 1.0 or above 255 + 15/16
    DividerOutOfRange,
    /// Deadzone is as wide as the whole PWM range
    DeadzoneTooWide,
    /// Cursor interval on an axis admits no coordinate
    EmptyInterior(CursorAxis),
    /// Square placed at the interval edge would leave the display
    CursorExceedsDisplay(CursorAxis),
    /// Starting position is outside the interval
    HomeOutsideInterior(CursorAxis),
    /// Axis is longer than the raw input range, so the scale factor is zero
    ZeroDivisor(CursorAxis),
    /// Border rectangle does not fit the display
    BorderExceedsDisplay,
    /// Refractory window of zero would accept every bounce
    ZeroRefractory,
    /// Binary encoding failed (buffer too small)
    Encode,
    /// Binary decoding failed
    Decode,
}

/// Full device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceConfig {
    pub pwm: PwmConfig,
    pub joystick: JoystickConfig,
    pub cursor: CursorConfig,
    pub display: DisplayConfig,
    pub buttons: ButtonConfig,
    #[cfg_attr(feature = "serde", serde(default))]
    pub render: RenderConfig,
}

impl DeviceConfig {
    /// Centre used by the brightness deadzone
    pub fn brightness_center(&self) -> u16 {
        self.joystick.center.unwrap_or(self.pwm.wrap)
    }

    /// Integer scale factor from raw samples to coordinates on `axis`
    ///
    /// `(2 * wrap) / axis_len`, rounded down. Zero when the axis is longer
    /// than the raw range.
    pub fn divisor(&self, axis: CursorAxis) -> u16 {
        let len = self.display.axis_len(axis) as u32;
        if len == 0 {
            return 0;
        }
        let divisor = (2 * self.pwm.wrap as u32) / len;
        divisor.min(u16::MAX as u32) as u16
    }

    /// Check every constraint the pipeline relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pwm.wrap == 0 {
            return Err(ConfigError::ZeroWrap);
        }
        if self.pwm.clk_div_x16 < 16 || self.pwm.clk_div_x16 > MAX_CLK_DIV_X16 {
            return Err(ConfigError::DividerOutOfRange);
        }
        if self.joystick.deadzone >= self.pwm.wrap {
            return Err(ConfigError::DeadzoneTooWide);
        }

        for axis in [CursorAxis::Row, CursorAxis::Col] {
            self.validate_axis(axis)?;
        }

        let border = &self.display.border;
        if border.left as u16 + border.width as u16 > self.display.width as u16
            || border.top as u16 + border.height as u16 > self.display.height as u16
        {
            return Err(ConfigError::BorderExceedsDisplay);
        }

        if self.buttons.refractory_ms == 0 {
            return Err(ConfigError::ZeroRefractory);
        }

        Ok(())
    }

    fn validate_axis(&self, axis: CursorAxis) -> Result<(), ConfigError> {
        let interval = self.cursor.axis(axis);
        let len = self.display.axis_len(axis);

        // Open interval (init, max) needs at least one integer inside
        if interval.max_margin <= interval.init_margin.saturating_add(1) {
            return Err(ConfigError::EmptyInterior(axis));
        }
        if interval.max_margin as u16 + self.cursor.size as u16 > len as u16 {
            return Err(ConfigError::CursorExceedsDisplay(axis));
        }

        let home = self.cursor.home(len);
        if home <= interval.init_margin || home >= interval.max_margin {
            return Err(ConfigError::HomeOutsideInterior(axis));
        }

        if self.divisor(axis) == 0 {
            return Err(ConfigError::ZeroDivisor(axis));
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
impl DeviceConfig {
    /// Serialize to postcard binary into `buf`
    pub fn encode<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Encode)
    }

    /// Deserialize from postcard binary and validate
    pub fn decode(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)?;
        config.validate()?;
        Ok(config)
    }
}
