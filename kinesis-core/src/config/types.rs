//! Configuration section types
//!
//! Each section maps to one table in `device.toml`. `Default` reproduces the
//! reference board: 12-bit joystick, 2048-count PWM at ~10 kHz, 128x64 OLED.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display axis a cursor coordinate runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CursorAxis {
    /// Vertical, measured along the display height
    Row,
    /// Horizontal, measured along the display width
    Col,
}

/// PWM slice configuration shared by both LED channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PwmConfig {
    /// Counter wrap (TOP) value
    pub wrap: u16,
    /// Clock divider in 1/16 steps (8.4 fixed point, 97 = 6.0625)
    pub clk_div_x16: u16,
}

impl PwmConfig {
    /// Integer part of the clock divider
    pub const fn clk_div_int(&self) -> u16 {
        self.clk_div_x16 >> 4
    }

    /// Fractional part of the clock divider (sixteenths)
    pub const fn clk_div_frac(&self) -> u16 {
        self.clk_div_x16 & 0x0F
    }

    /// Resulting PWM frequency for a given system clock
    pub const fn frequency_hz(&self, sys_clk_hz: u32) -> u32 {
        let period_x16 = (self.wrap as u64 + 1) * self.clk_div_x16 as u64;
        if period_x16 == 0 {
            return 0;
        }
        ((sys_clk_hz as u64 * 16) / period_x16) as u32
    }
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self {
            wrap: 2048,
            // 6.1 truncated to the 4-bit hardware fraction
            clk_div_x16: 97,
        }
    }
}

/// Joystick brightness tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JoystickConfig {
    /// Distance from centre below which the LEDs stay off (raw units)
    pub deadzone: u16,
    /// Centre reference for the deadzone
    ///
    /// `None` uses the PWM wrap value, which is what the reference board
    /// ships with even though the ADC mid-scale is 2047.
    pub center: Option<u16>,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            deadzone: 150,
            center: None,
        }
    }
}

/// Allowed open interval for one cursor coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisConfig {
    /// Exclusive lower bound
    pub init_margin: u8,
    /// Exclusive upper bound
    pub max_margin: u8,
}

/// Cursor square configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CursorConfig {
    /// Side length of the square in pixels
    pub size: u8,
    /// Row interval (driven by the X axis)
    pub rows: AxisConfig,
    /// Column interval (driven by the Y axis)
    pub cols: AxisConfig,
}

impl CursorConfig {
    /// Interval for one axis
    pub const fn axis(&self, axis: CursorAxis) -> AxisConfig {
        match axis {
            CursorAxis::Row => self.rows,
            CursorAxis::Col => self.cols,
        }
    }

    /// Coordinate that centres the square on an axis of `axis_len` pixels
    pub const fn home(&self, axis_len: u8) -> u8 {
        (axis_len / 2).saturating_sub(self.size / 2)
    }
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            size: 8,
            rows: AxisConfig {
                init_margin: 4,
                max_margin: 56,
            },
            cols: AxisConfig {
                init_margin: 4,
                max_margin: 116,
            },
        }
    }
}

/// Rectangle in display pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RectConfig {
    pub left: u8,
    pub top: u8,
    pub width: u8,
    pub height: u8,
}

/// Display geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Width in pixels
    pub width: u8,
    /// Height in pixels
    pub height: u8,
    /// 7-bit I2C address of the controller
    pub address: u8,
    /// Border outline toggled by the select button
    pub border: RectConfig,
}

impl DisplayConfig {
    /// Length of the display along a cursor axis
    pub const fn axis_len(&self, axis: CursorAxis) -> u8 {
        match axis {
            CursorAxis::Row => self.height,
            CursorAxis::Col => self.width,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
            address: 0x3C,
            border: RectConfig {
                left: 3,
                top: 3,
                width: 122,
                height: 60,
            },
        }
    }
}

/// Push-button configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonConfig {
    /// Edges closer than this to the last accepted one are discarded
    pub refractory_ms: u32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self { refractory_ms: 200 }
    }
}

/// When the render loop redraws the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RedrawPolicy {
    /// Erase, draw and flush on every iteration
    #[default]
    Always,
    /// Only when the cursor moved or the border changed
    OnChange,
}

/// Render loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderConfig {
    pub redraw: RedrawPolicy,
}
