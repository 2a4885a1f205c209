//! Joystick position to cursor coordinates
//!
//! Each axis is scaled by an integer divisor derived from the raw range and
//! the display length on that axis. The X axis drives the row (display
//! height), the Y axis drives the column (display width).
//!
//! Clamp-and-hold: a scaled value is accepted only if it lies strictly
//! inside the axis interval, otherwise the previous coordinate is kept. The
//! cursor therefore stops short of the border instead of sticking to it.

use crate::config::{CursorAxis, DeviceConfig};
use crate::input::SampleReading;

/// Cursor position in display pixels (top-left corner of the square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorPosition {
    pub row: u8,
    pub col: u8,
}

impl CursorPosition {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Scaling and bounds for one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisLimits {
    /// Raw units per pixel, never zero
    pub divisor: u16,
    /// Exclusive lower bound
    pub init_margin: u8,
    /// Exclusive upper bound
    pub max_margin: u8,
}

impl AxisLimits {
    pub const fn new(divisor: u16, init_margin: u8, max_margin: u8) -> Self {
        Self {
            divisor: if divisor == 0 { 1 } else { divisor },
            init_margin,
            max_margin,
        }
    }

    /// Scale a raw value to a pixel coordinate
    pub const fn scale(&self, raw: u16) -> u16 {
        raw / self.divisor
    }

    /// Check if a coordinate lies strictly inside the interval
    pub const fn contains(&self, coord: u16) -> bool {
        coord > self.init_margin as u16 && coord < self.max_margin as u16
    }

    /// New coordinate for `raw`, or `previous` if it falls outside
    pub const fn apply(&self, raw: u16, previous: u8) -> u8 {
        let scaled = self.scale(raw);
        if self.contains(scaled) {
            // Inside the interval, so below max_margin: fits u8
            scaled as u8
        } else {
            previous
        }
    }
}

/// Clamp-and-hold cursor mapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorMapper {
    rows: AxisLimits,
    cols: AxisLimits,
    home: CursorPosition,
}

impl CursorMapper {
    /// Create a mapper from explicit limits
    pub const fn new(rows: AxisLimits, cols: AxisLimits, home: CursorPosition) -> Self {
        Self { rows, cols, home }
    }

    /// Create a mapper from the device configuration
    ///
    /// The configuration must have passed [`DeviceConfig::validate`].
    pub fn from_config(config: &DeviceConfig) -> Self {
        let limits = |axis| {
            let interval = config.cursor.axis(axis);
            AxisLimits::new(
                config.divisor(axis),
                interval.init_margin,
                interval.max_margin,
            )
        };

        Self {
            rows: limits(CursorAxis::Row),
            cols: limits(CursorAxis::Col),
            home: CursorPosition {
                row: config.cursor.home(config.display.height),
                col: config.cursor.home(config.display.width),
            },
        }
    }

    /// Map a sample to a position, holding `previous` per rejected axis
    pub fn map(&self, sample: SampleReading, previous: CursorPosition) -> CursorPosition {
        CursorPosition {
            row: self.rows.apply(sample.x, previous.row),
            col: self.cols.apply(sample.y, previous.col),
        }
    }

    /// Starting position (display centre)
    pub fn home(&self) -> CursorPosition {
        self.home
    }

    /// Limits for one axis
    pub fn limits(&self, axis: CursorAxis) -> AxisLimits {
        match axis {
            CursorAxis::Row => self.rows,
            CursorAxis::Col => self.cols,
        }
    }

    /// Check if a position lies inside both intervals
    pub fn is_interior(&self, position: CursorPosition) -> bool {
        self.rows.contains(position.row as u16) && self.cols.contains(position.col as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference() -> CursorMapper {
        CursorMapper::from_config(&DeviceConfig::default())
    }

    #[test]
    fn test_reference_limits() {
        let mapper = reference();
        assert_eq!(mapper.limits(CursorAxis::Row), AxisLimits::new(64, 4, 56));
        assert_eq!(mapper.limits(CursorAxis::Col), AxisLimits::new(32, 4, 116));
        assert_eq!(mapper.home(), CursorPosition::new(28, 60));
        assert!(mapper.is_interior(mapper.home()));
    }

    #[test]
    fn test_centred_stick() {
        let mapper = reference();
        let pos = mapper.map(SampleReading::new(2048, 2048), mapper.home());
        assert_eq!(pos, CursorPosition::new(32, 64));
    }

    #[test]
    fn test_rounds_down() {
        let mapper = reference();
        // 639 / 64 = 9, 671 / 32 = 20
        let pos = mapper.map(SampleReading::new(639, 671), mapper.home());
        assert_eq!(pos, CursorPosition::new(9, 20));
    }

    #[test]
    fn test_bounds_are_exclusive() {
        let mapper = reference();
        let home = mapper.home();

        // 320 / 64 = 5 (first valid row), 256 / 64 = 4 (on the bound)
        assert_eq!(mapper.map(SampleReading::new(320, 2048), home).row, 5);
        assert_eq!(mapper.map(SampleReading::new(256, 2048), home).row, home.row);

        // 3583 / 64 = 55 (last valid row), 3584 / 64 = 56 (on the bound)
        assert_eq!(mapper.map(SampleReading::new(3583, 2048), home).row, 55);
        assert_eq!(mapper.map(SampleReading::new(3584, 2048), home).row, home.row);

        // 3711 / 32 = 115 (last valid col), 3712 / 32 = 116 (on the bound)
        assert_eq!(mapper.map(SampleReading::new(2048, 3711), home).col, 115);
        assert_eq!(mapper.map(SampleReading::new(2048, 3712), home).col, home.col);
    }

    #[test]
    fn test_axes_are_independent() {
        let mapper = reference();
        let previous = CursorPosition::new(10, 10);

        // X at zero is rejected, Y is valid
        let pos = mapper.map(SampleReading::new(0, 1600), previous);
        assert_eq!(pos, CursorPosition::new(10, 50));

        // X valid, Y at full scale is rejected (4095 / 32 = 127)
        let pos = mapper.map(SampleReading::new(1600, 4095), previous);
        assert_eq!(pos, CursorPosition::new(25, 10));
    }

    #[test]
    fn test_hold_is_idempotent() {
        let mapper = reference();
        let start = CursorPosition::new(40, 90);
        let mut pos = start;
        for _ in 0..10 {
            pos = mapper.map(SampleReading::new(4095, 0), pos);
        }
        assert_eq!(pos, start);
    }

    #[test]
    fn test_zero_divisor_is_guarded() {
        let limits = AxisLimits::new(0, 4, 56);
        assert_eq!(limits.divisor, 1);
        assert_eq!(limits.apply(10, 28), 10);
    }

    proptest! {
        #[test]
        fn prop_rejected_axis_holds(x in 0u16..=4095, y in 0u16..=4095, row in 5u8..56, col in 5u8..116) {
            let mapper = reference();
            let previous = CursorPosition::new(row, col);
            let pos = mapper.map(SampleReading::new(x, y), previous);

            let row_scaled = x / 64;
            let col_scaled = y / 32;
            if row_scaled <= 4 || row_scaled >= 56 {
                prop_assert_eq!(pos.row, previous.row);
            } else {
                prop_assert_eq!(pos.row as u16, row_scaled);
            }
            if col_scaled <= 4 || col_scaled >= 116 {
                prop_assert_eq!(pos.col, previous.col);
            } else {
                prop_assert_eq!(pos.col as u16, col_scaled);
            }
        }

        #[test]
        fn prop_stays_interior(samples in proptest::collection::vec((0u16..=4095, 0u16..=4095), 1..64)) {
            let mapper = reference();
            let mut pos = mapper.home();
            for (x, y) in samples {
                pos = mapper.map(SampleReading::new(x, y), pos);
                prop_assert!(mapper.is_interior(pos));
            }
        }
    }
}
