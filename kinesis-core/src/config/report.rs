//! Build-time error reports
//!
//! Host-only helpers the firmware build script uses to explain why
//! `device.toml` was rejected.

use std::format;
use std::string::{String, ToString};
use std::vec::Vec;

use super::{ConfigError, DeviceConfig};

/// Inner width of the error box
pub const BOX_WIDTH: usize = 64;

/// Human-readable hint for a validation failure
pub fn describe(config: &DeviceConfig, error: ConfigError) -> String {
    use ConfigError::*;

    match error {
        ZeroWrap => "pwm.wrap must be greater than zero".to_string(),
        DividerOutOfRange => format!(
            "pwm.clk_div_x16 = {} is outside 16..=4095 (1.0 to 255.9375)",
            config.pwm.clk_div_x16
        ),
        DeadzoneTooWide => format!(
            "joystick.deadzone = {} must be below pwm.wrap = {}",
            config.joystick.deadzone, config.pwm.wrap
        ),
        EmptyInterior(axis) => format!("cursor {:?} interval has no interior", axis),
        CursorExceedsDisplay(axis) => {
            format!("cursor square leaves the display along {:?}", axis)
        }
        HomeOutsideInterior(axis) => {
            format!("display centre lies outside the cursor {:?} interval", axis)
        }
        ZeroDivisor(axis) => format!("display is longer than the raw range along {:?}", axis),
        BorderExceedsDisplay => "display.border does not fit the display".to_string(),
        ZeroRefractory => "buttons.refractory_ms must be greater than zero".to_string(),
        Encode | Decode => "encoding error".to_string(),
    }
}

/// Format error message lines with box drawing
///
/// Lines longer than the box are cut on a character boundary and end in
/// `...`.
pub fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > BOX_WIDTH {
                let head: String = line.chars().take(BOX_WIDTH - 3).collect();
                format!("{}...", head)
            } else {
                line.to_string()
            };
            format!("║  {:<width$} ║", truncated, width = BOX_WIDTH)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CursorAxis;

    #[test]
    fn test_short_line_is_padded() {
        let boxed = format_error_lines("bad value");
        assert!(boxed.starts_with("║  bad value "));
        assert!(boxed.ends_with(" ║"));
        // Border, two spaces, padded text, space, border
        assert_eq!(boxed.chars().count(), BOX_WIDTH + 5);
    }

    #[test]
    fn test_long_line_is_truncated() {
        let line = "x".repeat(100);
        let boxed = format_error_lines(&line);
        assert!(boxed.contains(&format!("{}...", "x".repeat(61))));
        assert_eq!(boxed.chars().count(), BOX_WIDTH + 5);
    }

    #[test]
    fn test_multibyte_at_cut_point() {
        // 'é' is two bytes and straddles byte 61
        let line = format!("{}é{}", "a".repeat(60), "b".repeat(20));
        let boxed = format_error_lines(&line);
        assert!(boxed.contains(&format!("{}é...", "a".repeat(60))));
        assert_eq!(boxed.chars().count(), BOX_WIDTH + 5);

        let wide = "│".repeat(80);
        let boxed = format_error_lines(&wide);
        assert_eq!(boxed.chars().count(), BOX_WIDTH + 5);
    }

    #[test]
    fn test_each_line_boxed() {
        let boxed = format_error_lines("first\nsecond");
        let lines: Vec<_> = boxed.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("║  second"));
    }

    #[test]
    fn test_describe_names_the_field() {
        let mut config = DeviceConfig::default();
        config.joystick.deadzone = 4000;
        assert_eq!(
            describe(&config, ConfigError::DeadzoneTooWide),
            "joystick.deadzone = 4000 must be below pwm.wrap = 2048"
        );
        assert_eq!(
            describe(&config, ConfigError::EmptyInterior(CursorAxis::Row)),
            "cursor Row interval has no interior"
        );
    }
}
