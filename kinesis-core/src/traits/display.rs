//! Display sink trait
//!
//! The render loop only ever draws axis-aligned rectangles and flushes. Pixel
//! buffer layout and the controller protocol belong to the implementation.

use crate::config::RectConfig;

/// Pixel value on a monochrome display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelColor {
    On,
    Off,
}

impl From<bool> for PixelColor {
    fn from(on: bool) -> Self {
        if on {
            PixelColor::On
        } else {
            PixelColor::Off
        }
    }
}

/// Rectangle drawing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fill {
    /// One-pixel outline
    Outline,
    /// Every pixel inside
    Solid,
}

/// Rectangle in display pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub left: u8,
    pub top: u8,
    pub width: u8,
    pub height: u8,
}

impl Rect {
    pub const fn new(left: u8, top: u8, width: u8, height: u8) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Square of side `size` with its top-left corner at (`row`, `col`)
    pub const fn square(row: u8, col: u8, size: u8) -> Self {
        Self::new(col, row, size, size)
    }
}

impl From<RectConfig> for Rect {
    fn from(rect: RectConfig) -> Self {
        Self::new(rect.left, rect.top, rect.width, rect.height)
    }
}

/// Monochrome display the render loop draws to
///
/// Drawing goes to a frame buffer; nothing reaches the panel until
/// [`DisplaySink::flush`]. Both calls are infallible from the caller's point
/// of view: implementations absorb transport errors, and the next flush
/// sends the whole frame again.
pub trait DisplaySink {
    /// Draw a rectangle into the frame buffer
    fn draw_rectangle(&mut self, rect: Rect, color: PixelColor, fill: Fill);

    /// Send the frame buffer to the panel
    fn flush(&mut self);
}
