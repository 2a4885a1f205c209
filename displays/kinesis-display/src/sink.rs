//! [`DisplaySink`] over an embedded-graphics draw target

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment,
};
use kinesis_core::config::DisplayConfig;
use kinesis_core::traits::{DisplaySink, Fill, PixelColor, Rect};

use crate::backend::Flush;

/// Panel size differs from the configured display size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SizeMismatch {
    /// `(width, height)` from the configuration
    pub configured: (u32, u32),
    /// `(width, height)` reported by the draw target
    pub panel: (u32, u32),
}

/// Display sink drawing into a buffered monochrome target
///
/// Errors never reach the render loop. Draw failures and flush failures are
/// counted separately; the frame buffer is kept, so the next successful
/// flush shows the full current frame.
pub struct GraphicsSink<D> {
    target: D,
    draw_failures: u32,
    flush_failures: u32,
}

impl<D> GraphicsSink<D>
where
    D: DrawTarget<Color = BinaryColor> + Flush,
{
    pub fn new(target: D) -> Self {
        Self {
            target,
            draw_failures: 0,
            flush_failures: 0,
        }
    }

    /// Wrap `target` after checking it matches the configured size
    ///
    /// The cursor scale factors come from the configured size, so a
    /// different panel would put the cursor in the wrong place.
    pub fn for_display(target: D, config: &DisplayConfig) -> Result<Self, SizeMismatch> {
        let size = target.bounding_box().size;
        let configured = (config.width as u32, config.height as u32);
        if (size.width, size.height) != configured {
            return Err(SizeMismatch {
                configured,
                panel: (size.width, size.height),
            });
        }
        Ok(Self::new(target))
    }

    /// Draws rejected by the target since startup
    pub fn draw_failures(&self) -> u32 {
        self.draw_failures
    }

    /// Flushes that failed since startup
    pub fn flush_failures(&self) -> u32 {
        self.flush_failures
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

fn style(color: PixelColor, fill: Fill) -> PrimitiveStyle<BinaryColor> {
    let color = match color {
        PixelColor::On => BinaryColor::On,
        PixelColor::Off => BinaryColor::Off,
    };
    match fill {
        Fill::Solid => PrimitiveStyle::with_fill(color),
        // Inside alignment keeps the outline within the rectangle bounds
        Fill::Outline => PrimitiveStyleBuilder::new()
            .stroke_color(color)
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build(),
    }
}

impl<D> DisplaySink for GraphicsSink<D>
where
    D: DrawTarget<Color = BinaryColor> + Flush,
{
    fn draw_rectangle(&mut self, rect: Rect, color: PixelColor, fill: Fill) {
        let shape = Rectangle::new(
            Point::new(rect.left as i32, rect.top as i32),
            Size::new(rect.width as u32, rect.height as u32),
        );
        if shape.into_styled(style(color, fill)).draw(&mut self.target).is_err() {
            self.draw_failures = self.draw_failures.wrapping_add(1);
        }
    }

    fn flush(&mut self) {
        if let Err(_e) = self.target.flush() {
            self.flush_failures = self.flush_failures.wrapping_add(1);
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Display flush failed: {} ({} so far)",
                _e,
                self.flush_failures
            );
        }
    }
}
