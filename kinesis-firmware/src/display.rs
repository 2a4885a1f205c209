//! SSD1306 OLED wired to the render loop
//!
//! Wraps the buffered `ssd1306` driver so it can implement the display
//! crate's [`Flush`] trait.

use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use kinesis_display::{Flush, FlushError};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

type Driver = Ssd1306<
    I2CInterface<I2c<'static, I2C1, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// 128x64 SSD1306 on I2C1
pub struct Oled(Driver);

impl Oled {
    /// Initialize the controller and blank the panel
    pub fn new(i2c: I2c<'static, I2C1, Blocking>, address: u8) -> Result<Self, FlushError> {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let mut driver = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        driver.init().map_err(|_| FlushError::Communication)?;
        driver.clear_buffer();
        driver.flush().map_err(|_| FlushError::Communication)?;

        Ok(Self(driver))
    }
}

impl OriginDimensions for Oled {
    fn size(&self) -> Size {
        self.0.size()
    }
}

impl DrawTarget for Oled {
    type Color = BinaryColor;
    type Error = <Driver as DrawTarget>::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.0.draw_iter(pixels)
    }
}

impl Flush for Oled {
    fn flush(&mut self) -> Result<(), FlushError> {
        self.0.flush().map_err(|_| FlushError::Communication)
    }
}
