//! SSD1306 OLED display wrapper.

use embedded_graphics::image::Image;
use embedded_graphics::prelude::*;
use phdhat::ui::RasterSink;
use phdhat::{Error, Raster};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// The hat's OLED. Each [`RasterSink::show`] replaces the whole screen.
pub struct Oled<I2C> {
    display: Display<I2C>,
}

impl<I2C> Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the SSD1306 display and clear the screen.
    pub fn new(i2c: I2C) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        if display.init().is_err() {
            defmt::warn!("OLED init failed");
        }
        display.clear_buffer();
        let _ = display.flush();
        Self { display }
    }
}

impl<I2C> RasterSink for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = Error;

    fn show(&mut self, raster: &Raster) -> Result<(), Self::Error> {
        self.display.clear_buffer();
        Image::new(&raster.as_image(), Point::zero())
            .draw(&mut self.display)
            .map_err(|_| Error::Display)?;
        self.display.flush().map_err(|_| Error::Display)
    }
}
