//! 1-bit frame buffer sized to the OLED.
//!
//! Pixels are stored row-major, MSB first, one bit per pixel - the same
//! layout `ImageRaw<BinaryColor>` reads, so a finished frame can be blitted
//! onto the SSD1306 buffer in one draw call.

use core::convert::Infallible;

use embedded_graphics::image::ImageRaw;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

const ROW_BYTES: usize = (DISPLAY_WIDTH as usize + 7) / 8;

/// Size of a full frame in bytes.
pub const RASTER_BYTES: usize = ROW_BYTES * DISPLAY_HEIGHT as usize;

/// Monochrome frame the size of the physical display.
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
    bits: [u8; RASTER_BYTES],
}

impl Raster {
    /// Create a blank (all-off) frame.
    pub const fn new() -> Self {
        Self {
            bits: [0; RASTER_BYTES],
        }
    }

    /// Turn every pixel off.
    pub fn reset(&mut self) {
        self.bits = [0; RASTER_BYTES];
    }

    /// Pixel state; anything outside the frame reads as off.
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        match Self::locate(x, y) {
            Some((byte, mask)) => self.bits[byte] & mask != 0,
            None => false,
        }
    }

    /// Set a pixel. Writes outside the frame are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if let Some((byte, mask)) = Self::locate(x, y) {
            if on {
                self.bits[byte] |= mask;
            } else {
                self.bits[byte] &= !mask;
            }
        }
    }

    /// Number of lit pixels.
    pub fn lit_count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// Lit pixels inside a rectangle given by inclusive corners.
    pub fn lit_in(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> u32 {
        let mut n = 0;
        for y in y0..=y1 {
            for x in x0..=x1 {
                if self.pixel(x, y) {
                    n += 1;
                }
            }
        }
        n
    }

    /// Raw frame bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// View the frame as an image that any `BinaryColor` target can draw.
    pub fn as_image(&self) -> ImageRaw<'_, BinaryColor> {
        ImageRaw::new(&self.bits, DISPLAY_WIDTH)
    }

    fn locate(x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= DISPLAY_WIDTH as i32 || y >= DISPLAY_HEIGHT as i32 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((y * ROW_BYTES + x / 8, 0x80 >> (x % 8)))
    }
}

impl Default for Raster {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Raster {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &DISPLAY_WIDTH)
            .field("height", &DISPLAY_HEIGHT)
            .field("lit", &self.lit_count())
            .finish()
    }
}

impl DrawTarget for Raster {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}

impl OriginDimensions for Raster {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

/// Draw target for a `size` sub-area of its parent whose top-left corner
/// sits at `origin`.
///
/// Coordinates are local to the window and anything outside `0..size` is
/// dropped, even where the parent could show it. `origin` may lie partly
/// off the parent; only the overlap is drawn.
pub struct Window<'a, T> {
    parent: &'a mut T,
    origin: Point,
    size: Size,
}

impl<'a, T> Window<'a, T> {
    pub fn new(parent: &'a mut T, origin: Point, size: Size) -> Self {
        Self {
            parent,
            origin,
            size,
        }
    }
}

impl<T> DrawTarget for Window<'_, T>
where
    T: DrawTarget,
{
    type Color = T::Color;
    type Error = T::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let w = self.size.width as i32;
        let h = self.size.height as i32;
        let origin = self.origin;
        self.parent.draw_iter(
            pixels
                .into_iter()
                .filter(|Pixel(p, _)| p.x >= 0 && p.y >= 0 && p.x < w && p.y < h)
                .map(|Pixel(p, c)| Pixel(p + origin, c)),
        )
    }
}

impl<T> OriginDimensions for Window<'_, T> {
    fn size(&self) -> Size {
        self.size
    }
}

/// Draw target that lays a virtual canvas onto its parent rotated 90°
/// counter-clockwise.
///
/// The virtual canvas is `size` wide and tall; its column `x` ends up on
/// parent row `origin.y + size.width - 1 - x` and its row `y` on parent
/// column `origin.x + y`. Used for vertical axis labels.
pub struct RotatedLeft<'a, T> {
    parent: &'a mut T,
    origin: Point,
    size: Size,
}

impl<'a, T> RotatedLeft<'a, T> {
    pub fn new(parent: &'a mut T, origin: Point, size: Size) -> Self {
        Self {
            parent,
            origin,
            size,
        }
    }
}

impl<T> DrawTarget for RotatedLeft<'_, T>
where
    T: DrawTarget,
{
    type Color = T::Color;
    type Error = T::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let w = self.size.width as i32;
        let h = self.size.height as i32;
        let origin = self.origin;
        self.parent.draw_iter(
            pixels
                .into_iter()
                .filter(|Pixel(p, _)| p.x >= 0 && p.y >= 0 && p.x < w && p.y < h)
                .map(|Pixel(p, c)| Pixel(Point::new(origin.x + p.y, origin.y + (w - 1 - p.x)), c)),
        )
    }
}

impl<T> OriginDimensions for RotatedLeft<'_, T> {
    fn size(&self) -> Size {
        self.size
    }
}

/// Font used for every on-screen label.
pub fn text_style(color: BinaryColor) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(color)
        .build()
}

/// Clear the frame and draw `message` centred, one line per `\n`.
pub fn render_message(raster: &mut Raster, message: &str) {
    raster.reset();

    let lines = message.lines().count().max(1) as i32;
    let line_height = FONT_6X10.character_size.height as i32;
    let top = (DISPLAY_HEIGHT as i32 - lines * line_height) / 2;

    let layout = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Top)
        .build();

    let _ = Text::with_text_style(
        message,
        Point::new(DISPLAY_WIDTH as i32 / 2, top),
        text_style(BinaryColor::On),
        layout,
    )
    .draw(raster);
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn new_raster_is_blank() {
        let raster = Raster::new();
        assert_eq!(raster.lit_count(), 0);
        assert_eq!(raster.as_bytes().len(), 1024);
    }

    #[test]
    fn pixels_are_msb_first_row_major() {
        let mut raster = Raster::new();
        raster.set_pixel(0, 0, true);
        raster.set_pixel(9, 1, true);
        assert_eq!(raster.as_bytes()[0], 0x80);
        assert_eq!(raster.as_bytes()[ROW_BYTES + 1], 0x40);
        raster.set_pixel(0, 0, false);
        assert_eq!(raster.as_bytes()[0], 0);
    }

    #[test]
    fn off_canvas_drawing_is_clipped() {
        let mut raster = Raster::new();
        let _ = Rectangle::new(Point::new(-10, -10), Size::new(20, 20))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut raster);
        assert_eq!(raster.lit_count(), 100);

        let _ = Rectangle::new(Point::new(500, 500), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut raster);
        assert_eq!(raster.lit_count(), 100);
        assert!(!raster.pixel(-1, 0));
        assert!(!raster.pixel(128, 0));
    }

    #[test]
    fn rotated_left_maps_columns_to_rows() {
        let mut raster = Raster::new();
        {
            let mut rotated = RotatedLeft::new(&mut raster, Point::new(0, 0), Size::new(64, 16));
            let _ = Pixel(Point::new(0, 0), BinaryColor::On).draw(&mut rotated);
            let _ = Pixel(Point::new(10, 3), BinaryColor::On).draw(&mut rotated);
            // Outside the virtual canvas.
            let _ = Pixel(Point::new(0, 16), BinaryColor::On).draw(&mut rotated);
        }
        assert!(raster.pixel(0, 63));
        assert!(raster.pixel(3, 53));
        assert_eq!(raster.lit_count(), 2);
    }

    #[test]
    fn window_translates_and_clips() {
        let mut raster = Raster::new();
        {
            let mut window = Window::new(&mut raster, Point::new(10, 20), Size::new(4, 3));
            let _ = Rectangle::new(Point::new(-5, -5), Size::new(50, 50))
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(&mut window);
        }
        assert_eq!(raster.lit_count(), 12);
        assert_eq!(raster.lit_in(10, 20, 13, 22), 12);
    }

    #[test]
    fn window_may_hang_off_the_parent() {
        let mut raster = Raster::new();
        {
            let mut window = Window::new(&mut raster, Point::new(0, -2), Size::new(3, 5));
            let _ = window.clear(BinaryColor::On);
        }
        // Only the three rows below the top edge land on the frame.
        assert_eq!(raster.lit_count(), 9);
        assert!(raster.pixel(0, 0));
        assert!(!raster.pixel(0, 3));
    }

    #[test]
    fn message_is_centered() {
        let mut raster = Raster::new();
        render_message(&mut raster, "Hi");
        assert!(raster.lit_count() > 0);
        // Nothing near the corners.
        assert_eq!(raster.lit_in(0, 0, 40, 63), 0);
        assert_eq!(raster.lit_in(88, 0, 127, 63), 0);
    }

    #[test]
    fn image_view_round_trips_through_draw() {
        let mut source = Raster::new();
        render_message(&mut source, "Welcome\nto your PhD hat");

        let mut copy = Raster::new();
        let _ = embedded_graphics::image::Image::new(&source.as_image(), Point::zero())
            .draw(&mut copy);
        assert_eq!(copy, source);
    }
}
