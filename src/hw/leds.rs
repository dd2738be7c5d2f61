//! SK6812 RGBW strip.
//!
//! The game core speaks RGB. The strip wants a fourth (white) channel,
//! which stays dark.

use smart_leds::{SmartLedsWrite, White, RGB8, RGBW};

/// Presents an RGBW driver as an RGB one.
pub struct Rgbw<W>(pub W);

impl<W> SmartLedsWrite for Rgbw<W>
where
    W: SmartLedsWrite<Color = RGBW<u8>>,
{
    type Error = W::Error;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.0.write(iterator.into_iter().map(|c| {
            let c: RGB8 = c.into();
            RGBW {
                r: c.r,
                g: c.g,
                b: c.b,
                a: White(0),
            }
        }))
    }
}
