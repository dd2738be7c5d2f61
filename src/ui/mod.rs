//! User interface subsystem - OLED, LED strip and the input panel.
//!
//! The game core never touches hardware. It talks to three collaborators
//! that the binary implements on real peripherals and the tests mock:
//!
//! - **Display**: takes a finished [`Raster`] and presents it.
//! - **LEDs**: addressable strip, set-then-flush.
//! - **Input**: one level-sampled snapshot of every button and contact
//!   per tick.

pub mod input_logic;
pub mod leds;

use crate::raster::Raster;
use smart_leds::RGB8;

/// Anything that can present a monochrome frame.
pub trait RasterSink {
    type Error;

    /// Replace the visible frame with `raster`.
    fn show(&mut self, raster: &Raster) -> Result<(), Self::Error>;
}

/// Addressable LED strip.
pub trait LedSink {
    type Error;

    /// Stage a colour; takes effect on the next [`flush`](Self::flush).
    /// Indices past the end of the strip are ignored.
    fn set(&mut self, index: usize, color: RGB8);

    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Source of panel snapshots.
pub trait InputSource {
    fn sample(&mut self) -> PanelState;
}

/// Snapshot of the panel, already decoded to "active = true" whatever the
/// wiring polarity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Button "#5" - start / first bypass button.
    pub a: bool,
    /// Button "#6" - second bypass button.
    pub b: bool,
    /// Flip-chip jumper seated.
    pub flip_chip: bool,
    /// Fridge valve contact closed.
    pub fridge_valve: bool,
    /// Libqudev output lines, each active when it reads 0.
    pub libqudev: [bool; 2],
}

impl PanelState {
    /// Both bypass buttons held: operator override, skip the stage.
    pub fn bypass(&self) -> bool {
        self.a && self.b
    }
}
