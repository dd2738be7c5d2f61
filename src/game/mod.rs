//! Puzzle mini-games shown on the OLED.
//!
//! ## Games
//!
//! - **Frequency**: tune three qubits until q1/q2 hybridize and q3 lands on
//!   the dark state.
//! - **Noise**: shape a 28-point power profile to match a target spectrum.
//!
//! Both games own a [`PlotCanvas`] and re-render it in full after every
//! value edit; marker moves change nothing on screen.

pub mod canvas;
pub mod frequency;
pub mod noise;
pub mod track;


pub use canvas::{PlotCanvas, PlotGeometry};
pub use frequency::FrequencyGame;
pub use noise::NoiseGame;
pub use track::ValueTrack;

use crate::raster::Raster;
use crate::ui::leds::LedFrame;

/// Discrete edit a player can make in one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Select the next value (wraps).
    NextMarker,
    /// Select the previous value (wraps).
    PrevMarker,
    /// Move the selected bar up the screen (value - step).
    Raise,
    /// Move the selected bar down the screen (value + step).
    Lower,
}

impl Command {
    /// `true` for commands that edit a value (and therefore re-render).
    pub fn edits_value(self) -> bool {
        matches!(self, Command::Raise | Command::Lower)
    }
}

/// What the stage runner needs from a mini-game.
pub trait Puzzle {
    fn apply(&mut self, command: Command);

    /// Latest composed frame.
    fn raster(&self) -> &Raster;

    fn is_solved(&self) -> bool;

    /// LED colours to show after a value edit, if the game drives the strip.
    fn led_frame(&self) -> Option<LedFrame>;
}
