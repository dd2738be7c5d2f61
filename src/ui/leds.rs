//! LED strip labels, frames and a `smart-leds` backed sink.

use smart_leds::{brightness, SmartLedsWrite, RGB8};

use super::LedSink;
use crate::config::{
    LED_INDEX_BRIGHT, LED_INDEX_DARK, LED_INDEX_Q1, LED_INDEX_Q2, LED_INDEX_Q3,
};

const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Named positions on the hat's strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedLabel {
    Q1,
    Q2,
    Q3,
    Dark,
    Bright,
}

impl LedLabel {
    pub const ALL: [LedLabel; 5] = [
        LedLabel::Q1,
        LedLabel::Q2,
        LedLabel::Q3,
        LedLabel::Dark,
        LedLabel::Bright,
    ];

    /// Qubit LEDs in qubit order.
    pub const QUBITS: [LedLabel; 3] = [LedLabel::Q1, LedLabel::Q2, LedLabel::Q3];

    /// Pixel index on the strip.
    pub const fn index(self) -> usize {
        match self {
            LedLabel::Q1 => LED_INDEX_Q1,
            LedLabel::Q2 => LED_INDEX_Q2,
            LedLabel::Q3 => LED_INDEX_Q3,
            LedLabel::Dark => LED_INDEX_DARK,
            LedLabel::Bright => LED_INDEX_BRIGHT,
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// One colour per labelled LED.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedFrame {
    colors: [RGB8; LedLabel::ALL.len()],
}

impl LedFrame {
    /// Every LED off.
    pub const fn off() -> Self {
        Self {
            colors: [OFF; LedLabel::ALL.len()],
        }
    }

    pub fn set(&mut self, label: LedLabel, color: RGB8) {
        self.colors[label.slot()] = color;
    }

    pub fn get(&self, label: LedLabel) -> RGB8 {
        self.colors[label.slot()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (LedLabel, RGB8)> + '_ {
        LedLabel::ALL.iter().map(move |&label| (label, self.get(label)))
    }
}

impl Default for LedFrame {
    fn default() -> Self {
        Self::off()
    }
}

/// Write every labelled colour to `sink` and flush it.
pub fn push_frame<L: LedSink>(sink: &mut L, frame: &LedFrame) -> Result<(), L::Error> {
    for (label, color) in frame.iter() {
        sink.set(label.index(), color);
    }
    sink.flush()
}

/// Buffered strip of `N` pixels in front of any `smart-leds` driver.
///
/// Colours are staged by [`LedSink::set`] and written out, scaled by the
/// global brightness, on [`LedSink::flush`].
pub struct StripSink<W, const N: usize> {
    writer: W,
    pixels: [RGB8; N],
    brightness: u8,
}

impl<W, const N: usize> StripSink<W, N>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    pub fn new(writer: W, brightness: u8) -> Self {
        Self {
            writer,
            pixels: [OFF; N],
            brightness,
        }
    }

    /// Staged colour (before brightness scaling).
    pub fn pixel(&self, index: usize) -> Option<RGB8> {
        self.pixels.get(index).copied()
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W, const N: usize> LedSink for StripSink<W, N>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    type Error = W::Error;

    fn set(&mut self, index: usize, color: RGB8) {
        match self.pixels.get_mut(index) {
            Some(p) => *p = color,
            None => warn!("LED index {} past end of strip", index),
        }
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.writer
            .write(brightness(self.pixels.iter().copied(), self.brightness))
    }
}
