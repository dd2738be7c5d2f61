//! Qubit-frequency tuning game.
//!
//! Three qubits, each drawn as a bar in its own column. Bringing q1 and q2
//! to the same frequency hybridizes them: a dark state `|D>` appears one
//! offset below the shared frequency and a bright state `|B>` one offset
//! above. The puzzle is solved when q1 and q2 are resonant and q3 sits
//! exactly on the dark state.
//!
//! Screen convention: value 0 is the top of the chart, 1 the bottom.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use smart_leds::RGB8;

use super::canvas::{boxed, corners, outline, px, solid, PlotCanvas, PlotGeometry};
use super::track::ValueTrack;
use super::{Command, Puzzle};
use crate::color::{dim, value_to_color};
use crate::config::{
    BAR_THICKNESS, DARK_STATE_DIM, FREQ_POINTS, FREQ_SEED, HYBRIDIZATION_OFFSET, VALUE_STEP,
};
use crate::error::ConfigError;
use crate::raster::{text_style, Raster, Window};
use crate::ui::leds::{LedFrame, LedLabel};

const COLUMN_TITLES: [&str; FREQ_POINTS] = ["Qb1", "Qb2", "Qb3"];
const Y_LABEL: &str = "Freq. a.u.";

/// Horizontal inset of the state name inside its box.
const STATE_TEXT_INSET: i32 = 10;

/// Full white for the bright-state LED.
const BRIGHT_WHITE: RGB8 = RGB8 {
    r: 255,
    g: 255,
    b: 255,
};

pub struct FrequencyGame {
    track: ValueTrack<FREQ_POINTS>,
    hybridization: f64,
    canvas: PlotCanvas,
}

impl FrequencyGame {
    /// Game with the stock seeds and hybridization offset, already rendered.
    pub fn new(geometry: PlotGeometry) -> Result<Self, ConfigError> {
        Self::with_seed(geometry, FREQ_SEED, HYBRIDIZATION_OFFSET)
    }

    pub fn with_seed(
        geometry: PlotGeometry,
        seed: [f64; FREQ_POINTS],
        hybridization: f64,
    ) -> Result<Self, ConfigError> {
        let mut game = Self {
            track: ValueTrack::new(seed),
            hybridization,
            canvas: PlotCanvas::new(geometry, FREQ_POINTS)?,
        };
        game.render();
        Ok(game)
    }

    pub fn move_marker(&mut self, step: i32) {
        self.track.move_marker(step);
    }

    /// Step the selected qubit and redraw.
    pub fn adjust_value(&mut self, step: f64) {
        self.track.adjust_value(step);
        self.render();
    }

    pub fn values(&self) -> &[f64; FREQ_POINTS] {
        self.track.values()
    }

    pub fn marker(&self) -> usize {
        self.track.marker()
    }

    pub fn hybridization(&self) -> f64 {
        self.hybridization
    }

    pub fn raster(&self) -> &Raster {
        self.canvas.raster()
    }

    /// q1 and q2 are resonant.
    ///
    /// Exact comparison: both values live on the 0.1 grid, so resonance is
    /// reached exactly or not at all.
    pub fn is_hybridized(&self) -> bool {
        let v = self.track.values();
        v[0] == v[1]
    }

    /// q1/q2 resonant and q3 parked on the dark state.
    ///
    /// Like [`is_hybridized`](Self::is_hybridized) this is an exact float
    /// comparison. It holds for the stock seeds and offset; a seed/offset
    /// pair whose sum does not land on the 0.1 grid bit-for-bit makes the
    /// target unreachable.
    pub fn is_solved(&self) -> bool {
        let v = self.track.values();
        self.is_hybridized() && v[2] == v[1] + self.hybridization
    }

    /// Colours for the qubit LEDs, plus the dark/bright pair while
    /// hybridized. Everything else is off.
    pub fn led_frame(&self) -> LedFrame {
        let v = self.track.values();
        let mut frame = LedFrame::off();
        for (label, value) in LedLabel::QUBITS.iter().zip(v.iter()) {
            frame.set(*label, value_to_color(1.0 - value));
        }
        if self.is_hybridized() {
            frame.set(LedLabel::Bright, BRIGHT_WHITE);
            frame.set(
                LedLabel::Dark,
                dim(value_to_color(1.0 - (v[1] + self.hybridization)), DARK_STATE_DIM),
            );
        }
        frame
    }

    /// Redraw the whole frame from the current values.
    pub fn render(&mut self) {
        let g = *self.canvas.geometry();
        let values = *self.track.values();
        let hybridized = self.is_hybridized();

        self.canvas.clear();

        let title_pitch = (g.chart_width() / FREQ_POINTS as u32) as f64;
        for (i, title) in COLUMN_TITLES.iter().enumerate() {
            let x = g.margin as f64 + title_pitch / 4.0 + i as f64 * title_pitch;
            self.canvas.label(title, Point::new(px(x), 0));
        }
        self.canvas.y_label(Y_LABEL);

        let pw = g.chart_width() as f64;
        let ph = g.chart_height() as f64;
        let col = pw / FREQ_POINTS as f64;
        let bar = BAR_THICKNESS as f64;

        let mut chart = self.canvas.chart(Point::new(g.margin as i32, g.margin as i32));

        corners(&mut chart, 0.0, 0.0, pw, ph, outline());
        for i in 0..FREQ_POINTS {
            let x0 = i as f64 * col;
            corners(&mut chart, x0, 0.0, x0 + col, ph, outline());
        }

        for (i, v) in values.iter().enumerate() {
            let x0 = i as f64 * col;
            let y = v * ph;
            corners(&mut chart, x0, y, x0 + col, y + bar, solid());
        }

        if hybridized {
            let size = Size::new(px(col).max(0) as u32, (2 * BAR_THICKNESS) as u32);
            let x = px(col / 2.0);

            let dark = Point::new(x, px((values[0] + self.hybridization) * ph));
            state_box(&mut chart, dark, size, "|D>", BinaryColor::Off);

            let bright = Point::new(x, px((values[0] - self.hybridization) * ph));
            state_box(&mut chart, bright, size, "|B>", BinaryColor::On);
        }
    }
}

/// Labelled box that replaces whatever is underneath it. `fill` is the
/// interior; outline and text use the opposite colour. The box keeps its
/// origin when it hangs off the chart; only the overlap is drawn.
fn state_box<D>(target: &mut D, origin: Point, size: Size, text: &str, fill: BinaryColor)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let ink = fill.invert();
    let mut cell = Window::new(target, origin, size);
    let _ = cell.clear(BinaryColor::Off);
    corners(
        &mut cell,
        0.0,
        0.0,
        size.width as f64,
        size.height as f64,
        boxed(fill, ink),
    );
    let _ = Text::with_baseline(
        text,
        Point::new(STATE_TEXT_INSET, 0),
        text_style(ink),
        Baseline::Top,
    )
    .draw(&mut cell);
}

impl Puzzle for FrequencyGame {
    fn apply(&mut self, command: Command) {
        match command {
            Command::NextMarker => self.move_marker(1),
            Command::PrevMarker => self.move_marker(-1),
            Command::Raise => self.adjust_value(-VALUE_STEP),
            Command::Lower => self.adjust_value(VALUE_STEP),
        }
    }

    fn raster(&self) -> &Raster {
        self.canvas.raster()
    }

    fn is_solved(&self) -> bool {
        FrequencyGame::is_solved(self)
    }

    fn led_frame(&self) -> Option<LedFrame> {
        Some(FrequencyGame::led_frame(self))
    }
}
