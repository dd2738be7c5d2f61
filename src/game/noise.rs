//! Noise-spectrum matching game.
//!
//! The player shapes a 28-point power profile to match a fixed bump. The
//! bar for point `i` hangs at `value * chart_height`, so lowering a value
//! raises its power: a bar's power is `(1 - v) - 0.1`.

use core::f64::consts::PI;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use super::canvas::{boxed, corners, PlotCanvas, PlotGeometry};
use super::track::ValueTrack;
use super::{Command, Puzzle};
use crate::config::{
    BAR_THICKNESS, NOISE_AMPLITUDE, NOISE_BANDWIDTH, NOISE_CENTER, NOISE_MATCH_DISTANCE,
    NOISE_OMEGA_MAX, NOISE_POINTS, NOISE_SEED, NOISE_Y_PIXELS, VALUE_STEP,
};
use crate::error::ConfigError;
use crate::raster::Raster;
use crate::ui::leds::LedFrame;

const X_LABEL: &str = "Frequency, a.u.";
const Y_LABEL: &str = "S(w) a.u.";

/// Offset between a bar's complement and the power it stands for.
const POWER_FLOOR: f64 = 0.1;

/// Target spectrum sampled at `NOISE_POINTS` evenly spaced frequencies
/// over `0..=NOISE_OMEGA_MAX`:
///
/// ```text
/// S(ω) = A / (exp((ω - ω_c)² / (2π·b)²) + 1)
/// ```
pub fn target_curve() -> [f64; NOISE_POINTS] {
    let step = NOISE_OMEGA_MAX / (NOISE_POINTS - 1) as f64;
    let width = 2.0 * PI * NOISE_BANDWIDTH;
    let mut target = [0.0; NOISE_POINTS];
    for (i, t) in target.iter_mut().enumerate() {
        let omega = step * i as f64;
        let d = omega - NOISE_CENTER;
        *t = NOISE_AMPLITUDE / (libm::exp(d * d / (width * width)) + 1.0);
    }
    target
}

/// Euclidean distance between the target and the power encoded by
/// `values`, normalised by half the spectrum height and capped at 1.
pub fn distance(target: &[f64; NOISE_POINTS], values: &[f64; NOISE_POINTS]) -> f64 {
    let sum: f64 = target
        .iter()
        .zip(values.iter())
        .map(|(t, v)| {
            let d = t - ((1.0 - v) - POWER_FLOOR);
            d * d
        })
        .sum();
    let norm = libm::sqrt(sum) / (0.5 * NOISE_Y_PIXELS);
    norm.min(1.0)
}

pub struct NoiseGame {
    track: ValueTrack<NOISE_POINTS>,
    target: [f64; NOISE_POINTS],
    distance: f64,
    canvas: PlotCanvas,
}

impl NoiseGame {
    /// Flat profile at the stock seed, already rendered.
    pub fn new(geometry: PlotGeometry) -> Result<Self, ConfigError> {
        Self::with_values(geometry, [NOISE_SEED; NOISE_POINTS])
    }

    pub fn with_values(
        geometry: PlotGeometry,
        values: [f64; NOISE_POINTS],
    ) -> Result<Self, ConfigError> {
        let target = target_curve();
        let mut game = Self {
            track: ValueTrack::new(values),
            distance: distance(&target, &values),
            target,
            canvas: PlotCanvas::new(geometry, NOISE_POINTS)?,
        };
        game.render();
        Ok(game)
    }

    pub fn move_marker(&mut self, step: i32) {
        self.track.move_marker(step);
    }

    /// Step the selected bar, redraw and rescore.
    pub fn adjust_value(&mut self, step: f64) {
        self.track.adjust_value(step);
        self.render();
    }

    pub fn values(&self) -> &[f64; NOISE_POINTS] {
        self.track.values()
    }

    pub fn marker(&self) -> usize {
        self.track.marker()
    }

    /// Score of the last render, in `0..=1` (0 = perfect match).
    pub fn current_distance(&self) -> f64 {
        self.distance
    }

    pub fn is_matched(&self, threshold: f64) -> bool {
        self.distance <= threshold
    }

    pub fn raster(&self) -> &Raster {
        self.canvas.raster()
    }

    /// Redraw every bar and refresh the score.
    pub fn render(&mut self) {
        let g = *self.canvas.geometry();
        let values = *self.track.values();

        self.canvas.clear();
        self.canvas.label(
            X_LABEL,
            Point::new(2 * g.margin as i32, (g.height - g.margin) as i32),
        );
        self.canvas.y_label(Y_LABEL);

        let pw = g.chart_width() as f64;
        let ph = g.chart_height() as f64;
        let bar_width = pw / NOISE_POINTS as f64;
        let bar = BAR_THICKNESS as f64;

        let mut chart = self.canvas.chart(Point::new(g.margin as i32, 0));
        for (i, v) in values.iter().enumerate() {
            let x0 = i as f64 * bar_width;
            let y = v * ph;
            corners(
                &mut chart,
                x0,
                y,
                x0 + bar_width,
                y + bar,
                boxed(BinaryColor::On, BinaryColor::Off),
            );
        }

        self.distance = distance(&self.target, &values);
    }
}

impl Puzzle for NoiseGame {
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
        self.is_matched(NOISE_MATCH_DISTANCE)
    }

    fn led_frame(&self) -> Option<LedFrame> {
        None
    }
}
