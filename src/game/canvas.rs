//! Shared chart plumbing for the mini-games.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH, PLOT_MARGIN};
use crate::error::ConfigError;
use crate::raster::{text_style, Raster, RotatedLeft, Window};

/// Outer size of a plot and the margin kept for labels on its top/left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlotGeometry {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

impl PlotGeometry {
    /// Full-screen plot with the default margin.
    pub const fn display() -> Self {
        Self {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            margin: PLOT_MARGIN,
        }
    }

    pub const fn chart_width(&self) -> u32 {
        self.width - self.margin
    }

    pub const fn chart_height(&self) -> u32 {
        self.height - self.margin
    }

    pub const fn chart_size(&self) -> Size {
        Size::new(self.chart_width(), self.chart_height())
    }

    /// Check the plot can hold `columns` non-empty columns.
    pub fn validate(&self, columns: usize) -> Result<(), ConfigError> {
        if self.width > DISPLAY_WIDTH || self.height > DISPLAY_HEIGHT {
            return Err(ConfigError::ExceedsRaster {
                width: self.width,
                height: self.height,
            });
        }
        if self.margin >= self.width || self.margin >= self.height {
            return Err(ConfigError::MarginTooLarge {
                margin: self.margin,
            });
        }
        if columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        if (self.chart_width() as usize) < columns {
            return Err(ConfigError::ChartTooNarrow {
                chart_width: self.chart_width(),
                columns,
            });
        }
        Ok(())
    }
}

/// Rendering context owned by a game: its geometry and its frame.
#[derive(Clone, Debug)]
pub struct PlotCanvas {
    geometry: PlotGeometry,
    raster: Raster,
}

impl PlotCanvas {
    pub fn new(geometry: PlotGeometry, columns: usize) -> Result<Self, ConfigError> {
        geometry.validate(columns)?;
        Ok(Self {
            geometry,
            raster: Raster::new(),
        })
    }

    pub fn geometry(&self) -> &PlotGeometry {
        &self.geometry
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn clear(&mut self) {
        self.raster.reset();
    }

    /// Draw `text` at `position` (top-left of the first glyph).
    pub fn label(&mut self, text: &str, position: Point) {
        let _ = Text::with_baseline(text, position, text_style(BinaryColor::On), Baseline::Top)
            .draw(&mut self.raster);
    }

    /// Vertical axis label running bottom-to-top along the left margin.
    ///
    /// The label is laid out on a `height x margin` strip, turned a quarter
    /// left and shifted up by half a margin.
    pub fn y_label(&mut self, text: &str) {
        let g = self.geometry;
        let origin = Point::new(0, -((g.margin / 2) as i32));
        let mut strip = RotatedLeft::new(&mut self.raster, origin, Size::new(g.height, g.margin));
        let _ = Text::with_baseline(text, Point::zero(), text_style(BinaryColor::On), Baseline::Top)
            .draw(&mut strip);
    }

    /// Chart area whose top-left corner sits at `offset`. Drawing through
    /// it is clipped to the chart.
    pub fn chart(&mut self, offset: Point) -> Window<'_, Raster> {
        Window::new(&mut self.raster, offset, self.geometry.chart_size())
    }
}

/// Pixel coordinate for a fractional chart position.
pub fn px(v: f64) -> i32 {
    libm::floor(v) as i32
}

/// Outline only.
pub fn outline() -> PrimitiveStyle<BinaryColor> {
    PrimitiveStyle::with_stroke(BinaryColor::On, 1)
}

/// Solid, border included.
pub fn solid() -> PrimitiveStyle<BinaryColor> {
    PrimitiveStyle::with_fill(BinaryColor::On)
}

/// Filled with `fill`, one-pixel border in `stroke`.
pub fn boxed(fill: BinaryColor, stroke: BinaryColor) -> PrimitiveStyle<BinaryColor> {
    PrimitiveStyleBuilder::new()
        .fill_color(fill)
        .stroke_color(stroke)
        .stroke_width(1)
        .build()
}

/// Draw the rectangle spanning two inclusive corners.
pub fn corners<D>(
    target: &mut D,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    style: PrimitiveStyle<BinaryColor>,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let _ = Rectangle::with_corners(Point::new(px(x0), px(y0)), Point::new(px(x1), px(y1)))
        .into_styled(style)
        .draw(target);
}
