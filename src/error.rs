//! Unified error type for phdhat.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A mini-game was built with unusable plot geometry.
    Config(ConfigError),

    /// The display collaborator failed to present a frame.
    Display,

    /// The LED strip collaborator failed to flush.
    Leds,
}

/// Plot geometry that cannot host a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A chart needs at least one column.
    NoColumns,
    /// Fewer chart pixels than columns - columns would be zero-width.
    ChartTooNarrow { chart_width: u32, columns: usize },
    /// The margin swallows the whole plot.
    MarginTooLarge { margin: u32 },
    /// The plot does not fit on the raster.
    ExceedsRaster { width: u32, height: u32 },
}

// Convenience conversions

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}
