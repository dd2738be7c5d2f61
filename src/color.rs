//! Scalar value → LED colour mapping.
//!
//! A value in `[0, 1]` is spread linearly over a visible-light band
//! (400..=789, roughly THz) and the band is split into three contiguous
//! ramps:
//!
//! ```text
//!   < 400        pure red
//!   400..=484    red held, green 0 → 255
//!   484..=610    green held, red 255 → 0
//!   610..=789    green 255 → 0, blue 0 → 255
//!   > 789        pure blue
//! ```
//!
//! Shared endpoints belong to the lower ramp. Channels are truncated, not
//! rounded.

use smart_leds::RGB8;

pub const FREQ_MIN: f64 = 400.0;
pub const FREQ_MAX: f64 = 789.0;

const RED_START: f64 = 400.0;
const RED_END: f64 = 484.0;
const GREEN_START: f64 = 484.0;
const GREEN_END: f64 = 610.0;
const BLUE_START: f64 = 610.0;
const BLUE_END: f64 = 789.0;

fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor
}

fn channel(v: f64) -> u8 {
    // `as` saturates and truncates toward zero.
    v as u8
}

/// Map a band frequency to an RGB colour.
pub fn frequency_to_color(frequency: f64) -> RGB8 {
    let (r, g, b) = if frequency < RED_START {
        (255.0, 0.0, 0.0)
    } else if frequency <= RED_END {
        let f = (frequency - RED_START) / (RED_END - RED_START);
        (255.0, lerp(0.0, 255.0, f), 0.0)
    } else if frequency <= GREEN_END {
        let f = (frequency - GREEN_START) / (GREEN_END - GREEN_START);
        (lerp(255.0, 0.0, f), 255.0, 0.0)
    } else if frequency <= BLUE_END {
        let f = (frequency - BLUE_START) / (BLUE_END - BLUE_START);
        (0.0, lerp(255.0, 0.0, f), lerp(0.0, 255.0, f))
    } else {
        (0.0, 0.0, 255.0)
    };

    RGB8::new(channel(r), channel(g), channel(b))
}

/// Map a value (nominally `0..=1`) to a colour. Out-of-range values clamp
/// to pure red / pure blue.
pub fn value_to_color(value: f64) -> RGB8 {
    frequency_to_color(FREQ_MIN + value * (FREQ_MAX - FREQ_MIN))
}

/// Integer-divide every channel.
pub fn dim(color: RGB8, divisor: u8) -> RGB8 {
    let d = divisor.max(1);
    RGB8::new(color.r / d, color.g / d, color.b / d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_ends_are_pure_colors() {
        assert_eq!(value_to_color(0.0), RGB8::new(255, 0, 0));
        assert_eq!(value_to_color(1.0), RGB8::new(0, 0, 255));
        assert_eq!(frequency_to_color(100.0), RGB8::new(255, 0, 0));
        assert_eq!(frequency_to_color(1_000.0), RGB8::new(0, 0, 255));
        assert_eq!(value_to_color(-3.0), RGB8::new(255, 0, 0));
        assert_eq!(value_to_color(7.5), RGB8::new(0, 0, 255));
    }

    #[test]
    fn red_green_boundary_is_continuous() {
        let top_of_red = frequency_to_color(RED_END);
        let bottom_of_green = frequency_to_color(GREEN_START + 1e-9);
        assert_eq!(top_of_red, RGB8::new(255, 255, 0));
        assert!(top_of_red.r.abs_diff(bottom_of_green.r) <= 1);
        assert_eq!(top_of_red.g, bottom_of_green.g);
        assert_eq!(top_of_red.b, bottom_of_green.b);
    }

    #[test]
    fn green_blue_boundary_is_continuous() {
        let top_of_green = frequency_to_color(GREEN_END);
        let bottom_of_blue = frequency_to_color(BLUE_START + 1e-9);
        assert_eq!(top_of_green, RGB8::new(0, 255, 0));
        assert!(top_of_green.g.abs_diff(bottom_of_blue.g) <= 1);
        assert_eq!(bottom_of_blue.r, 0);
    }

    #[test]
    fn red_band_raises_green_only() {
        let red_band_end = (RED_END - FREQ_MIN) / (FREQ_MAX - FREQ_MIN);
        let mut last_green = 0u8;
        for i in 0..=100 {
            let c = value_to_color(red_band_end * i as f64 / 100.0);
            assert_eq!(c.r, 255);
            assert_eq!(c.b, 0);
            assert!(c.g >= last_green);
            last_green = c.g;
        }
        assert!(last_green >= 254);
    }

    #[test]
    fn channels_truncate() {
        // 442 is halfway through the red ramp: 127.5 → 127.
        assert_eq!(frequency_to_color(442.0), RGB8::new(255, 127, 0));
    }

    #[test]
    fn dim_divides_each_channel() {
        assert_eq!(dim(RGB8::new(255, 100, 19), 20), RGB8::new(12, 5, 0));
        assert_eq!(dim(RGB8::new(9, 9, 9), 0), RGB8::new(9, 9, 9));
    }
}
