//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and game tuning
//! constants live here so they can be tuned in one place.

// Display

/// SSD1306 panel width (pixels).
pub const DISPLAY_WIDTH: u32 = 128;

/// SSD1306 panel height (pixels).
pub const DISPLAY_HEIGHT: u32 = 64;

/// Margin reserved on the top/left of a plot for titles and axis labels.
pub const PLOT_MARGIN: u32 = 16;

/// Thickness of a value bar (pixels, added below the bar's top edge).
pub const BAR_THICKNESS: i32 = 5;

// Mini-games

/// Amount one up/down press moves the selected value.
pub const VALUE_STEP: f64 = 0.1;

/// Number of tunable qubit frequencies.
pub const FREQ_POINTS: usize = 3;

/// Starting frequencies (q1, q2, q3). Value 0 is drawn at the top.
pub const FREQ_SEED: [f64; FREQ_POINTS] = [0.1, 0.8, 0.3];

/// Distance between the dark/bright states and the resonance point.
///
/// The older board revision used 0.2 with seeds `[0.3, 0.8, 0.1]`.
pub const HYBRIDIZATION_OFFSET: f64 = 0.3;

/// Number of adjustable noise-power bars.
pub const NOISE_POINTS: usize = 28;

/// Starting value of every noise bar.
pub const NOISE_SEED: f64 = 0.9;

/// Upper end of the spectrum's frequency axis (samples span `0..=max`).
pub const NOISE_OMEGA_MAX: f64 = 200.0;

/// Centre frequency of the target bump.
pub const NOISE_CENTER: f64 = 100.0;

/// Width parameter of the target bump.
pub const NOISE_BANDWIDTH: f64 = 5.0;

/// Logical pixel height of the spectrum; sets both the target amplitude
/// and the distance normalisation (half of it).
pub const NOISE_Y_PIXELS: f64 = 10.0;

/// Peak amplitude of the target curve (2 for a 10-pixel spectrum).
pub const NOISE_AMPLITUDE: f64 = 2.0 / 10.0 * NOISE_Y_PIXELS;

/// Normalised distance at or below which the noise profile counts as matched.
pub const NOISE_MATCH_DISTANCE: f64 = 0.1;

// LED strip
//
// Strip layout on the hat (left to right):
//
//   index 0 → q3
//   index 1 → dark state
//   index 2 → q1
//   index 3 → bright state
//   index 4 → q2

/// Number of pixels on the strip.
pub const LED_COUNT: usize = 5;

pub const LED_INDEX_Q1: usize = 2;
pub const LED_INDEX_Q2: usize = 4;
pub const LED_INDEX_Q3: usize = 0;
pub const LED_INDEX_DARK: usize = 1;
pub const LED_INDEX_BRIGHT: usize = 3;

/// Global strip brightness (0.2 of full scale).
pub const LED_BRIGHTNESS: u8 = 51;

/// Channel divisor applied to the dark-state colour.
pub const DARK_STATE_DIM: u8 = 20;

// Timing

/// Poll interval for pin-driven stages (60 Hz).
pub const STAGE_POLL_MS: u32 = 16;

/// Mini-game tick. Held directions repeat once per tick.
pub const GAME_TICK_MS: u32 = 150;

/// How long a short stage prompt stays up before polling starts.
pub const PROMPT_HOLD_MS: u32 = 1_000;

/// How long a numbered task prompt stays up before polling starts.
pub const TASK_PROMPT_HOLD_MS: u32 = 3_000;

/// How long the success screen of a solved mini-game stays up.
pub const SUCCESS_HOLD_MS: u32 = 5_000;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Joystick LEFT    → P0.03
//   Joystick RIGHT   → P0.04
//   Joystick UP      → P0.28
//   Joystick DOWN    → P0.29
//   Button A (#5)    → P0.11
//   Button B (#6)    → P0.12
//   Flip-chip wire   → P1.01  (active-low)
//   Fridge valve     → P1.02  (active-high)
//   Libqudev line 1  → P1.03  (active-low)
//   Libqudev line 2  → P1.04  (active-low)
//   I²C SDA          → P0.26
//   I²C SCL          → P0.27
//   LED strip DIN    → P1.10  (SPIM3 MOSI)
//   SPIM3 SCK        → P1.11  (unconnected)
