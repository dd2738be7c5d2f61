//! Core library for the PhD hat puzzle box.
//!
//! Everything here is hardware-independent: the stage script, the two
//! mini-games, the 1-bit raster they draw into and the LED colour maps.
//! The embedded binary (`main.rs`, `embedded` feature) wires these onto
//! the nRF52840 peripherals; the host tests drive them with mocks.
//!
//! Usage: `cargo test --lib` for unit tests, `cargo test` for everything.
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs is the shared core, `no_std` outside of tests.

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

// ═══════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════

pub mod color;
pub mod config;
pub mod error;
pub mod game;
pub mod raster;
pub mod runner;
pub mod stage;
pub mod ui;

pub use error::{ConfigError, Error};
pub use raster::Raster;
pub use runner::Hat;
pub use stage::{Stage, StageExit};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - stage runner against mock collaborators
// ═══════════════════════════════════════════════════════════════════════════
