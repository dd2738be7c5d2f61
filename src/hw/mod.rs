//! Board adapters: the nRF52840 peripherals behind the library's
//! display / LED / input traits.
//!
//! Every input pin uses the internal pull-up. Contacts that complete a
//! stage by being grounded are active-low; the fridge valve completes when
//! its wire is pulled and the pin floats high.

pub mod display;
pub mod leds;
pub mod panel;
