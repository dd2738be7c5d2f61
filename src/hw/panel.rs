//! GPIO input panel: joystick directions, the two bypass buttons and the
//! puzzle contacts.
//!
//! Pins are level-sampled once per tick by the stage runner; there is no
//! edge detection or debouncing. A held direction repeats every tick.

use embassy_nrf::gpio::{Input, Pin, Pull};
use embassy_nrf::Peripheral;
use phdhat::ui::{InputSource, PanelState};

pub struct Panel<'d> {
    pub left: Input<'d>,
    pub right: Input<'d>,
    pub up: Input<'d>,
    pub down: Input<'d>,
    pub a: Input<'d>,
    pub b: Input<'d>,
    pub flip_chip: Input<'d>,
    pub fridge_valve: Input<'d>,
    pub libqudev: [Input<'d>; 2],
}

/// Input with the internal pull-up enabled.
pub fn pulled_up<'d>(pin: impl Peripheral<P = impl Pin> + 'd) -> Input<'d> {
    Input::new(pin, Pull::Up)
}

impl InputSource for Panel<'_> {
    fn sample(&mut self) -> PanelState {
        PanelState {
            left: self.left.is_low(),
            right: self.right.is_low(),
            up: self.up.is_low(),
            down: self.down.is_low(),
            a: self.a.is_low(),
            b: self.b.is_low(),
            flip_chip: self.flip_chip.is_low(),
            fridge_valve: self.fridge_valve.is_high(),
            libqudev: [self.libqudev[0].is_low(), self.libqudev[1].is_low()],
        }
    }
}
