use heapless::Vec;

use super::PanelState;
use crate::game::Command;

/// Commands for one tick. Level-triggered: every held direction yields its
/// command, so holding a direction repeats it each tick.
///
/// Order: marker moves first, then value edits.
pub fn commands(panel: &PanelState) -> Vec<Command, 4> {
    let mut out = Vec::new();
    let mapping = [
        (panel.right, Command::NextMarker),
        (panel.left, Command::PrevMarker),
        (panel.up, Command::Raise),
        (panel.down, Command::Lower),
    ];
    for (pressed, command) in mapping {
        if pressed {
            // Capacity matches the mapping length.
            let _ = out.push(command);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_panel_yields_nothing() {
        assert!(commands(&PanelState::default()).is_empty());
    }

    #[test]
    fn directions_map_to_commands() {
        let right = PanelState {
            right: true,
            ..Default::default()
        };
        assert_eq!(commands(&right).as_slice(), &[Command::NextMarker]);

        let up = PanelState {
            up: true,
            ..Default::default()
        };
        assert_eq!(commands(&up).as_slice(), &[Command::Raise]);
    }

    #[test]
    fn simultaneous_presses_all_fire() {
        let panel = PanelState {
            left: true,
            right: true,
            up: true,
            down: true,
            ..Default::default()
        };
        assert_eq!(
            commands(&panel).as_slice(),
            &[
                Command::NextMarker,
                Command::PrevMarker,
                Command::Raise,
                Command::Lower
            ]
        );
    }

    #[test]
    fn bypass_needs_both_buttons() {
        let a_only = PanelState {
            a: true,
            ..Default::default()
        };
        assert!(!a_only.bypass());
        assert!(commands(&a_only).is_empty());

        let both = PanelState {
            a: true,
            b: true,
            ..Default::default()
        };
        assert!(both.bypass());
    }
}
