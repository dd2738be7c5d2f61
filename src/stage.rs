//! Scripted stage sequence of the hat.
//!
//! Each stage is one of three kinds:
//!
//! - a **gate** that waits for a physical condition (a button, a seated
//!   jumper, a closed valve contact),
//! - a **puzzle** that runs a mini-game until it is solved,
//! - the **final** screen.
//!
//! Any gate or puzzle can be skipped by holding both bypass buttons.

use crate::config::{PROMPT_HOLD_MS, TASK_PROMPT_HOLD_MS};
use crate::ui::PanelState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    Welcome,
    FlipChip,
    QubitTuning,
    NoiseMatching,
    Cooldown,
    Libqudev,
    Finish,
}

/// How a stage is completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StageKind {
    Gate(Gate),
    Puzzle(PuzzleKind),
    Final,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PuzzleKind {
    Frequency,
    Noise,
}

/// Physical condition a gate stage waits for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gate {
    /// Button "#5" pressed.
    StartButton,
    /// Flip-chip jumper seated.
    FlipChipSeated,
    /// Fridge valve contact closed.
    ValveClosed,
    /// Both libqudev lines report 0.
    LibqudevCleared,
}

/// How a stage ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StageExit {
    Completed,
    Bypassed,
}

impl Stage {
    pub const FIRST: Stage = Stage::Welcome;

    /// Stage that follows this one, `None` after the final screen.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Welcome => Some(Stage::FlipChip),
            Stage::FlipChip => Some(Stage::QubitTuning),
            Stage::QubitTuning => Some(Stage::NoiseMatching),
            Stage::NoiseMatching => Some(Stage::Cooldown),
            Stage::Cooldown => Some(Stage::Libqudev),
            Stage::Libqudev => Some(Stage::Finish),
            Stage::Finish => None,
        }
    }

    pub fn kind(self) -> StageKind {
        match self {
            Stage::Welcome => StageKind::Gate(Gate::StartButton),
            Stage::FlipChip => StageKind::Gate(Gate::FlipChipSeated),
            Stage::QubitTuning => StageKind::Puzzle(PuzzleKind::Frequency),
            Stage::NoiseMatching => StageKind::Puzzle(PuzzleKind::Noise),
            Stage::Cooldown => StageKind::Gate(Gate::ValveClosed),
            Stage::Libqudev => StageKind::Gate(Gate::LibqudevCleared),
            Stage::Finish => StageKind::Final,
        }
    }

    /// Text shown when the stage starts.
    pub fn prompt(self) -> &'static str {
        match self {
            Stage::Welcome => "Welcome\nto your PhD hat\nPress #5 to start",
            Stage::FlipChip => "1. Fix flip-chip hat",
            Stage::QubitTuning => "2. Tune\nQubit frequencies",
            Stage::NoiseMatching => "2b. Match the\nnoise spectrum",
            Stage::Cooldown => "3. Fix fridge\ncooldown\nOh my, a valve?",
            Stage::Libqudev => "4. Fix Libqudev!",
            Stage::Finish => "You made it!\nCode: 123",
        }
    }

    /// How long the prompt stays up before the stage starts polling.
    pub fn prompt_hold_ms(self) -> u32 {
        match self {
            Stage::Welcome => PROMPT_HOLD_MS,
            Stage::FlipChip | Stage::QubitTuning | Stage::NoiseMatching => TASK_PROMPT_HOLD_MS,
            Stage::Cooldown | Stage::Libqudev | Stage::Finish => 0,
        }
    }

    /// Message shown after the stage's puzzle is solved.
    pub fn success_message(self) -> Option<&'static str> {
        match self {
            Stage::QubitTuning => Some("First game done! :)"),
            Stage::NoiseMatching => Some("Noise matched! :)"),
            _ => None,
        }
    }
}

impl Gate {
    pub fn is_open(self, panel: &PanelState) -> bool {
        match self {
            Gate::StartButton => panel.a,
            Gate::FlipChipSeated => panel.flip_chip,
            Gate::ValveClosed => panel.fridge_valve,
            Gate::LibqudevCleared => panel.libqudev.iter().all(|&line| line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_visits_every_stage_once() {
        let mut stage = Stage::FIRST;
        let mut count = 1;
        while let Some(next) = stage.next() {
            assert_ne!(next, stage);
            stage = next;
            count += 1;
        }
        assert_eq!(stage, Stage::Finish);
        assert_eq!(count, 7);
    }

    #[test]
    fn puzzles_follow_the_flip_chip() {
        assert_eq!(Stage::FlipChip.next(), Some(Stage::QubitTuning));
        assert_eq!(
            Stage::QubitTuning.kind(),
            StageKind::Puzzle(PuzzleKind::Frequency)
        );
        assert_eq!(
            Stage::NoiseMatching.kind(),
            StageKind::Puzzle(PuzzleKind::Noise)
        );
        assert_eq!(Stage::Finish.kind(), StageKind::Final);
    }

    #[test]
    fn libqudev_gate_needs_both_lines() {
        let gate = Gate::LibqudevCleared;
        let mut panel = PanelState::default();
        assert!(!gate.is_open(&panel));
        panel.libqudev = [true, false];
        assert!(!gate.is_open(&panel));
        panel.libqudev = [true, true];
        assert!(gate.is_open(&panel));
    }

    #[test]
    fn gates_watch_their_own_inputs() {
        let valve = PanelState {
            fridge_valve: true,
            ..Default::default()
        };
        assert!(Gate::ValveClosed.is_open(&valve));
        assert!(!Gate::FlipChipSeated.is_open(&valve));
        assert!(!Gate::StartButton.is_open(&valve));
    }

    #[test]
    fn only_puzzles_have_success_screens() {
        assert!(Stage::QubitTuning.success_message().is_some());
        assert!(Stage::NoiseMatching.success_message().is_some());
        assert!(Stage::Cooldown.success_message().is_none());
    }
}
