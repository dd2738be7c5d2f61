//! Cooperative stage runner.
//!
//! Drives the stage sequence against the display / LED / input
//! collaborators. Single task, no locking: every stage polls its inputs,
//! pushes frames and sleeps a fixed interval until it completes or the
//! bypass buttons are held.

use embedded_hal_async::delay::DelayNs;

use crate::config::{GAME_TICK_MS, STAGE_POLL_MS, SUCCESS_HOLD_MS};
use crate::error::Error;
use crate::game::{FrequencyGame, NoiseGame, PlotGeometry, Puzzle};
use crate::raster::{render_message, Raster};
use crate::stage::{Gate, PuzzleKind, Stage, StageExit, StageKind};
use crate::ui::input_logic::commands;
use crate::ui::leds::{push_frame, LedFrame};
use crate::ui::{InputSource, LedSink, RasterSink};

/// The hat: display, LED strip, input panel and a delay source.
pub struct Hat<D, I, L, T> {
    display: D,
    input: I,
    leds: L,
    delay: T,
    screen: Raster,
}

impl<D, I, L, T> Hat<D, I, L, T>
where
    D: RasterSink,
    I: InputSource,
    L: LedSink,
    T: DelayNs,
{
    pub fn new(display: D, input: I, leds: L, delay: T) -> Self {
        Self {
            display,
            input,
            leds,
            delay,
            screen: Raster::new(),
        }
    }

    /// Give the collaborators back.
    pub fn into_parts(self) -> (D, I, L, T) {
        (self.display, self.input, self.leds, self.delay)
    }

    /// Play every stage from the welcome screen to the final code.
    pub async fn run(&mut self) -> Result<(), Error> {
        let mut stage = Stage::FIRST;
        loop {
            let exit = self.run_stage(stage).await?;
            info!("Stage {} -> {}", stage, exit);
            match stage.next() {
                Some(next) => stage = next,
                None => return Ok(()),
            }
        }
    }

    /// Show the stage prompt, then block until the stage completes or is
    /// bypassed.
    pub async fn run_stage(&mut self, stage: Stage) -> Result<StageExit, Error> {
        info!("Entering stage {}", stage);
        self.show_message(stage.prompt())?;
        self.push_leds(&LedFrame::off())?;
        let hold = stage.prompt_hold_ms();
        if hold > 0 {
            self.delay.delay_ms(hold).await;
        }

        let exit = match stage.kind() {
            StageKind::Gate(gate) => self.run_gate(gate).await,
            StageKind::Puzzle(PuzzleKind::Frequency) => {
                let mut game = FrequencyGame::new(PlotGeometry::display())?;
                self.run_puzzle(&mut game).await?
            }
            StageKind::Puzzle(PuzzleKind::Noise) => {
                let mut game = NoiseGame::new(PlotGeometry::display())?;
                self.run_puzzle(&mut game).await?
            }
            StageKind::Final => return Ok(StageExit::Completed),
        };

        if exit == StageExit::Completed {
            if let Some(message) = stage.success_message() {
                self.show_message(message)?;
                self.delay.delay_ms(SUCCESS_HOLD_MS).await;
            }
        }
        self.push_leds(&LedFrame::off())?;
        Ok(exit)
    }

    async fn run_gate(&mut self, gate: Gate) -> StageExit {
        loop {
            let panel = self.input.sample();
            if gate.is_open(&panel) {
                return StageExit::Completed;
            }
            if panel.bypass() {
                warn!("Gate {} bypassed", gate);
                return StageExit::Bypassed;
            }
            self.delay.delay_ms(STAGE_POLL_MS).await;
        }
    }

    /// Tick a mini-game: sample, apply, present, sleep, then check for a
    /// win or a bypass.
    pub async fn run_puzzle<P: Puzzle>(&mut self, puzzle: &mut P) -> Result<StageExit, Error> {
        self.present(puzzle.raster())?;
        if let Some(frame) = puzzle.led_frame() {
            self.push_leds(&frame)?;
        }

        loop {
            let panel = self.input.sample();

            let mut edited = false;
            for command in commands(&panel) {
                debug!("Command {}", command);
                puzzle.apply(command);
                edited |= command.edits_value();
            }

            self.present(puzzle.raster())?;
            if edited {
                if let Some(frame) = puzzle.led_frame() {
                    self.push_leds(&frame)?;
                }
            }

            self.delay.delay_ms(GAME_TICK_MS).await;

            if puzzle.is_solved() {
                info!("Puzzle solved");
                return Ok(StageExit::Completed);
            }
            if panel.bypass() {
                warn!("Puzzle bypassed");
                return Ok(StageExit::Bypassed);
            }
        }
    }

    fn show_message(&mut self, message: &str) -> Result<(), Error> {
        render_message(&mut self.screen, message);
        self.display.show(&self.screen).map_err(|_| Error::Display)
    }

    fn present(&mut self, raster: &Raster) -> Result<(), Error> {
        self.display.show(raster).map_err(|_| Error::Display)
    }

    fn push_leds(&mut self, frame: &LedFrame) -> Result<(), Error> {
        push_frame(&mut self.leds, frame).map_err(|_| Error::Leds)
    }
}
