//! Integration tests: the full stage script against mock hardware.

use std::collections::VecDeque;
use std::convert::Infallible;

use embassy_futures::block_on;
use embedded_hal_async::delay::DelayNs;
use phdhat::config::{GAME_TICK_MS, SUCCESS_HOLD_MS};
use phdhat::raster::render_message;
use phdhat::ui::{InputSource, LedSink, PanelState, RasterSink};
use phdhat::{Hat, Raster, Stage, StageExit};
use smart_leds::RGB8;

#[derive(Default)]
struct Screen {
    frames: Vec<Raster>,
}

impl RasterSink for Screen {
    type Error = Infallible;

    fn show(&mut self, raster: &Raster) -> Result<(), Self::Error> {
        self.frames.push(raster.clone());
        Ok(())
    }
}

#[derive(Default)]
struct Script {
    states: VecDeque<PanelState>,
}

impl InputSource for Script {
    fn sample(&mut self) -> PanelState {
        self.states.pop_front().unwrap_or_default()
    }
}

#[derive(Default)]
struct Strip {
    staged: [RGB8; 5],
    flushed: Vec<[RGB8; 5]>,
}

impl LedSink for Strip {
    type Error = Infallible;

    fn set(&mut self, index: usize, color: RGB8) {
        if let Some(p) = self.staged.get_mut(index) {
            *p = color;
        }
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushed.push(self.staged);
        Ok(())
    }
}

#[derive(Default)]
struct Clock {
    sleeps: Vec<u32>,
}

impl DelayNs for Clock {
    async fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns / 1_000_000).await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        assert!(self.sleeps.len() < 10_000, "stage never finished");
        self.sleeps.push(ms);
    }
}

fn message(text: &str) -> Raster {
    let mut r = Raster::new();
    render_message(&mut r, text);
    r
}

fn held(f: impl FnOnce(&mut PanelState)) -> PanelState {
    let mut p = PanelState::default();
    f(&mut p);
    p
}

fn bypass() -> PanelState {
    held(|p| {
        p.a = true;
        p.b = true;
    })
}

/// Panel states that walk the frequency game from its seed to the win.
fn frequency_solution() -> Vec<PanelState> {
    let down = held(|p| p.down = true);
    let up = held(|p| p.up = true);
    let right = held(|p| p.right = true);

    let mut moves = vec![down; 4];
    moves.push(right);
    moves.extend([up; 3]);
    moves.push(right);
    moves.extend([down; 5]);
    moves
}

/// Panel states that raise the noise profile towards the target bump.
fn noise_solution() -> Vec<PanelState> {
    let up = held(|p| p.up = true);
    let right = held(|p| p.right = true);
    let raises = [1, 2, 3, 5, 7, 8, 9, 10, 10, 9, 8, 7, 5, 3, 2, 1];

    let mut moves = vec![right; 6];
    for n in raises {
        moves.extend(std::iter::repeat(up).take(n));
        moves.push(right);
    }
    moves
}

fn run(states: Vec<PanelState>) -> (Screen, Script, Strip, Clock) {
    let mut hat = Hat::new(
        Screen::default(),
        Script {
            states: states.into(),
        },
        Strip::default(),
        Clock::default(),
    );
    block_on(hat.run()).unwrap();
    hat.into_parts()
}

#[test]
fn full_playthrough_reaches_the_code() {
    let mut states = vec![held(|p| p.a = true), held(|p| p.flip_chip = true)];
    states.extend(frequency_solution());
    states.push(bypass());
    states.push(held(|p| p.fridge_valve = true));
    states.push(held(|p| p.libqudev = [true, true]));

    let (screen, input, strip, clock) = run(states);

    assert!(input.states.is_empty());
    assert_eq!(
        screen.frames.last(),
        Some(&message("You made it!\nCode: 123"))
    );
    assert!(screen.frames.contains(&message("First game done! :)")));
    // The noise game was skipped.
    assert!(!screen.frames.contains(&message("Noise matched! :)")));
    assert_eq!(clock.sleeps.iter().filter(|&&ms| ms == SUCCESS_HOLD_MS).count(), 1);
    assert_eq!(strip.flushed.last(), Some(&[RGB8::default(); 5]));
}

#[test]
fn every_prompt_is_shown_in_order() {
    let mut states = vec![held(|p| p.a = true)];
    states.extend(std::iter::repeat(bypass()).take(5));

    let (screen, _, _, _) = run(states);

    let mut stage = Some(Stage::FIRST);
    let mut frames = screen.frames.iter();
    while let Some(s) = stage {
        let prompt = message(s.prompt());
        assert!(
            frames.any(|f| *f == prompt),
            "missing prompt for {:?}",
            s
        );
        stage = s.next();
    }
}

#[test]
fn bypass_skips_success_screens() {
    let states = vec![bypass(); 6];
    let (screen, input, _, clock) = run(states);

    assert!(input.states.is_empty());
    assert!(!screen.frames.contains(&message("First game done! :)")));
    assert!(!clock.sleeps.contains(&SUCCESS_HOLD_MS));
    assert_eq!(
        screen.frames.last(),
        Some(&message("You made it!\nCode: 123"))
    );
}

#[test]
fn noise_stage_completes_by_shaping_the_spectrum() {
    let mut hat = Hat::new(
        Screen::default(),
        Script {
            states: noise_solution().into(),
        },
        Strip::default(),
        Clock::default(),
    );

    let exit = block_on(hat.run_stage(Stage::NoiseMatching)).unwrap();
    assert_eq!(exit, StageExit::Completed);

    let (screen, _, strip, clock) = hat.into_parts();
    assert_eq!(screen.frames.last(), Some(&message("Noise matched! :)")));
    assert!(clock.sleeps.iter().filter(|&&ms| ms == GAME_TICK_MS).count() > 6);
    // The noise game never lights the strip.
    assert!(strip
        .flushed
        .iter()
        .all(|frame| *frame == [RGB8::default(); 5]));
}

#[test]
fn gates_poll_until_their_contact_closes() {
    let mut states = vec![PanelState::default(); 3];
    states.push(held(|p| p.libqudev = [true, false]));
    states.push(held(|p| p.libqudev = [true, true]));

    let mut hat = Hat::new(
        Screen::default(),
        Script {
            states: states.into(),
        },
        Strip::default(),
        Clock::default(),
    );
    let exit = block_on(hat.run_stage(Stage::Libqudev)).unwrap();
    assert_eq!(exit, StageExit::Completed);

    let (_, input, _, clock) = hat.into_parts();
    assert!(input.states.is_empty());
    assert_eq!(clock.sleeps.len(), 4);
}
