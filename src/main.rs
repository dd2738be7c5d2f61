//! Firmware for the PhD hat puzzle box.
//!
//! # Hardware
//!
//! - **MCU**: nRF52840
//! - **Display**: 128x64 SSD1306 OLED on TWIM0
//! - **LEDs**: 5 x SK6812 RGBW, clocked out of SPIM3 MOSI by `ws2812-spi`
//! - **Input**: joystick directions, buttons #5/#6 and the puzzle contacts,
//!   pin map in [`phdhat::config`]
//!
//! A single task runs the stage script to the end, then idles with the
//! final code on screen.

#![no_std]
#![no_main]

mod hw;

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_nrf::{bind_interrupts, peripherals, spim, twim};
use embassy_time::{Delay, Timer};
use phdhat::config::{LED_BRIGHTNESS, LED_COUNT};
use phdhat::ui::leds::StripSink;
use phdhat::Hat;
use ws2812_spi::Ws2812;
use {defmt_rtt as _, panic_probe as _};

use hw::display::Oled;
use hw::leds::Rgbw;
use hw::panel::{pulled_up, Panel};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    SPIM3 => spim::InterruptHandler<peripherals::SPI3>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("phdhat starting");

    // OLED
    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let display = Oled::new(i2c);

    // LED strip - ws2812-spi wants a 2-3.8 MHz bit clock.
    let mut spi_config = spim::Config::default();
    spi_config.frequency = spim::Frequency::M2;
    let spi = spim::Spim::new_txonly(p.SPI3, Irqs, p.P1_11, p.P1_10, spi_config);
    let leds: StripSink<_, LED_COUNT> =
        StripSink::new(Rgbw(Ws2812::new_sk6812w(spi)), LED_BRIGHTNESS);

    let panel = Panel {
        left: pulled_up(p.P0_03),
        right: pulled_up(p.P0_04),
        up: pulled_up(p.P0_28),
        down: pulled_up(p.P0_29),
        a: pulled_up(p.P0_11),
        b: pulled_up(p.P0_12),
        flip_chip: pulled_up(p.P1_01),
        fridge_valve: pulled_up(p.P1_02),
        libqudev: [pulled_up(p.P1_03), pulled_up(p.P1_04)],
    };

    info!("Peripherals ready");

    let mut hat = Hat::new(display, panel, leds, Delay);
    match hat.run().await {
        Ok(()) => info!("All stages done"),
        Err(e) => error!("Hat stopped: {}", e),
    }

    loop {
        Timer::after_secs(60).await;
    }
}
