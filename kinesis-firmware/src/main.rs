//! Kinesis - Joystick Cursor Firmware
//!
//! Main firmware binary for the RP2040 joystick board. Reads a two-axis
//! analog stick and two push-buttons, dims two LEDs by stick deflection and
//! moves a cursor square around an SSD1306 OLED.
//!
//! Named after the Greek "kinesis" meaning "movement".

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::Peripherals;
use {defmt_rtt as _, panic_probe as _};

use kinesis_core::config::DeviceConfig;
use kinesis_core::render::RenderLoop;

use crate::board::{Board, InitError};
use crate::channels::TOGGLES;

mod board;
mod channels;
mod config;
mod display;
mod tasks;

/// Load the configuration and bring up the board
fn boot(p: Peripherals) -> Result<(DeviceConfig, Board), InitError> {
    let config = config::load()?;
    info!(
        "Configuration loaded: deadzone={} refractory={}ms redraw={}",
        config.joystick.deadzone, config.buttons.refractory_ms, config.render.redraw
    );

    let board = board::init(p, &config)?;
    Ok((config, board))
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Kinesis firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let (config, board) = match boot(p) {
        Ok(booted) => booted,
        Err(e) => {
            error!("Boot failed: {}", e);
            defmt::panic!("Halting");
        }
    };

    let renderer: tasks::Renderer = RenderLoop::from_config(
        &config,
        board.sampler,
        board.leds,
        board.display,
        &TOGGLES,
    );

    spawner.spawn(unwrap!(tasks::power_button_task(
        board.power_button,
        config.buttons.refractory_ms,
        &TOGGLES,
    )));
    spawner.spawn(unwrap!(tasks::select_button_task(
        board.select_button,
        board.indicator,
        config.buttons.refractory_ms,
        &TOGGLES,
    )));
    spawner.spawn(unwrap!(tasks::render_task(renderer)));

    info!("All tasks spawned, firmware running");
}
