//! Render task
//!
//! Runs the render loop forever, yielding once per iteration so the button
//! tasks get to run.

use defmt::*;
use embassy_futures::yield_now;

use kinesis_core::render::RenderLoop;
use kinesis_display::GraphicsSink;
use kinesis_hal_rp2040::{JoystickAdc, LedSlice};

use crate::display::Oled;

/// Render loop on this board's peripherals
pub type Renderer = RenderLoop<'static, JoystickAdc, LedSlice, GraphicsSink<Oled>>;

#[embassy_executor::task]
pub async fn render_task(mut renderer: Renderer) {
    renderer.begin();
    info!("Render loop started, cursor at {}", renderer.position());

    loop {
        let frame = renderer.step();

        if let Some(enabled) = frame.gate_changed {
            debug!("LEDs {}", if enabled { "enabled" } else { "gated off" });
        }
        if let Some(visible) = frame.border_changed {
            debug!("Border {}", if visible { "shown" } else { "hidden" });
        }
        trace!("{}", frame);

        yield_now().await;
    }
}
