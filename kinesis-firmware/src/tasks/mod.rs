//! Embassy async tasks
//!
//! The render task owns the sampler, LEDs and display. Each button task owns
//! its pin and debounce window; they talk to the render task only through
//! [`crate::channels::TOGGLES`].

pub mod buttons;
pub mod render;

pub use buttons::{power_button_task, select_button_task};
pub use render::{render_task, Renderer};
