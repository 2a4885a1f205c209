//! Render loop
//!
//! One iteration samples the joystick, drives the LED channels and moves the
//! cursor square on the display. Button handlers never touch the PWM slice
//! or the display: they flip [`ToggleState`] flags, and the loop applies any
//! change it sees at the start of the next iteration.
//!
//! ```text
//!  sample ──► gate sync ──► brightness ──► border sync ──► cursor ──► redraw
//!               │               │              │                        │
//!           set_enabled   set_channel_level  outline             erase/draw/flush
//! ```

use kinesis_hal::{AnalogInput, PwmChannel, PwmSlice};

use crate::buttons::ToggleState;
use crate::config::{DeviceConfig, RedrawPolicy};
use crate::input::{AnalogSampler, SampleReading};
use crate::mapping::{BrightnessLevel, BrightnessMapper, CursorMapper, CursorPosition};
use crate::traits::{DisplaySink, Fill, PixelColor, Rect};

/// Summary of one iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Raw joystick reading
    pub sample: SampleReading,
    /// Duty values written this iteration, `None` while the LEDs are gated off
    pub brightness: Option<BrightnessLevel>,
    /// Cursor position after this iteration
    pub position: CursorPosition,
    /// New LED gate, if it changed this iteration
    pub gate_changed: Option<bool>,
    /// New border visibility, if it changed this iteration
    pub border_changed: Option<bool>,
    /// Whether the display was redrawn and flushed
    pub redrawn: bool,
}

/// Render loop state
///
/// Owns the sampler, the LED slice and the display. Borrows the shared
/// toggle flags for the lifetime of the program.
pub struct RenderLoop<'a, A, P, D> {
    sampler: AnalogSampler<A>,
    pwm: P,
    display: D,
    toggles: &'a ToggleState,

    brightness: BrightnessMapper,
    cursor: CursorMapper,
    cursor_size: u8,
    border: Rect,
    redraw: RedrawPolicy,

    position: CursorPosition,
    pwm_enabled: bool,
    border_visible: bool,
}

impl<'a, A, P, D> RenderLoop<'a, A, P, D>
where
    A: AnalogInput,
    P: PwmSlice,
    D: DisplaySink,
{
    /// Create a render loop from the device configuration
    ///
    /// The configuration must have passed [`DeviceConfig::validate`].
    pub fn from_config(
        config: &DeviceConfig,
        sampler: AnalogSampler<A>,
        pwm: P,
        display: D,
        toggles: &'a ToggleState,
    ) -> Self {
        let cursor = CursorMapper::from_config(config);
        Self {
            sampler,
            pwm,
            display,
            toggles,
            brightness: BrightnessMapper::from_config(config),
            position: cursor.home(),
            cursor,
            cursor_size: config.cursor.size,
            border: config.display.border.into(),
            redraw: config.render.redraw,
            pwm_enabled: toggles.pwm_enabled(),
            border_visible: toggles.border_visible(),
        }
    }

    /// Draw the first frame
    ///
    /// Applies the current LED gate, strokes the border if visible and puts
    /// the cursor at its home position.
    pub fn begin(&mut self) {
        self.pwm_enabled = self.toggles.pwm_enabled();
        self.pwm.set_enabled(self.pwm_enabled);

        self.border_visible = self.toggles.border_visible();
        if self.border_visible {
            self.display
                .draw_rectangle(self.border, PixelColor::On, Fill::Outline);
        }

        self.display
            .draw_rectangle(self.square(self.position), PixelColor::On, Fill::Solid);
        self.display.flush();
    }

    /// Run one iteration
    pub fn step(&mut self) -> Frame {
        let sample = self.sampler.sample();

        let gate_changed = self.sync_gate();

        // Gated off: duty registers keep their last values
        let brightness = if self.pwm_enabled {
            let level = self.brightness.map(sample);
            self.pwm.set_channel_level(PwmChannel::A, level.a);
            self.pwm.set_channel_level(PwmChannel::B, level.b);
            Some(level)
        } else {
            None
        };

        let border_changed = self.sync_border();

        let previous = self.position;
        self.position = self.cursor.map(sample, previous);

        let redrawn = match self.redraw {
            RedrawPolicy::Always => true,
            RedrawPolicy::OnChange => self.position != previous || border_changed.is_some(),
        };
        if redrawn {
            self.redraw_cursor(previous);
        }

        Frame {
            sample,
            brightness,
            position: self.position,
            gate_changed,
            border_changed,
            redrawn,
        }
    }

    /// Current cursor position
    pub fn position(&self) -> CursorPosition {
        self.position
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    fn sync_gate(&mut self) -> Option<bool> {
        let enabled = self.toggles.pwm_enabled();
        if enabled == self.pwm_enabled {
            return None;
        }
        self.pwm.set_enabled(enabled);
        self.pwm_enabled = enabled;
        Some(enabled)
    }

    fn sync_border(&mut self) -> Option<bool> {
        let visible = self.toggles.border_visible();
        if visible == self.border_visible {
            return None;
        }
        self.display
            .draw_rectangle(self.border, PixelColor::from(visible), Fill::Outline);
        self.border_visible = visible;
        Some(visible)
    }

    fn redraw_cursor(&mut self, previous: CursorPosition) {
        self.display
            .draw_rectangle(self.square(previous), PixelColor::Off, Fill::Solid);
        // The square can reach the bottom border line; stroke it again so
        // erasing never leaves a gap
        if self.border_visible {
            self.display
                .draw_rectangle(self.border, PixelColor::On, Fill::Outline);
        }
        self.display
            .draw_rectangle(self.square(self.position), PixelColor::On, Fill::Solid);
        self.display.flush();
    }

    fn square(&self, position: CursorPosition) -> Rect {
        Rect::square(position.row, position.col, self.cursor_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::input::sampler::tests::MockAdc;

    const LOG_LEN: usize = 8;

    /// Recording LED slice
    #[derive(Default)]
    struct MockPwm {
        enabled: bool,
        levels: [u16; 2],
        level_writes: u32,
        enable_writes: u32,
    }

    impl PwmSlice for MockPwm {
        fn set_channel_level(&mut self, channel: PwmChannel, level: u16) {
            let index = match channel {
                PwmChannel::A => 0,
                PwmChannel::B => 1,
            };
            self.levels[index] = level;
            self.level_writes += 1;
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
            self.enable_writes += 1;
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }
    }

    /// Display recording the draws since the last flush
    #[derive(Default)]
    struct MockDisplay {
        pending: [Option<(Rect, PixelColor, Fill)>; LOG_LEN],
        pending_len: usize,
        flushed: [Option<(Rect, PixelColor, Fill)>; LOG_LEN],
        flushes: u32,
    }

    impl MockDisplay {
        fn flushed(&self) -> impl Iterator<Item = (Rect, PixelColor, Fill)> + '_ {
            self.flushed.iter().flatten().copied()
        }
    }

    impl DisplaySink for MockDisplay {
        fn draw_rectangle(&mut self, rect: Rect, color: PixelColor, fill: Fill) {
            self.pending[self.pending_len] = Some((rect, color, fill));
            self.pending_len += 1;
        }

        fn flush(&mut self) {
            self.flushed = core::mem::take(&mut self.pending);
            self.pending_len = 0;
            self.flushes += 1;
        }
    }

    const BORDER: Rect = Rect::new(3, 3, 122, 60);

    fn render_loop<'a>(
        config: &DeviceConfig,
        x: u16,
        y: u16,
        toggles: &'a ToggleState,
    ) -> RenderLoop<'a, MockAdc, MockPwm, MockDisplay> {
        RenderLoop::from_config(
            config,
            AnalogSampler::new(MockAdc::new(x, y)),
            MockPwm::default(),
            MockDisplay::default(),
            toggles,
        )
    }

    fn set_stick(render: &mut RenderLoop<'_, MockAdc, MockPwm, MockDisplay>, x: u16, y: u16) {
        render.sampler = AnalogSampler::new(MockAdc::new(x, y));
    }

    #[test]
    fn test_begin_draws_border_and_home() {
        let config = DeviceConfig::default();
        let toggles = ToggleState::new();
        let mut render = render_loop(&config, 2048, 2048, &toggles);
        render.begin();

        let flushed: [_; 2] = {
            let mut it = render.display().flushed();
            [it.next(), it.next()]
        };
        assert_eq!(flushed[0], Some((BORDER, PixelColor::On, Fill::Outline)));
        assert_eq!(
            flushed[1],
            Some((Rect::square(28, 60, 8), PixelColor::On, Fill::Solid))
        );
        assert!(render.pwm().is_enabled());
        assert_eq!(render.display().flushes, 1);
    }

    #[test]
    fn test_begin_skips_hidden_border() {
        let config = DeviceConfig::default();
        let toggles = ToggleState::with_state(false, false);
        let mut render = render_loop(&config, 2048, 2048, &toggles);
        render.begin();

        assert_eq!(render.display().flushed().count(), 1);
        assert!(!render.pwm().is_enabled());
    }

    #[test]
    fn test_step_moves_cursor_and_sets_levels() {
        let config = DeviceConfig::default();
        let toggles = ToggleState::new();
        let mut render = render_loop(&config, 500, 3500, &toggles);
        render.begin();

        let frame = render.step();
        // 500 / 64 = 7, 3500 / 32 = 109
        assert_eq!(frame.position, CursorPosition::new(7, 109));
        assert_eq!(frame.brightness, Some(BrightnessLevel { a: 1548, b: 1452 }));
        assert_eq!(render.pwm().levels, [1548, 1452]);
        assert!(frame.redrawn);

        let mut flushed = render.display().flushed();
        assert_eq!(
            flushed.next(),
            Some((Rect::square(28, 60, 8), PixelColor::Off, Fill::Solid))
        );
        assert_eq!(flushed.next(), Some((BORDER, PixelColor::On, Fill::Outline)));
        assert_eq!(
            flushed.next(),
            Some((Rect::square(7, 109, 8), PixelColor::On, Fill::Solid))
        );
        assert_eq!(flushed.next(), None);
    }

    #[test]
    fn test_centred_stick_holds_leds_off() {
        let config = DeviceConfig::default();
        let toggles = ToggleState::new();
        let mut render = render_loop(&config, 2048, 2000, &toggles);
        render.begin();

        let frame = render.step();
        assert_eq!(frame.brightness, Some(BrightnessLevel { a: 0, b: 0 }));
        // 2048 / 64 = 32, 2000 / 32 = 62
        assert_eq!(frame.position, CursorPosition::new(32, 62));
    }

    #[test]
    fn test_out_of_range_axis_holds_position() {
        let config = DeviceConfig::default();
        let toggles = ToggleState::new();
        let mut render = render_loop(&config, 4095, 4095, &toggles);
        render.begin();

        // 4095 / 64 = 63 and 4095 / 32 = 127, both past the interior
        let frame = render.step();
        assert_eq!(frame.position, CursorPosition::new(28, 60));

        set_stick(&mut render, 4095, 1000);
        let frame = render.step();
        assert_eq!(frame.position, CursorPosition::new(28, 31));
    }

    #[test]
    fn test_gate_off_skips_level_writes() {
        let config = DeviceConfig::default();
        let toggles = ToggleState::new();
        let mut render = render_loop(&config, 500, 500, &toggles);
        render.begin();
        render.step();
        let writes = render.pwm().level_writes;

        toggles.toggle_pwm();
        set_stick(&mut render, 4000, 4000);
        let frame = render.step();

        assert_eq!(frame.gate_changed, Some(false));
        assert_eq!(frame.brightness, None);
        assert!(!render.pwm().is_enabled());
        assert_eq!(render.pwm().level_writes, writes);
        // Not re-zeroed
        assert_eq!(render.pwm().levels, [1548, 1548]);
    }

    #[test]
    fn test_gate_applied_once() {
        let config = DeviceConfig::default();
        let toggles = ToggleState::new();
        let mut render = render_loop(&config, 2048, 2048, &toggles);
        render.begin();
        assert_eq!(render.pwm().enable_writes, 1);

        toggles.toggle_pwm();
        render.step();
        render.step();
        assert_eq!(render.pwm().enable_writes, 2);

        toggles.toggle_pwm();
        let frame = render.step();
        assert_eq!(frame.gate_changed, Some(true));
        assert!(frame.brightness.is_some());
        assert_eq!(render.pwm().enable_writes, 3);
    }

    #[test]
    fn test_border_hidden_on_toggle() {
        let config = DeviceConfig::default();
        let toggles = ToggleState::new();
        let mut render = render_loop(&config, 2048, 2048, &toggles);
        render.begin();

        toggles.set_border_visible(false);
        let frame = render.step();
        assert_eq!(frame.border_changed, Some(false));

        let mut flushed = render.display().flushed();
        assert_eq!(flushed.next(), Some((BORDER, PixelColor::Off, Fill::Outline)));
        // Hidden border is not stroked again during the redraw
        assert!(render
            .display()
            .flushed()
            .all(|(rect, color, _)| !(rect == BORDER && color == PixelColor::On)));
        drop(flushed);

        let frame = render.step();
        assert_eq!(frame.border_changed, None);
    }

    #[test]
    fn test_always_policy_redraws_still_cursor() {
        let config = DeviceConfig::default();
        let toggles = ToggleState::new();
        let mut render = render_loop(&config, 4095, 4095, &toggles);
        render.begin();

        assert!(render.step().redrawn);
        assert!(render.step().redrawn);
        assert_eq!(render.display().flushes, 3);
    }

    #[test]
    fn test_on_change_policy() {
        let config = DeviceConfig {
            render: RenderConfig {
                redraw: RedrawPolicy::OnChange,
            },
            ..DeviceConfig::default()
        };
        let toggles = ToggleState::new();
        let mut render = render_loop(&config, 4095, 4095, &toggles);
        render.begin();

        // Held at home: nothing to do
        assert!(!render.step().redrawn);
        assert_eq!(render.display().flushes, 1);

        toggles.set_border_visible(false);
        assert!(render.step().redrawn);

        set_stick(&mut render, 1000, 1000);
        assert!(render.step().redrawn);
        assert!(!render.step().redrawn);
        assert_eq!(render.display().flushes, 3);
    }
}
