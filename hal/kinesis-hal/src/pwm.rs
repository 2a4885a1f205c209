//! PWM abstractions
//!
//! A slice is one PWM counter driving two compare channels. Both channels
//! share the counter, the wrap value and the enable bit.

/// Compare channel within a PWM slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmChannel {
    /// Channel A (even GPIO on RP2040)
    A,
    /// Channel B (odd GPIO on RP2040)
    B,
}

/// Two-channel PWM slice
///
/// Wrap value and clock divider are fixed when the slice is configured at
/// startup; only the compare levels and the enable bit change at runtime.
pub trait PwmSlice {
    /// Set the compare level of one channel
    ///
    /// Levels above the wrap value are written as-is; the counter then keeps
    /// the output asserted for the whole period.
    fn set_channel_level(&mut self, channel: PwmChannel, level: u16);

    /// Start or stop the slice counter
    ///
    /// Stopping does not clear the compare levels, so re-enabling resumes
    /// with the last duty values.
    fn set_enabled(&mut self, enabled: bool);

    /// Check if the slice counter is running
    fn is_enabled(&self) -> bool;
}
