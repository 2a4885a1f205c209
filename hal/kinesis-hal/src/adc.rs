//! Analog input abstraction
//!
//! Models a single converter with an input multiplexer, the way most
//! microcontroller ADCs work: select a channel, then run a conversion.

/// Multiplexed analog-to-digital converter
///
/// Conversions are blocking and always complete. A converter that cannot
/// complete a conversion is a hardware fault; implementations must not
/// report it per sample (see `kinesis_core::input::AnalogSampler::probe`
/// for the startup check).
pub trait AnalogInput {
    /// Route the converter input to `channel`
    fn select_channel(&mut self, channel: u8);

    /// Run one conversion on the selected channel and return the raw value
    fn read_raw(&mut self) -> u16;

    /// Number of bits produced by a conversion
    fn resolution_bits(&self) -> u8 {
        12
    }

    /// Largest raw value a conversion can produce
    fn raw_max(&self) -> u16 {
        ((1u32 << self.resolution_bits()) - 1) as u16
    }
}
