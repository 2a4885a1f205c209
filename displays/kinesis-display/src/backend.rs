//! Buffered display backend trait

/// Flush failure reported by a backend
///
/// Backends map their driver errors onto this so the sink can count them
/// without knowing the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlushError {
    /// Bus transfer to the controller failed
    Communication,
}

/// Draw target with an off-screen frame buffer
pub trait Flush {
    /// Send the frame buffer to the panel
    fn flush(&mut self) -> Result<(), FlushError>;
}
