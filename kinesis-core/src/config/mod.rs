//! Configuration types
//!
//! Board-agnostic tuning values. The firmware embeds them as postcard binary
//! data produced from `device.toml` at build time.

pub mod device;
#[cfg(any(test, feature = "std"))]
pub mod report;
pub mod types;

pub use device::*;
pub use types::*;
