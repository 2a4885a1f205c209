//! Configuration loading
//!
//! `build.rs` validates `device.toml` and embeds it as postcard binary. The
//! blob is decoded and validated again at boot.

use kinesis_core::config::{ConfigError, DeviceConfig};

/// Postcard-encoded `device.toml`, produced by the build script
static DEVICE_BIN: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/device.bin"));

/// Decode the embedded configuration
pub fn load() -> Result<DeviceConfig, ConfigError> {
    DeviceConfig::decode(DEVICE_BIN)
}
