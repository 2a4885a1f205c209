//! Sample-to-output mappings
//!
//! Both mappers are pure: they hold only fixed tuning values and compute
//! their result from the sample (and, for the cursor, the previous position).

pub mod brightness;
pub mod cursor;

pub use brightness::{BrightnessLevel, BrightnessMapper};
pub use cursor::{AxisLimits, CursorMapper, CursorPosition};
