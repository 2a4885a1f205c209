//! embedded-graphics backend for the Kinesis render loop
//!
//! This crate provides:
//! - `Flush` trait for buffered draw targets that push a frame to the panel
//! - `GraphicsSink`, a [`DisplaySink`] over any monochrome buffered target,
//!   optionally checked against the configured panel size
//!
//! # Architecture
//!
//! The render loop in `kinesis-core` only knows about rectangles and
//! flushes. `GraphicsSink` turns those into embedded-graphics primitives and
//! keeps transport failures away from the loop: a failed flush is counted
//! and the next flush resends the whole buffer.
//!
//! The controller driver (for example `ssd1306` in buffered graphics mode)
//! is wrapped by the firmware and only needs to implement `DrawTarget` with
//! `BinaryColor` plus [`Flush`].
//!
//! [`DisplaySink`]: kinesis_core::traits::DisplaySink

#![no_std]

pub mod backend;
pub mod sink;

pub use backend::{Flush, FlushError};
pub use sink::{GraphicsSink, SizeMismatch};
