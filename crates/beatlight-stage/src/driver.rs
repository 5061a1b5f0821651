//! LED Driver abstraction layer
//!
//! Provides a trait-based abstraction for LED strip drivers,
//! allowing the stage to be hardware-agnostic.

use crate::color::Rgb;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// A write transmits the whole frame; there is no partial update.
pub trait LedDriver<const N: usize> {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb; N]);
}
