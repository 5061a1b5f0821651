//! Error types for the beat stage

use core::fmt;

/// Error type for stage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageError {
    /// `update_beat` called before the output device was bound
    NotInitialized,
    /// `init` called on a stage that already owns an output device
    AlreadyInitialized,
    /// Deferred stage was never given a data pin
    PinNotAssigned,
    /// Beat index outside of the strip
    BeatOutOfRange(u8),
    /// Hue outside of the 10-bit input range
    HueOutOfRange(u16),
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageError::NotInitialized => write!(f, "Stage is not initialized"),
            StageError::AlreadyInitialized => write!(f, "Stage is already initialized"),
            StageError::PinNotAssigned => write!(f, "No data pin assigned"),
            StageError::BeatOutOfRange(beat) => write!(f, "Beat {} is out of range", beat),
            StageError::HueOutOfRange(hue) => write!(f, "Hue {} is out of range", hue),
        }
    }
}
