//! Beat clock - maps elapsed time onto the 8 beat slots

use embassy_time::Duration;

use crate::stage::STAGE_PIXELS;

/// Microseconds in one minute
const MINUTE_MICROS: u64 = 60_000_000;

/// Fixed-tempo clock for the beat sequence
///
/// One beat slot lasts one quarter note; the sequence repeats every
/// [`STAGE_PIXELS`] beats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeatClock {
    bpm: u16,
}

impl BeatClock {
    /// Create a clock for the given tempo
    ///
    /// A tempo of zero is treated as 1 bpm.
    pub const fn new(bpm: u16) -> Self {
        Self {
            bpm: if bpm == 0 { 1 } else { bpm },
        }
    }

    pub const fn bpm(&self) -> u16 {
        self.bpm
    }

    /// Duration of a single beat slot
    pub const fn period(&self) -> Duration {
        Duration::from_micros(MINUTE_MICROS / self.bpm as u64)
    }

    /// Beat slot active after `elapsed` time since the sequence started
    #[allow(clippy::cast_possible_truncation)]
    pub fn beat_at(&self, elapsed: Duration) -> u8 {
        let beats = elapsed.as_micros() / self.period().as_micros();
        (beats % STAGE_PIXELS as u64) as u8
    }
}
