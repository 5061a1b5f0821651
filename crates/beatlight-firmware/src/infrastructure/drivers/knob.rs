use beatlight_stage::math::{MAX_10BIT, rescale_bits};

use crate::infrastructure::config;

/// Hue input resolution
const HUE_BITS: u32 = 10;

/// Convert a raw knob sample into a 10-bit hue
pub(crate) fn knob_hue(raw: u16) -> u16 {
    rescale_bits(raw, config::KNOBS.adc_bits, HUE_BITS).min(MAX_10BIT)
}

/// Blocking one-shot read of a knob pin
#[macro_export]
macro_rules! read_knob {
    ($adc:expr, $pin:expr) => {{
        loop {
            if let Ok(raw) = $adc.read_oneshot(&mut $pin) {
                break raw;
            }
        }
    }};
}
