/// Largest value of a 10-bit input (knob or hue)
pub const MAX_10BIT: u16 = 1023;

/// Number of positions on the 16-bit hue wheel
pub const HUE_WHEEL: u32 = 1 << 16;

/// Re-map a number from one range to another
///
/// Integer linear interpolation, truncating toward zero. Values outside of
/// the input range are extrapolated, not clamped.
#[inline]
pub const fn map_range(value: i64, in_min: i64, in_max: i64, out_min: i64, out_max: i64) -> i64 {
    if in_max == in_min {
        return out_min;
    }
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Scale a 10-bit hue (0-1023) onto the 16-bit hue wheel
///
/// # Returns
/// * `hue` - in `1..=65536`; 65536 is the same wheel position as 0
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn hue10_to_hue16(value: u16) -> u32 {
    map_range(value as i64, 0, MAX_10BIT as i64, 1, HUE_WHEEL as i64) as u32
}

/// Fold a scaled hue back onto the wheel
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn wheel_hue(hue: u32) -> u16 {
    (hue % HUE_WHEEL) as u16
}

/// Convert a sample between bit resolutions
///
/// Used to bring 12-bit ADC readings down to the 10-bit hue domain.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn rescale_bits(value: u16, from_bits: u32, to_bits: u32) -> u16 {
    if from_bits >= to_bits {
        match value.checked_shr(from_bits - to_bits) {
            Some(scaled) => scaled,
            None => 0,
        }
    } else {
        match (value as u32).checked_shl(to_bits - from_bits) {
            Some(scaled) => scaled as u16,
            None => 0,
        }
    }
}
