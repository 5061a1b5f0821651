use super::Rgb;

/// Hue positions after folding the 16-bit wheel onto six 255-step ramps
const HUE_RAMP_STEPS: u32 = 1530;

/// Convert a color on the 16-bit hue wheel to RGB
///
/// # Arguments
/// * `hue` - Wheel position, 0 and 65535 are both red
/// * `sat` - Saturation (0 = white, 255 = pure hue)
/// * `val` - Value / brightness (0-255)
///
/// The result is linear; run it through [`super::gamma_correct`] before it
/// goes to the strip.
#[allow(clippy::cast_possible_truncation)]
pub fn color_hsv(hue: u16, sat: u8, val: u8) -> Rgb {
    // Round to the nearest ramp position; 65535 rounds up to 1530 (red again)
    let position = (u32::from(hue) * HUE_RAMP_STEPS + 0x8000) >> 16;

    let (r, g, b) = match position {
        0..255 => (255, position, 0),
        255..510 => (510 - position, 255, 0),
        510..765 => (0, 255, position - 510),
        765..1020 => (0, 1020 - position, 255),
        1020..1275 => (position - 1020, 0, 255),
        1275..1530 => (255, 0, 1530 - position),
        _ => (255, 0, 0),
    };

    let v1 = 1 + u32::from(val);
    let s1 = 1 + u32::from(sat);
    let s2 = 255 - u32::from(sat);

    let apply = |channel: u32| (((((channel * s1) >> 8) + s2) * v1) >> 8) as u8;

    Rgb {
        r: apply(r),
        g: apply(g),
        b: apply(b),
    }
}
