use core::iter;

use super::Rgb;

/// Apply the 8-bit LED gamma curve to a single color
///
/// Delegates to the `smart_leds` gamma table so the stage output matches
/// any other strip fed through `smart_leds::gamma`.
#[inline]
pub fn gamma_correct(color: Rgb) -> Rgb {
    smart_leds::gamma(iter::once(color))
        .next()
        .unwrap_or(color)
}
