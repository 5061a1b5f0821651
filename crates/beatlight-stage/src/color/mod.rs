mod gamma;
mod hsv;

use smart_leds::RGB8;

pub use gamma::gamma_correct;
pub use hsv::color_hsv;

pub type Rgb = RGB8;

/// Pack an RGB color into a u32 value (0xRRGGBB format)
pub const fn pack_rgb(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Brightest channel of a color
#[inline]
pub fn peak(color: Rgb) -> u8 {
    color.r.max(color.g).max(color.b)
}
