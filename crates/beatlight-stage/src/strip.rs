//! Pixel strip - color buffer bound to an LED driver
//!
//! Edits only touch the buffer; nothing reaches the hardware until
//! [`PixelStrip::show`] is called.

use crate::{color::Rgb, driver::LedDriver};

const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Fixed-length pixel buffer that owns its driver
pub struct PixelStrip<D: LedDriver<N>, const N: usize> {
    driver: D,
    pixels: [Rgb; N],
}

impl<D: LedDriver<N>, const N: usize> PixelStrip<D, N> {
    /// Bind a driver to a blank buffer
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            pixels: [BLACK; N],
        }
    }

    /// Number of pixels on the strip
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Set every pixel to black
    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Rgb) {
        self.pixels = [color; N];
    }

    /// Set a single pixel
    ///
    /// Indices past the end of the strip are ignored.
    ///
    /// # Returns
    /// * `true` if the pixel exists and was written
    pub fn set_pixel(&mut self, index: usize, color: Rgb) -> bool {
        match self.pixels.get_mut(index) {
            Some(pixel) => {
                *pixel = color;
                true
            }
            None => false,
        }
    }

    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        self.pixels.get(index).copied()
    }

    pub fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    /// Transmit the buffer to the hardware
    pub fn show(&mut self) {
        self.driver.write(&self.pixels);
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
