//! Light stage - renders the current beat onto an 8 pixel strip
//!
//! One pixel (the "stage") shows the active beat, every other pixel shows
//! a dimmer "backdrop" color. Rendering is gated on input changes: repeated
//! calls with the same beat and hues never touch the hardware.
//!
//! Lifecycle:
//! 1. [`LightStage::new`] (or [`LightStage::unassigned`] + [`LightStage::assign`])
//! 2. [`LightStage::init`] once the driver for the data pin exists
//! 3. [`LightStage::update_beat`] on every tick

use crate::{
    color::{Rgb, color_hsv, gamma_correct, pack_rgb},
    driver::LedDriver,
    error::StageError,
    math::{MAX_10BIT, hue10_to_hue16, wheel_hue},
    strip::PixelStrip,
};

/// Number of beats in the sequence, one pixel each
pub const STAGE_PIXELS: usize = 8;

const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Saturation and brightness fed into the HSV conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagePalette {
    /// Saturation for both colors (0-255)
    pub saturation: u8,
    /// Brightness of the active beat pixel (0-255)
    pub stage_brightness: u8,
    /// Brightness of the remaining pixels (0-255)
    pub backdrop_brightness: u8,
}

impl StagePalette {
    pub const DEFAULT: Self = Self {
        saturation: 255,
        stage_brightness: 120,
        backdrop_brightness: 50,
    };

    /// Gamma-corrected color of the active beat pixel
    pub fn stage_color(&self, hue: u16) -> Rgb {
        gamma_correct(color_hsv(
            wheel_hue(hue10_to_hue16(hue)),
            self.saturation,
            self.stage_brightness,
        ))
    }

    /// Gamma-corrected color of the backdrop pixels
    pub fn backdrop_color(&self, hue: u16) -> Rgb {
        gamma_correct(color_hsv(
            wheel_hue(hue10_to_hue16(hue)),
            self.saturation,
            self.backdrop_brightness,
        ))
    }
}

impl Default for StagePalette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Inputs of the last applied render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeatInputs {
    pub beat: u8,
    pub stage_hue: u16,
    pub backdrop_hue: u16,
}

/// Outcome of an accepted [`LightStage::update_beat`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageUpdate {
    /// Colors were recomputed and the strip was flushed
    Rendered,
    /// Inputs match the last render, nothing was written
    Unchanged,
}

/// Beat visualizer bound to an 8 pixel strip
pub struct LightStage<D: LedDriver<STAGE_PIXELS>> {
    pin: Option<u8>,
    inverted: bool,
    palette: StagePalette,
    /// Output device, `None` until `init`
    strip: Option<PixelStrip<D, STAGE_PIXELS>>,
    /// Inputs of the last render, `None` until the first one
    last: Option<BeatInputs>,
    stage_color: Rgb,
    backdrop_color: Rgb,
}

impl<D: LedDriver<STAGE_PIXELS>> LightStage<D> {
    /// Create a stage for the strip on `pin`
    ///
    /// # Arguments
    /// * `pin` - GPIO number of the strip data line
    /// * `inverted` - Strip is mounted backwards, beat 0 is the last pixel
    pub const fn new(pin: u8, inverted: bool) -> Self {
        Self {
            pin: Some(pin),
            inverted,
            palette: StagePalette::DEFAULT,
            strip: None,
            last: None,
            stage_color: BLACK,
            backdrop_color: BLACK,
        }
    }

    /// Create a stage whose pin is not known yet
    ///
    /// [`LightStage::assign`] must be called before [`LightStage::init`].
    pub const fn unassigned() -> Self {
        Self {
            pin: None,
            inverted: false,
            palette: StagePalette::DEFAULT,
            strip: None,
            last: None,
            stage_color: BLACK,
            backdrop_color: BLACK,
        }
    }

    /// Replace the saturation and brightness values
    #[must_use]
    pub fn with_palette(mut self, palette: StagePalette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the data pin and orientation of a deferred stage
    pub fn assign(&mut self, pin: u8, inverted: bool) -> Result<(), StageError> {
        if self.strip.is_some() {
            return Err(StageError::AlreadyInitialized);
        }
        self.pin = Some(pin);
        self.inverted = inverted;
        Ok(())
    }

    /// Bind the output device, then blank the strip
    pub fn init(&mut self, driver: D) -> Result<(), StageError> {
        if self.strip.is_some() {
            return Err(StageError::AlreadyInitialized);
        }
        let pin = self.pin.ok_or(StageError::PinNotAssigned)?;

        let mut strip = PixelStrip::new(driver);
        strip.clear();
        strip.show();
        self.strip = Some(strip);

        log::info!(
            "stage: bound {} pixels on GPIO{} (inverted={})",
            STAGE_PIXELS,
            pin,
            self.inverted
        );
        Ok(())
    }

    /// Show `beat` in the stage color over a backdrop
    ///
    /// # Arguments
    /// * `beat` - Active beat, 0-7
    /// * `stage_hue` - Hue of the active beat pixel, 0-1023
    /// * `backdrop_hue` - Hue of every other pixel, 0-1023
    ///
    /// Rejected calls leave both the strip and the remembered inputs as
    /// they were.
    pub fn update_beat(
        &mut self,
        beat: u8,
        stage_hue: u16,
        backdrop_hue: u16,
    ) -> Result<StageUpdate, StageError> {
        let Some(strip) = self.strip.as_mut() else {
            return Err(StageError::NotInitialized);
        };
        if usize::from(beat) >= STAGE_PIXELS {
            return Err(StageError::BeatOutOfRange(beat));
        }
        for hue in [stage_hue, backdrop_hue] {
            if hue > MAX_10BIT {
                return Err(StageError::HueOutOfRange(hue));
            }
        }

        let inputs = BeatInputs {
            beat,
            stage_hue,
            backdrop_hue,
        };
        if self.last == Some(inputs) {
            log::trace!("stage: beat {} unchanged", beat);
            return Ok(StageUpdate::Unchanged);
        }

        self.stage_color = self.palette.stage_color(stage_hue);
        self.backdrop_color = self.palette.backdrop_color(backdrop_hue);

        strip.clear();
        strip.fill(self.backdrop_color);
        strip.set_pixel(pixel_index(beat, self.inverted), self.stage_color);
        strip.show();

        self.last = Some(inputs);
        log::debug!(
            "stage: beat {} stage=#{:06X} backdrop=#{:06X}",
            beat,
            pack_rgb(self.stage_color),
            pack_rgb(self.backdrop_color)
        );
        Ok(StageUpdate::Rendered)
    }

    /// Strip pixel that shows `beat`, `None` past the last beat
    pub fn pixel_for_beat(&self, beat: u8) -> Option<usize> {
        (usize::from(beat) < STAGE_PIXELS).then(|| pixel_index(beat, self.inverted))
    }

    pub fn pin(&self) -> Option<u8> {
        self.pin
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn is_initialized(&self) -> bool {
        self.strip.is_some()
    }

    pub fn palette(&self) -> StagePalette {
        self.palette
    }

    /// Inputs of the last render
    pub fn last_inputs(&self) -> Option<BeatInputs> {
        self.last
    }

    /// Last stage color (0xRRGGBB format)
    pub fn stage_color(&self) -> u32 {
        pack_rgb(self.stage_color)
    }

    /// Last backdrop color (0xRRGGBB format)
    pub fn backdrop_color(&self) -> u32 {
        pack_rgb(self.backdrop_color)
    }

    pub fn strip(&self) -> Option<&PixelStrip<D, STAGE_PIXELS>> {
        self.strip.as_ref()
    }
}

impl<D: LedDriver<STAGE_PIXELS>> Default for LightStage<D> {
    fn default() -> Self {
        Self::unassigned()
    }
}

fn pixel_index(beat: u8, inverted: bool) -> usize {
    let beat = usize::from(beat);
    if inverted {
        STAGE_PIXELS - 1 - beat
    } else {
        beat
    }
}
