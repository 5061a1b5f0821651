#![no_std]

//! Beat stage - 8 pixel beat sequence visualizer
//!
//! Architecture layers:
//! - `driver` - Hardware abstraction (`[LedDriver]` trait)
//! - `strip` - Fixed-size pixel buffer bound to a driver
//! - `color` - HSV on a 16-bit hue wheel, gamma correction, packing
//! - `math` - Integer range mapping for knob and hue values
//! - `clock` - Tempo to beat slot conversion
//! - `stage` - The change-detecting beat renderer
//!
//! The stage is generic over `LedDriver`, so it runs the same on the
//! RMT-driven strip and against a recording driver on the host.

pub mod clock;
pub mod color;
pub mod driver;
pub mod error;
pub mod math;
pub mod stage;
pub mod strip;

pub use clock::BeatClock;
pub use color::Rgb;
pub use driver::LedDriver;
pub use error::StageError;
pub use stage::{BeatInputs, LightStage, STAGE_PIXELS, StagePalette, StageUpdate};
pub use strip::PixelStrip;
