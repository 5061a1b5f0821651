//! Shared test driver

use beatlight_stage::{LedDriver, LightStage, Rgb, STAGE_PIXELS};

/// Driver that keeps every frame it was asked to write
#[derive(Default)]
pub struct RecordingDriver {
    pub frames: Vec<[Rgb; STAGE_PIXELS]>,
}

impl LedDriver<STAGE_PIXELS> for RecordingDriver {
    fn write(&mut self, colors: &[Rgb; STAGE_PIXELS]) {
        self.frames.push(*colors);
    }
}

/// Stage on pin 6 with the recording driver already bound
#[allow(dead_code)]
pub fn ready_stage(inverted: bool) -> LightStage<RecordingDriver> {
    let mut stage = LightStage::new(6, inverted);
    stage.init(RecordingDriver::default()).unwrap();
    stage
}

/// Number of frames written so far (including the blanking frame from `init`)
#[allow(dead_code)]
pub fn writes(stage: &LightStage<RecordingDriver>) -> usize {
    stage.strip().map_or(0, |strip| strip.driver().frames.len())
}

/// Most recent frame written to the driver
#[allow(dead_code)]
pub fn last_frame(stage: &LightStage<RecordingDriver>) -> [Rgb; STAGE_PIXELS] {
    *stage.strip().unwrap().driver().frames.last().unwrap()
}
