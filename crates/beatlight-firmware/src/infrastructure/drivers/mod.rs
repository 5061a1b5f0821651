mod knob;
mod led;

pub(crate) use knob::knob_hue;
pub(crate) use led::EspLedDriver;
