pub(crate) struct StageConfig {
    /// GPIO number of the strip data line, must match `stage_gpio!`
    pub pin: u8,
    pub inverted: bool,
}

pub(crate) struct TempoConfig {
    pub bpm: u16,
    pub poll_interval_ms: u64,
}

pub(crate) struct KnobConfig {
    /// Resolution of one-shot ADC samples
    pub adc_bits: u32,
}

#[cfg(feature = "reversed")]
pub(crate) const STAGE: StageConfig = StageConfig {
    pin: 25,
    inverted: true,
};
#[cfg(not(feature = "reversed"))]
pub(crate) const STAGE: StageConfig = StageConfig {
    pin: 25,
    inverted: false,
};

pub(crate) const TEMPO: TempoConfig = TempoConfig {
    bpm: 120,
    poll_interval_ms: 10,
};

pub(crate) const KNOBS: KnobConfig = KnobConfig { adc_bits: 12 };

#[macro_export]
macro_rules! stage_gpio {
    ($p:expr) => {
        $p.GPIO25
    };
}

/// Knob for the active beat hue (ADC1 channel 6)
#[macro_export]
macro_rules! stage_knob_gpio {
    ($p:expr) => {
        $p.GPIO34
    };
}

/// Knob for the backdrop hue (ADC1 channel 7)
#[macro_export]
macro_rules! backdrop_knob_gpio {
    ($p:expr) => {
        $p.GPIO35
    };
}
