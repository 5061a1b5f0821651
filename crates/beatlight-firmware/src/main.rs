#![no_std]
#![no_main]
#![feature(type_alias_impl_trait)]

mod infrastructure;

use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Ticker};

use esp_backtrace as _;
use esp_hal::analog::adc::{Adc, AdcConfig, Attenuation};
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};

use beatlight_stage::{BeatClock, LightStage};

use crate::infrastructure::config;
use crate::infrastructure::drivers::{EspLedDriver, knob_hue};
use crate::infrastructure::types::StageDriver;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Bind the strip
    let driver = EspLedDriver::new(peripherals.RMT, crate::stage_gpio!(peripherals))
        .unwrap_or_else(|err| panic!("stage: failed to configure RMT: {:?}", err));
    let mut stage: LightStage<StageDriver> =
        LightStage::new(config::STAGE.pin, config::STAGE.inverted);
    stage
        .init(driver)
        .unwrap_or_else(|err| panic!("stage: {}", err));

    // Hue knobs on ADC1
    let mut adc_config = AdcConfig::new();
    let mut stage_knob =
        adc_config.enable_pin(crate::stage_knob_gpio!(peripherals), Attenuation::_11dB);
    let mut backdrop_knob =
        adc_config.enable_pin(crate::backdrop_knob_gpio!(peripherals), Attenuation::_11dB);
    let mut adc = Adc::new(peripherals.ADC1, adc_config);

    let clock = BeatClock::new(config::TEMPO.bpm);
    let started = Instant::now();
    let mut ticker = Ticker::every(Duration::from_millis(config::TEMPO.poll_interval_ms));
    log::info!(
        "beatlight: {} bpm, polling every {} ms",
        clock.bpm(),
        config::TEMPO.poll_interval_ms
    );

    loop {
        let beat = clock.beat_at(started.elapsed());
        let stage_hue = knob_hue(crate::read_knob!(adc, stage_knob));
        let backdrop_hue = knob_hue(crate::read_knob!(adc, backdrop_knob));

        if let Err(err) = stage.update_beat(beat, stage_hue, backdrop_hue) {
            log::warn!("stage: update rejected: {}", err);
        }

        ticker.next().await;
    }
}
