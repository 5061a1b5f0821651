use esp_hal::xtensa_lx::interrupt;
use esp_hal::{gpio::interconnect::PeripheralOutput, peripherals::RMT, rmt::Rmt, time::Rate};
use esp_hal_smartled::{SmartLedsAdapter, buffer_size, smart_led_buffer};
use smart_leds::SmartLedsWrite;
use static_cell::make_static;

use beatlight_stage::{LedDriver, Rgb, STAGE_PIXELS};

/// WS2812 stage driver on the RMT peripheral
///
/// The RMT (Remote Control) peripheral generates the precise timing
/// signals required by WS2812B LEDs.
pub(crate) struct EspLedDriver<'a> {
    adapter: SmartLedsAdapter<'a, { buffer_size(STAGE_PIXELS) }>,
}

impl<'a> EspLedDriver<'a> {
    /// Create a new ESP LED driver
    ///
    /// # Arguments
    /// * `rmt` - RMT peripheral
    /// * `pin` - GPIO pin connected to the LED data line
    pub(crate) fn new<O>(rmt: RMT<'a>, pin: O) -> Result<Self, esp_hal::rmt::Error>
    where
        O: PeripheralOutput<'a>,
    {
        let rmt = Rmt::new(rmt, Rate::from_mhz(80))?;

        // Pulse buffer must outlive the adapter; only one driver is created
        let rmt_buffer = make_static!(smart_led_buffer!(STAGE_PIXELS));
        let adapter = SmartLedsAdapter::new(rmt.channel0, pin, rmt_buffer);

        Ok(Self { adapter })
    }
}

impl LedDriver<STAGE_PIXELS> for EspLedDriver<'static> {
    fn write(&mut self, colors: &[Rgb; STAGE_PIXELS]) {
        let result = interrupt::free(|| self.adapter.write(colors.iter().copied()));
        if let Err(err) = result {
            log::warn!("led: write failed: {:?}", err);
        }
    }
}
