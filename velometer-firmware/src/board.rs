//! Board glue
//!
//! Adapts RP2040 peripherals to the velometer-core traits.
//!
//! Pin assignments (Raspberry Pi Pico):
//!
//! | Function         | GPIO        |
//! |------------------|-------------|
//! | Light sensor     | GP26 (ADC0) |
//! | Marker buzzer    | GP14        |
//! | Mode button      | GP15        |
//! | LCD RS / E       | GP16 / GP17 |
//! | LCD D4-D7        | GP18-GP21   |

use defmt::*;
use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::Output;
use embassy_time::{Delay, Instant};

use velometer_core::traits::{Clock, LightSensor};
use velometer_drivers::display::Hd44780;
use velometer_drivers::indicator::GpioMarker;

/// The 16x2 LCD as wired on this board
pub type Lcd = Hd44780<Output<'static>, Delay>;

/// The marker buzzer as wired on this board
pub type Buzzer = GpioMarker<Output<'static>>;

/// Reflective sensor on an ADC pin, read with blocking conversions
pub struct AdcLightSensor {
    adc: Adc<'static, Blocking>,
    channel: Channel<'static>,
    /// Last good conversion, repeated if one fails
    last: u16,
}

impl AdcLightSensor {
    pub fn new(adc: Adc<'static, Blocking>, channel: Channel<'static>) -> Self {
        Self {
            adc,
            channel,
            last: 0,
        }
    }
}

impl LightSensor for AdcLightSensor {
    fn sample(&mut self) -> u16 {
        match self.adc.blocking_read(&mut self.channel) {
            Ok(value) => {
                self.last = value;
                value
            }
            Err(e) => {
                trace!("ADC conversion failed: {:?}", e);
                self.last
            }
        }
    }
}

/// Milliseconds since boot from the embassy time driver
pub struct UptimeClock;

impl Clock for UptimeClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
