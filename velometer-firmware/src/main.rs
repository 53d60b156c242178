//! Velometer - Wheel Speedometer Firmware
//!
//! Main firmware binary for RP2040-based bike computers.
//!
//! A reflective marker on the wheel passes an optical sensor once per
//! revolution. The rotation loop times each pass in thread mode; the mode
//! button and the LCD are served by an interrupt-priority executor, so a
//! button press preempts the polling loop just like an edge interrupt.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::InterruptExecutor;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use velometer_drivers::display::{Hd44780, Hd44780Pins};
use velometer_drivers::indicator::GpioMarker;

use crate::board::AdcLightSensor;

mod board;
mod channels;
mod config;
mod tasks;

/// Executor for the button and display tasks
static EXECUTOR_UI: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_UI.on_interrupt()
}

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Velometer firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!(
        "Wheel {} in, circumference {} ft",
        config::CONFIG.wheel_diameter_in,
        config::CONFIG.wheel_circumference_ft()
    );

    // Setup 16x2 LCD (4-bit parallel, R/W tied low)
    let lcd = Hd44780::new(
        Hd44780Pins {
            rs: Output::new(p.PIN_16, Level::Low),
            en: Output::new(p.PIN_17, Level::Low),
            data: [
                Output::new(p.PIN_18, Level::Low),
                Output::new(p.PIN_19, Level::Low),
                Output::new(p.PIN_20, Level::Low),
                Output::new(p.PIN_21, Level::Low),
            ],
        },
        Delay,
    );

    // Mode button: active high, external press pulls to 3V3
    let button = Input::new(p.PIN_15, Pull::Down);

    // UI tasks preempt the rotation loop
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_UI.start(interrupt::SWI_IRQ_1);
    spawner.spawn(tasks::display_task(lcd)).unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();

    info!("UI tasks spawned");

    // Setup light sensor and marker buzzer
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let channel = Channel::new_pin(p.PIN_26, Pull::None);
    let mut sensor = AdcLightSensor::new(adc, channel);
    let mut buzzer: board::Buzzer = GpioMarker::new_active_high(Output::new(p.PIN_14, Level::Low));

    // Thread mode belongs to the rotation loop from here on
    tasks::rotation_loop(&mut sensor, &mut buzzer)
}
