//! Display task
//!
//! Sole owner of the LCD. Redraws the whole screen whenever the rotation
//! loop or the button task asks for it, using the latest measurement and
//! the current display mode.

use defmt::*;

use velometer_core::render::{render, render_splash, DISPLAY_COLS, DISPLAY_ROWS};
use velometer_core::traits::CharDisplay;

use crate::board::Lcd;
use crate::channels::{latest_measurement, DISPLAY_MODE, REDRAW};
use crate::config::CONFIG;

/// Display task
#[embassy_executor::task]
pub async fn display_task(mut lcd: Lcd) {
    info!("Display task started");

    if let Err(e) = lcd.init(DISPLAY_COLS, DISPLAY_ROWS) {
        error!("LCD init failed: {:?}", e);
    }
    if let Err(e) = render_splash(&mut lcd) {
        warn!("Failed to draw splash: {:?}", e);
    }

    loop {
        let cause = REDRAW.wait().await;
        let mode = DISPLAY_MODE.load();
        let measurement = latest_measurement();

        trace!("Redraw ({}) in {}", cause, mode);

        if let Err(e) = render(&mut lcd, mode, &measurement, CONFIG.decimals) {
            warn!("Failed to draw screen: {:?}", e);
        }
    }
}
