//! Mode button task
//!
//! Waits for rising edges on the mode button and cycles the display units.
//! Edges inside the debounce window are contact bounce and are dropped.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use velometer_core::ModeSelector;

use crate::channels::{RedrawCause, DISPLAY_MODE, REDRAW};
use crate::config::CONFIG;

/// Mode button task
#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>) {
    info!("Mode button task started");

    let mut selector = ModeSelector::new(CONFIG.debounce_ms);

    loop {
        button.wait_for_rising_edge().await;
        let now_ms = Instant::now().as_millis();

        match selector.press(now_ms, &DISPLAY_MODE) {
            Some(mode) => {
                info!("Display mode: {}", mode.label());
                REDRAW.signal(RedrawCause::ModeChanged);
            }
            None => trace!("Button bounce ignored at {} ms", now_ms),
        }
    }
}
