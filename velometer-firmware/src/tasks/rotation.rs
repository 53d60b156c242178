//! Rotation timing loop
//!
//! Runs forever in thread mode: waits for each marker pass, feeds it to
//! the odometer and publishes every completed pair. Blocks without timeout
//! while the sensor never crosses a threshold.

use defmt::*;

use velometer_core::traits::{LightSensor, MarkerOutput};
use velometer_core::{Odometer, RotationDetector};

use crate::board::UptimeClock;
use crate::channels::publish_measurement;
use crate::config::CONFIG;

/// Detect rotations and publish speed/distance; never returns
pub fn rotation_loop<S: LightSensor, M: MarkerOutput>(sensor: &mut S, marker: &mut M) -> ! {
    info!(
        "Rotation loop started (dark <= {}, light >= {}, {} samples/reading)",
        CONFIG.low_threshold, CONFIG.high_threshold, CONFIG.samples_per_reading
    );

    let mut detector = RotationDetector::from_config(&CONFIG);
    let mut odometer = Odometer::from_config(&CONFIG);
    let clock = UptimeClock;

    loop {
        let event = detector.wait_for_rotation(sensor, &clock, marker);
        debug!("Marker pass at {} ms", event.timestamp_ms);

        if let Some(measurement) = odometer.record(event) {
            info!(
                "Speed {} ft/s, total {} ft",
                measurement.speed_fps, measurement.distance_ft
            );
            publish_measurement(measurement);
        }
    }
}
