//! Property tests for the rotation detector, odometer and unit conversion

use proptest::prelude::*;

use velometer_core::detector::Transition;
use velometer_core::units::{FEET_PER_MILE, SECONDS_PER_HOUR};
use velometer_core::{DisplayMode, Odometer, RotationDetector, RotationEvent};

const LOW: u16 = 1500;
const HIGH: u16 = 2500;

fn dead_zone() -> impl Strategy<Value = u16> {
    (LOW + 1)..HIGH
}

fn count_rotations(detector: &mut RotationDetector, readings: &[u16]) -> usize {
    readings
        .iter()
        .filter(|&&r| detector.update(r) == Some(Transition::MarkerLeft))
        .count()
}

proptest! {
    #[test]
    fn dark_then_light_fires_exactly_once(
        before in prop::collection::vec(dead_zone(), 0..20),
        dark in 0..=LOW,
        between in prop::collection::vec(prop_oneof![dead_zone(), 0..=LOW], 0..20),
        light in HIGH..=4095u16,
        after in prop::collection::vec(dead_zone(), 0..20),
    ) {
        let mut readings = before;
        readings.push(dark);
        readings.extend(between);
        readings.push(light);
        readings.extend(after);

        let mut detector = RotationDetector::new(LOW, HIGH, 1);
        prop_assert_eq!(count_rotations(&mut detector, &readings), 1);
    }

    #[test]
    fn dead_zone_never_fires(
        readings in prop::collection::vec(dead_zone(), 0..200),
        start_dark in any::<bool>(),
    ) {
        let mut detector = RotationDetector::new(LOW, HIGH, 1);
        if start_dark {
            detector.update(0);
        }
        let phase = detector.phase();

        prop_assert_eq!(count_rotations(&mut detector, &readings), 0);
        prop_assert_eq!(detector.phase(), phase);
    }

    #[test]
    fn miles_roundtrip(v in 0.0f64..1.0e6) {
        let mph = DisplayMode::Miles.convert_speed(v);
        let back = mph * FEET_PER_MILE / SECONDS_PER_HOUR;
        prop_assert!((back - v).abs() <= v.abs() * 1e-9);
    }

    #[test]
    fn distance_grows_one_circumference_per_pair(
        gaps in prop::collection::vec(1u64..5000, 1..40),
        circumference in 0.5f64..10.0,
    ) {
        let mut odometer = Odometer::new(circumference);
        let mut now = 0u64;
        let mut pairs = 0u32;

        odometer.record(RotationEvent::at(now));
        for (i, gap) in gaps.iter().enumerate() {
            now += gap;
            let result = odometer.record(RotationEvent::at(now));
            if i % 2 == 0 {
                pairs += 1;
                let m = result.unwrap();
                let expected_speed = circumference / (*gap as f64 / 1000.0);
                prop_assert!((m.speed_fps - expected_speed).abs() <= expected_speed * 1e-12);
            } else {
                prop_assert!(result.is_none());
            }
        }

        let expected = circumference * pairs as f64;
        prop_assert!((odometer.measurement().distance_ft - expected).abs() <= expected * 1e-12);
    }
}
