// Synthetic sensor sample generator
use super::reading::{Daylight, SensorSample};
use rand::Rng;
use std::ops::RangeInclusive;

pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 20.0..=35.0;
pub const HUMIDITY_RANGE: RangeInclusive<f64> = 30.0..=70.0;
pub const SOIL_MOISTURE_RANGE: RangeInclusive<f64> = 50.0..=100.0;

/// Draw one sample from the given random source.
///
/// Values are uniform over their ranges and rounded to two decimal places.
/// Daylight is a fair coin flip.
pub fn generate_sample<R: Rng + ?Sized>(rng: &mut R) -> SensorSample {
    let temperature = round2(rng.random_range(TEMPERATURE_RANGE));
    let humidity = round2(rng.random_range(HUMIDITY_RANGE));
    let soil_moisture = round2(rng.random_range(SOIL_MOISTURE_RANGE));
    let daylight = if rng.random_bool(0.5) {
        Daylight::High
    } else {
        Daylight::Low
    };

    SensorSample::new(temperature, humidity, soil_moisture, daylight)
}

/// Draw one sample from the thread-local generator.
pub fn generate() -> SensorSample {
    generate_sample(&mut rand::rng())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5_000 {
            let s = generate_sample(&mut rng);
            assert!(TEMPERATURE_RANGE.contains(&s.temperature), "{}", s.temperature);
            assert!(HUMIDITY_RANGE.contains(&s.humidity), "{}", s.humidity);
            assert!(SOIL_MOISTURE_RANGE.contains(&s.soil_moisture), "{}", s.soil_moisture);
        }
    }

    #[test]
    fn test_two_decimal_places() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let s = generate_sample(&mut rng);
            for v in [s.temperature, s.humidity, s.soil_moisture] {
                assert!(((v * 100.0).round() - v * 100.0).abs() < 1e-6, "{}", v);
            }
        }
    }

    #[test]
    fn test_both_daylight_levels_occur() {
        let mut rng = StdRng::seed_from_u64(3);
        let samples: Vec<_> = (0..200).map(|_| generate_sample(&mut rng)).collect();
        assert!(samples.iter().any(|s| s.daylight == Daylight::High));
        assert!(samples.iter().any(|s| s.daylight == Daylight::Low));
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let a = generate_sample(&mut StdRng::seed_from_u64(42));
        let b = generate_sample(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(20.126), 20.13);
        assert_eq!(round2(34.999), 35.0);
    }
}
