//! Synthetic daily-calorie series generation
//!
//! Produces the illustrative 30-day caloric trend the analyzer operates on.
//! The RNG is passed in by the caller rather than pulled from process-wide
//! state, so a fixed seed gives byte-identical series across runs.

use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

/// Default seed for the simulated series. Every run with this seed and the
/// same TDEE produces the identical noise pattern; a known limitation of the
/// illustrative simulation, kept for reproducibility.
pub const DEFAULT_SEED: u64 = 42;

/// Default number of simulated days
pub const DEFAULT_DAYS: u32 = 30;

/// Default standard deviation of the daily noise, in kcal
pub const DEFAULT_NOISE_STD_DEV: f64 = 100.0;

/// One simulated day of caloric expenditure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyCalories {
    /// Day index, starting at 1
    pub day: i64,
    /// Simulated expenditure in kcal
    pub calories: f64,
}

/// Generate a simulated daily-calorie series centered on `tdee`.
///
/// Each of the `days` points is TDEE plus an independent sample from
/// Normal(0, `noise_std_dev`), drawn in increasing day order. Day indices
/// run 1..=days.
///
/// A negative `noise_std_dev` has no defined distribution and degenerates
/// to a noiseless series.
pub fn simulate_calorie_series(
    tdee: f64,
    days: u32,
    noise_std_dev: f64,
    rng: &mut ChaCha8Rng,
) -> Vec<DailyCalories> {
    let noise = Normal::new(0.0, noise_std_dev).ok();

    (1..=i64::from(days))
        .map(|day| {
            let offset = noise.as_ref().map_or(0.0, |n| n.sample(rng));
            DailyCalories {
                day,
                calories: tdee + offset,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn test_series_has_requested_length_and_days() {
        let mut rng = ChaCha8Rng::seed_from_u64(DEFAULT_SEED);
        let series = simulate_calorie_series(2000.0, 30, 100.0, &mut rng);

        assert_eq!(series.len(), 30);
        let days: Vec<i64> = series.iter().map(|s| s.day).collect();
        assert_eq!(days, (1..=30).collect::<Vec<i64>>());
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let mut rng_a = ChaCha8Rng::seed_from_u64(DEFAULT_SEED);
        let mut rng_b = ChaCha8Rng::seed_from_u64(DEFAULT_SEED);

        let series_a = simulate_calorie_series(1978.5, 30, 100.0, &mut rng_a);
        let series_b = simulate_calorie_series(1978.5, 30, 100.0, &mut rng_b);

        // Bit-for-bit identical, not just approximately equal
        for (a, b) in series_a.iter().zip(series_b.iter()) {
            assert_eq!(a.day, b.day);
            assert_eq!(a.calories.to_bits(), b.calories.to_bits());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut rng_a = ChaCha8Rng::seed_from_u64(1);
        let mut rng_b = ChaCha8Rng::seed_from_u64(2);

        let series_a = simulate_calorie_series(2000.0, 30, 100.0, &mut rng_a);
        let series_b = simulate_calorie_series(2000.0, 30, 100.0, &mut rng_b);

        assert_ne!(series_a, series_b);
    }

    #[test]
    fn test_zero_noise_yields_flat_series() {
        let mut rng = ChaCha8Rng::seed_from_u64(DEFAULT_SEED);
        let series = simulate_calorie_series(1800.0, 10, 0.0, &mut rng);

        assert!(series.iter().all(|s| s.calories == 1800.0));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// Property: series length always equals the requested day count
        #[test]
        fn prop_series_length(tdee in 1000.0f64..4000.0, days in 0u32..100) {
            let mut rng = ChaCha8Rng::seed_from_u64(DEFAULT_SEED);
            let series = simulate_calorie_series(tdee, days, 100.0, &mut rng);
            prop_assert_eq!(series.len(), days as usize);
        }

        /// Property: day indices are 1..=days in order
        #[test]
        fn prop_days_ascending_from_one(tdee in 1000.0f64..4000.0, days in 1u32..100) {
            let mut rng = ChaCha8Rng::seed_from_u64(DEFAULT_SEED);
            let series = simulate_calorie_series(tdee, days, 100.0, &mut rng);
            for (i, sample) in series.iter().enumerate() {
                prop_assert_eq!(sample.day, i as i64 + 1);
            }
        }

        /// Property: same seed and inputs reproduce the same series
        #[test]
        fn prop_determinism(tdee in 1000.0f64..4000.0, seed in 0u64..1000) {
            let mut rng_a = ChaCha8Rng::seed_from_u64(seed);
            let mut rng_b = ChaCha8Rng::seed_from_u64(seed);
            let a = simulate_calorie_series(tdee, 30, 100.0, &mut rng_a);
            let b = simulate_calorie_series(tdee, 30, 100.0, &mut rng_b);
            prop_assert_eq!(a, b);
        }
    }
}
