//! Discrete derivative of the calorie series
//!
//! Computes dE/dt, the rate of change of caloric expenditure with respect
//! to time in days.

/// Compute the discrete derivative of `calories` with respect to `days`.
///
/// The output has the same length as the shorter of the two inputs. The
/// first element is always 0 (there is no preceding point). For i >= 1:
///
/// ```text
/// derivative[i] = (calories[i] - calories[i-1]) / (days[i] - days[i-1])
/// ```
///
/// A day delta that is not strictly positive yields 0 for that element;
/// divide-by-zero is a policy case here, not an error. Inputs shorter than
/// two points yield the single-element sequence `[0.0]`.
pub fn discrete_derivative(calories: &[f64], days: &[i64]) -> Vec<f64> {
    let len = calories.len().min(days.len());
    if len < 2 {
        return vec![0.0];
    }

    let mut derivatives = Vec::with_capacity(len);
    derivatives.push(0.0);

    for i in 1..len {
        let dt = days[i] - days[i - 1];
        if dt > 0 {
            let de = calories[i] - calories[i - 1];
            derivatives.push(de / dt as f64);
        } else {
            derivatives.push(0.0);
        }
    }

    derivatives
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unit_day_deltas() {
        let calories = [100.0, 110.0, 95.0, 95.0];
        let days = [1, 2, 3, 4];

        let derivatives = discrete_derivative(&calories, &days);

        assert_eq!(derivatives, vec![0.0, 10.0, -15.0, 0.0]);
    }

    #[test]
    fn test_wider_day_gap_scales_slope() {
        let calories = [100.0, 130.0];
        let days = [1, 4];

        let derivatives = discrete_derivative(&calories, &days);

        assert_eq!(derivatives, vec![0.0, 10.0]);
    }

    #[test]
    fn test_non_positive_day_delta_yields_zero() {
        let calories = [100.0, 200.0, 300.0];
        let days = [5, 5, 3];

        let derivatives = discrete_derivative(&calories, &days);

        assert_eq!(derivatives, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(discrete_derivative(&[], &[]), vec![0.0]);
    }

    #[test]
    fn test_single_point() {
        assert_eq!(discrete_derivative(&[1500.0], &[1]), vec![0.0]);
    }

    #[test]
    fn test_mismatched_lengths_truncate_to_shorter() {
        let calories = [100.0, 110.0, 120.0];
        let days = [1, 2];

        let derivatives = discrete_derivative(&calories, &days);

        assert_eq!(derivatives, vec![0.0, 10.0]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: output length equals input length (for matched inputs
        /// of 2+ points) and the first element is always 0
        #[test]
        fn prop_length_and_leading_zero(
            calories in prop::collection::vec(0.0f64..5000.0, 2..100)
        ) {
            let days: Vec<i64> = (1..=calories.len() as i64).collect();
            let derivatives = discrete_derivative(&calories, &days);

            prop_assert_eq!(derivatives.len(), calories.len());
            prop_assert_eq!(derivatives[0], 0.0);
        }

        /// Property: with unit day spacing, each element is the pairwise
        /// calorie difference
        #[test]
        fn prop_unit_spacing_is_difference(
            calories in prop::collection::vec(0.0f64..5000.0, 2..100)
        ) {
            let days: Vec<i64> = (1..=calories.len() as i64).collect();
            let derivatives = discrete_derivative(&calories, &days);

            for i in 1..calories.len() {
                prop_assert_eq!(derivatives[i], calories[i] - calories[i - 1]);
            }
        }

        /// Property: constant day indices never produce non-zero output or
        /// a panic, whatever the calorie values
        #[test]
        fn prop_zero_delta_never_divides(
            calories in prop::collection::vec(-5000.0f64..5000.0, 2..50),
            day in 1i64..100
        ) {
            let days = vec![day; calories.len()];
            let derivatives = discrete_derivative(&calories, &days);

            prop_assert!(derivatives.iter().all(|d| *d == 0.0));
        }
    }
}
