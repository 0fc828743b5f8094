//! Energy expenditure estimation
//!
//! Provides BMR and TDEE calculations based on submitted profile data.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Evidence-Based**: Mifflin-St Jeor, the standard clinical estimate
//! 3. **Type Safety**: Strong typing prevents unit confusion

use serde::{Deserialize, Serialize};

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Heavy,
    /// Very hard exercise or physical job
    VeryHeavy,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Heavy => 1.725,
            ActivityLevel::VeryHeavy => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Heavy => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryHeavy => "Very hard exercise or physical job",
        }
    }

    /// The token used in request payloads and persisted profiles
    pub fn token(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Heavy => "heavy",
            ActivityLevel::VeryHeavy => "very_heavy",
        }
    }

    /// Resolve an activity token from a request payload.
    ///
    /// Unrecognized tokens fall back to [`ActivityLevel::Sedentary`]; the
    /// `recognized` flag on the result lets callers surface the fallback
    /// instead of losing it. The request itself never fails on a bad token.
    pub fn resolve(token: &str) -> ResolvedActivity {
        let level = match token {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" => Some(ActivityLevel::Light),
            "moderate" => Some(ActivityLevel::Moderate),
            "heavy" => Some(ActivityLevel::Heavy),
            "very_heavy" => Some(ActivityLevel::VeryHeavy),
            _ => None,
        };

        ResolvedActivity {
            level: level.unwrap_or_default(),
            recognized: level.is_some(),
        }
    }
}

/// Outcome of resolving an activity token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedActivity {
    pub level: ActivityLevel,
    /// False when the token was unknown and the sedentary factor was applied
    pub recognized: bool,
}

/// Energy estimation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    /// Basal Metabolic Rate in kcal/day
    pub bmr: f64,
    /// Total Daily Energy Expenditure in kcal/day
    pub tdee: f64,
    /// Activity multiplier applied to BMR
    pub activity_multiplier: f64,
}

/// Calculate Basal Metabolic Rate.
///
/// Unisex Mifflin-St Jeor approximation without the sex term:
/// BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
///
/// The sexed variants differ by a constant offset; this service keeps the
/// male-form constant as a deliberate simplification.
pub fn estimate_bmr(weight_kg: f64, height_cm: f64, age_years: i32) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64 + 5.0
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn estimate_tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

/// Calculate complete energy estimate for a profile
pub fn estimate_energy(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    activity: ActivityLevel,
) -> EnergyEstimate {
    let bmr = estimate_bmr(weight_kg, height_cm, age_years);

    EnergyEstimate {
        bmr,
        tdee: estimate_tdee(bmr, activity),
        activity_multiplier: activity.multiplier(),
    }
}
