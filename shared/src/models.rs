//! Persisted data models for the Metabolic Trend Analyzer

use crate::energy::ActivityLevel;
use crate::simulation::DailyCalories;
use crate::trend::TrendAnalysis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Submitted profile, immutable once stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: i32,
    /// Resolved activity level
    pub activity: ActivityLevel,
    /// Raw activity token as submitted; kept so defaulted submissions stay
    /// auditable after the fact
    pub activity_token: String,
}

/// One completed calculation: profile, derived energy figures, the simulated
/// series and its analysis. Never mutated or deleted after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub profile: Profile,
    /// Basal Metabolic Rate in kcal/day, full precision
    pub bmr: f64,
    /// Total Daily Energy Expenditure in kcal/day, full precision
    pub tdee: f64,
    /// Simulated 30-day calorie series
    pub series: Vec<DailyCalories>,
    /// Discrete dE/dt of the series
    pub derivatives: Vec<f64>,
    pub analysis: TrendAnalysis,
    pub created_at: DateTime<Utc>,
}

/// Whole persisted state, read and written as one structure.
///
/// Records key on their sequential numeric id; `BTreeMap` iteration order is
/// ascending id, which is also insertion order, so the last entry is the
/// most recent calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetabolicData {
    #[serde(default)]
    pub users: BTreeMap<u64, UserRecord>,
    /// Free-form activity log retained for compatibility with existing data
    /// files; this service never appends to it
    #[serde(default)]
    pub activities: Vec<serde_json::Value>,
}

impl MetabolicData {
    /// Next sequential record id. Records are never deleted, so this is
    /// equivalent to count + 1, but stays correct for hand-pruned files.
    pub fn next_id(&self) -> u64 {
        self.users.keys().next_back().map_or(1, |id| id + 1)
    }

    /// Most recently created record, if any
    pub fn latest(&self) -> Option<(u64, &UserRecord)> {
        self.users.iter().next_back().map(|(id, record)| (*id, record))
    }
}
