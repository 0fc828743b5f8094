//! API request and response types

use crate::models::Profile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Calculation Types
// ============================================================================

/// Calculation request payload.
///
/// Missing or non-numeric fields fail JSON extraction at the boundary; the
/// activity token is free-form and resolved (with fallback) downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// Weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    /// Age in years
    pub age: i32,
    /// Activity level token (sedentary, light, moderate, heavy, very_heavy)
    pub activity: String,
}

/// Calculation response.
///
/// All floating-point values are rounded to 2 decimal places here, at the
/// boundary only; persisted records keep full precision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub bmr: f64,
    pub tdee: f64,
    /// Day indices 1..=30
    pub days: Vec<i64>,
    /// Simulated daily calories, one per day
    pub calories: Vec<f64>,
    /// Discrete dE/dt, one per day, first element 0
    pub derivatives: Vec<f64>,
    /// Human-readable trend label
    pub analysis: String,
}

// ============================================================================
// Trend Listing Types
// ============================================================================

/// One row of the read-only trend listing, aggregated from a stored record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Record identifier, e.g. "user_3"
    pub id: String,
    pub tdee: f64,
    /// Mean of the stored calorie series
    pub avg_calories: f64,
    /// Mean of the stored derivative series
    pub avg_derivative: f64,
    /// Human-readable trend label
    pub analysis: String,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Dashboard Types
// ============================================================================

/// Latest-record view for the dashboard.
///
/// `has_data` discriminates the empty store case; the data fields are only
/// present when a record exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub has_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivatives: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

impl DashboardResponse {
    /// The empty-store response
    pub fn empty() -> Self {
        Self {
            has_data: false,
            message: Some("No calculations recorded yet".to_string()),
            profile: None,
            days: None,
            calories: None,
            derivatives: None,
            analysis: None,
        }
    }
}
