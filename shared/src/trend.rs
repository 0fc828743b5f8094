//! Metabolic trend classification
//!
//! Compares the average slope of the most recent derivative window against
//! the window before it to label the metabolic trend.

use serde::{Deserialize, Serialize};

/// Number of derivative points in each slope window
const SLOPE_WINDOW: usize = 3;

/// Ratio below which the decline counts as significant (>30% drop)
const SIGNIFICANT_DECLINE_RATIO: f64 = 0.7;

/// Metabolic trend classification label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendLabel {
    /// Fewer than 3 derivative points; no classification attempted
    InsufficientData,
    /// Recent slope dropped more than 30% below the previous window
    SignificantDecline,
    /// Recent slope below the previous window, within 30%
    MildDecline,
    /// Recent slope at or above the previous window
    StableOrIncreasing,
}

impl TrendLabel {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            TrendLabel::InsufficientData => "insufficient data",
            TrendLabel::SignificantDecline => "significant decline",
            TrendLabel::MildDecline => "mild decline trend detected",
            TrendLabel::StableOrIncreasing => "stable or increasing",
        }
    }
}

/// Trend classification result with the slopes that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub label: TrendLabel,
    /// Mean of the last 3 derivative values; None when data was insufficient
    pub recent_slope: Option<f64>,
    /// Mean of the 3 values before the recent window; equals `recent_slope`
    /// when fewer than 6 points exist
    pub previous_slope: Option<f64>,
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Classify the metabolic trend from a derivative sequence.
///
/// Two-window moving-average slope comparison:
/// - fewer than 3 points: [`TrendLabel::InsufficientData`], terminal;
/// - recent = mean of the last 3 values, previous = mean of the 3 values
///   before those (or recent itself when fewer than 6 points exist);
/// - recent < previous × 0.7: significant decline;
/// - recent < previous: mild decline;
/// - otherwise stable or increasing.
///
/// Comparisons are strict, so exact ties land in the stable branch.
pub fn classify_trend(derivatives: &[f64]) -> TrendAnalysis {
    if derivatives.len() < SLOPE_WINDOW {
        return TrendAnalysis {
            label: TrendLabel::InsufficientData,
            recent_slope: None,
            previous_slope: None,
        };
    }

    let len = derivatives.len();
    let recent_slope = mean(&derivatives[len - SLOPE_WINDOW..]);
    let previous_slope = if len >= 2 * SLOPE_WINDOW {
        mean(&derivatives[len - 2 * SLOPE_WINDOW..len - SLOPE_WINDOW])
    } else {
        recent_slope
    };

    let label = if recent_slope < previous_slope * SIGNIFICANT_DECLINE_RATIO {
        TrendLabel::SignificantDecline
    } else if recent_slope < previous_slope {
        TrendLabel::MildDecline
    } else {
        TrendLabel::StableOrIncreasing
    };

    TrendAnalysis {
        label,
        recent_slope: Some(recent_slope),
        previous_slope: Some(previous_slope),
    }
}
