//! Metabolic Trend Analyzer Shared Library
//!
//! This crate contains the pure numeric pipeline (energy estimation, series
//! simulation, derivative computation, trend classification) plus the data
//! models and API types shared with the backend. No I/O happens here.

pub mod derivative;
pub mod energy;
pub mod models;
pub mod simulation;
pub mod trend;
pub mod types;

// Re-export commonly used items
pub use derivative::discrete_derivative;
pub use energy::{estimate_bmr, estimate_energy, estimate_tdee, ActivityLevel, EnergyEstimate};
pub use models::{MetabolicData, Profile, UserRecord};
pub use simulation::{simulate_calorie_series, DailyCalories};
pub use trend::{classify_trend, TrendAnalysis, TrendLabel};
pub use types::*;
