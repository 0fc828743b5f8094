//! Metabolic calculation and trend API routes

use crate::error::ApiError;
use crate::services::analysis::{AnalysisService, CalculationOutcome};
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use metabolic_trend_shared::types::{
    CalculateRequest, CalculateResponse, DashboardResponse, TrendSummary,
};

/// Create metabolism routes
pub fn metabolism_routes() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(calculate))
        .route("/trend", get(get_trend))
        .route("/dashboard", get(get_dashboard))
}

/// Round to 2 decimal places. Applied at the response boundary only;
/// stored records keep full precision.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// POST /api/v1/calculate - Run the full analysis pipeline
///
/// Estimates BMR/TDEE from the submitted profile, simulates the 30-day
/// calorie series, derives dE/dt, classifies the trend, and persists the
/// record. Missing or non-numeric fields are rejected by JSON extraction
/// before the pipeline runs, so no partial record is ever stored.
async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let CalculationOutcome { record, .. } = AnalysisService::calculate(&state, request).await?;

    Ok(Json(CalculateResponse {
        bmr: round2(record.bmr),
        tdee: round2(record.tdee),
        days: record.series.iter().map(|s| s.day).collect(),
        calories: record.series.iter().map(|s| round2(s.calories)).collect(),
        derivatives: record.derivatives.iter().copied().map(round2).collect(),
        analysis: record.analysis.label.description().to_string(),
    }))
}

/// GET /api/v1/trend - Read-only trend listing
///
/// One summary row per stored record, ascending id order, aggregated from
/// persisted data without re-running the pipeline. An empty store yields an
/// empty list.
async fn get_trend(State(state): State<AppState>) -> Result<Json<Vec<TrendSummary>>, ApiError> {
    let rows = AnalysisService::list_trends(&state).await?;

    let summaries = rows
        .into_iter()
        .map(|row| TrendSummary {
            id: format!("user_{}", row.id),
            tdee: round2(row.tdee),
            avg_calories: round2(row.avg_calories),
            avg_derivative: round2(row.avg_derivative),
            analysis: row.label.description().to_string(),
            timestamp: row.timestamp,
        })
        .collect();

    Ok(Json(summaries))
}

/// GET /api/v1/dashboard - Latest stored record
async fn get_dashboard(State(state): State<AppState>) -> Result<Json<DashboardResponse>, ApiError> {
    let latest = AnalysisService::latest(&state).await?;

    let response = match latest {
        None => DashboardResponse::empty(),
        Some(CalculationOutcome { record, .. }) => DashboardResponse {
            has_data: true,
            message: None,
            days: Some(record.series.iter().map(|s| s.day).collect()),
            calories: Some(record.series.iter().map(|s| s.calories).collect()),
            derivatives: Some(record.derivatives.clone()),
            analysis: Some(record.analysis.label.description().to_string()),
            profile: Some(record.profile),
        },
    };

    Ok(Json(response))
}
