//! Metabolic analysis service
//!
//! Runs the four-stage pipeline (estimate, simulate, derive, classify) for
//! calculation requests and serves the read-only aggregations over stored
//! records. Each calculation fully completes, estimate through persist,
//! before the response is produced.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use chrono::{DateTime, Utc};
use metabolic_trend_shared::derivative::discrete_derivative;
use metabolic_trend_shared::energy::{estimate_energy, ActivityLevel};
use metabolic_trend_shared::models::{Profile, UserRecord};
use metabolic_trend_shared::simulation::simulate_calorie_series;
use metabolic_trend_shared::trend::{classify_trend, TrendLabel};
use metabolic_trend_shared::types::CalculateRequest;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

/// A stored calculation with its assigned id, full precision
#[derive(Debug, Clone)]
pub struct CalculationOutcome {
    pub id: u64,
    pub record: UserRecord,
}

/// One trend-listing row aggregated from a stored record, full precision
#[derive(Debug, Clone)]
pub struct TrendRow {
    pub id: u64,
    pub tdee: f64,
    pub avg_calories: f64,
    pub avg_derivative: f64,
    pub label: TrendLabel,
    pub timestamp: DateTime<Utc>,
}

/// Metabolic analysis service
pub struct AnalysisService;

impl AnalysisService {
    /// Run a calculation request through the full pipeline and persist the
    /// resulting record.
    ///
    /// The persistence step is all-or-nothing: the record is inserted into
    /// the loaded state and the whole state is written back while the
    /// process-wide write lock is held. Nothing is persisted if any stage
    /// fails.
    pub async fn calculate(
        state: &AppState,
        request: CalculateRequest,
    ) -> ApiResult<CalculationOutcome> {
        let resolved = ActivityLevel::resolve(&request.activity);
        if !resolved.recognized {
            // Policy preserved from the original design: unknown tokens
            // silently fall back to the sedentary factor at the API level
            warn!(
                token = %request.activity,
                "unrecognized activity token, applying sedentary factor"
            );
        }

        let estimate = estimate_energy(request.weight, request.height, request.age, resolved.level);

        let sim = &state.config().simulation;
        let mut rng = ChaCha8Rng::seed_from_u64(sim.seed);
        let series =
            simulate_calorie_series(estimate.tdee, sim.days, sim.noise_std_dev, &mut rng);

        let days: Vec<i64> = series.iter().map(|s| s.day).collect();
        let calories: Vec<f64> = series.iter().map(|s| s.calories).collect();
        let derivatives = discrete_derivative(&calories, &days);
        let analysis = classify_trend(&derivatives);

        let record = UserRecord {
            profile: Profile {
                weight_kg: request.weight,
                height_cm: request.height,
                age_years: request.age,
                activity: resolved.level,
                activity_token: request.activity,
            },
            bmr: estimate.bmr,
            tdee: estimate.tdee,
            series,
            derivatives,
            analysis,
            created_at: Utc::now(),
        };

        // Lock spans the whole load-modify-save so concurrent requests in
        // this process cannot interleave their writes
        let guard = state.lock_writes().await;
        let mut data = state.store().load().await.map_err(ApiError::Internal)?;
        let id = data.next_id();
        data.users.insert(id, record.clone());
        state.store().save(&data).await.map_err(ApiError::Internal)?;
        drop(guard);

        info!(
            id,
            bmr = record.bmr,
            tdee = record.tdee,
            label = ?record.analysis.label,
            "calculation stored"
        );

        Ok(CalculationOutcome { id, record })
    }

    /// Aggregate every stored record into a trend-listing row, ascending id
    /// order. Reads only; no new computation beyond the means.
    pub async fn list_trends(state: &AppState) -> ApiResult<Vec<TrendRow>> {
        let data = state.store().load().await.map_err(ApiError::Internal)?;

        Ok(data
            .users
            .iter()
            .map(|(id, record)| {
                let calories: Vec<f64> = record.series.iter().map(|s| s.calories).collect();
                TrendRow {
                    id: *id,
                    tdee: record.tdee,
                    avg_calories: mean(&calories),
                    avg_derivative: mean(&record.derivatives),
                    label: record.analysis.label,
                    timestamp: record.created_at,
                }
            })
            .collect())
    }

    /// The most recently stored record, if any
    pub async fn latest(state: &AppState) -> ApiResult<Option<CalculationOutcome>> {
        let data = state.store().load().await.map_err(ApiError::Internal)?;

        Ok(data.latest().map(|(id, record)| CalculationOutcome {
            id,
            record: record.clone(),
        }))
    }
}

/// Arithmetic mean; 0.0 for an empty slice (hand-edited data files may
/// carry empty series)
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
