//! Statistics report endpoint
//!
//! The HTTP boundary of the aggregation core: loads the full task snapshot,
//! injects the wall clock, and serializes the report. Store failures are
//! the only error path; the aggregation itself never fails.

use axum::{extract::State, Extension, Json};
use chrono::Utc;
use taskboard_domain::{stats, TaskRepository};

use crate::{
    auth::AuthSession,
    error::ApiResult,
    models::StatisticsResponse,
    state::AppState,
};

/// Compute the aggregate statistics report
#[utoipa::path(
    get,
    path = "/api/v1/statistics",
    responses(
        (status = 200, description = "Statistics report", body = StatisticsResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Task store unavailable")
    ),
    security(("bearer_token" = []))
)]
pub async fn get_statistics(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
) -> ApiResult<Json<StatisticsResponse>> {
    let tasks = state.tasks.find_all().await?;
    let report = stats::compute(&tasks, Utc::now());

    if report.inverted_windows > 0 {
        tracing::warn!(
            count = report.inverted_windows,
            "statistics include tasks whose end time precedes their start time"
        );
    }
    tracing::debug!(
        user = %session.username,
        total = report.total_tasks,
        "statistics report computed"
    );

    Ok(Json(StatisticsResponse::from(&report)))
}
