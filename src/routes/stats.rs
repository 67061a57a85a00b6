use axum::{Json, extract::State};

use super::AppState;
use crate::{
    auth::AdminSession,
    error::ApiResult,
    query::{DashboardStats, query_dashboard_stats},
};

/// GET /api/admin/stats
pub async fn dashboard(
    State(state): State<AppState>,
    AdminSession(_): AdminSession,
) -> ApiResult<Json<DashboardStats>> {
    Ok(Json(query_dashboard_stats(&state.pool).await?))
}
