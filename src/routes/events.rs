use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use campusconnect_event::{CreateEventInput, Event, FilterQuery, UpdateEventInput};
use serde_json::{Value, json};

use super::AppState;
use crate::{
    auth::AdminSession,
    error::ApiResult,
    extract::{ApiJson, ApiQuery},
};

/// GET /api/events?category=&search=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(input): ApiQuery<FilterQuery>,
) -> ApiResult<Json<Vec<Event>>> {
    let events = campusconnect_event::Query(state.pool.clone())
        .filter(input)
        .await?;

    Ok(Json(events))
}

/// GET /api/events/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Event>> {
    find(&state, id).await.map(Json)
}

/// POST /api/events
pub async fn create(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    ApiJson(input): ApiJson<CreateEventInput>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let id = state.event_command.create(input).await?;

    tracing::info!(admin_user_id = %session.user_id(), event_id = %id, "admin created event");

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// PUT /api/events/{id}
pub async fn update(
    State(state): State<AppState>,
    AdminSession(_): AdminSession,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<UpdateEventInput>,
) -> ApiResult<Json<Event>> {
    state.event_command.update(&id, input).await?;

    find(&state, id).await.map(Json)
}

/// DELETE /api/events/{id}
pub async fn remove(
    State(state): State<AppState>,
    AdminSession(_): AdminSession,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.event_command.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn find(state: &AppState, id: String) -> ApiResult<Event> {
    match campusconnect_event::Query(state.pool.clone())
        .find(&id)
        .await?
    {
        Some(event) => Ok(event),
        None => Err(campusconnect_shared::Error::not_found("event", id).into()),
    }
}
