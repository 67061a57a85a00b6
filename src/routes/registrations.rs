use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use campusconnect_registration::{RegisterInput, Registration};
use campusconnect_shared::Error;
use serde::Deserialize;
use serde_json::{Value, json};

use super::AppState;
use crate::{
    auth::{AdminSession, AuthSession},
    error::ApiResult,
    extract::ApiJson,
};

/// Registration form. Omitted fields are prefilled from the caller's profile.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct RegisterRequest {
    pub student_name: Option<String>,
    pub student_id: Option<String>,
    pub student_email: Option<String>,
}

fn query(state: &AppState) -> campusconnect_registration::Query {
    campusconnect_registration::Query(state.pool.clone())
}

/// GET /api/events/{id}/registered
pub async fn registered(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(event_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let registered = query(&state)
        .is_registered(session.user_id(), event_id)
        .await?;

    Ok(Json(json!({ "registered": registered })))
}

/// POST /api/events/{id}/registrations
pub async fn register(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(event_id): Path<String>,
    ApiJson(input): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    super::events::find(&state, event_id.to_owned()).await?;

    if query(&state)
        .is_registered(session.user_id(), &event_id)
        .await?
    {
        return Err(Error::DuplicateRegistration.into());
    }

    let profile = session.profile.as_ref();
    let student_name = input
        .student_name
        .or_else(|| profile.and_then(|p| p.name.to_owned()))
        .or_else(|| session.principal.name.to_owned())
        .unwrap_or_default();
    let student_id = input
        .student_id
        .or_else(|| profile.and_then(|p| p.student_id.to_owned()))
        .unwrap_or_default();
    let student_email = input.student_email.or_else(|| session.email());

    let id = state
        .registration_command
        .register(RegisterInput {
            event_id,
            user_id: session.user_id().to_owned(),
            student_name,
            student_id,
            student_email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// GET /api/events/{id}/registrations - Attendees, missing emails repaired first
pub async fn for_event(
    State(state): State<AppState>,
    AdminSession(_): AdminSession,
    Path(event_id): Path<String>,
) -> ApiResult<Json<Vec<Registration>>> {
    state
        .registration_command
        .reconcile_emails(&event_id)
        .await?;

    Ok(Json(query(&state).list_for_event(event_id).await?))
}

/// GET /api/registrations - Registrations of the caller
pub async fn mine(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
) -> ApiResult<Json<Vec<Registration>>> {
    Ok(Json(query(&state).list_for_user(session.user_id()).await?))
}

/// DELETE /api/registrations/{id}
pub async fn withdraw(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let Some(registration) = query(&state).find(&id).await? else {
        return Ok(StatusCode::NO_CONTENT);
    };

    if registration.user_id != session.user_id() && !session.is_admin() {
        tracing::warn!(
            user_id = %session.user_id(),
            registration_id = %id,
            "withdrawal of another user's registration refused"
        );
        return Err(Error::Forbidden.into());
    }

    state.registration_command.withdraw(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
