use axum::{Json, extract::State};
use campusconnect_user::{CreateProfileInput, Profile, Session};
use serde::Serialize;

use super::AppState;
use crate::{
    auth::{AuthSession, MaybeSession},
    error::ApiResult,
    extract::ApiJson,
};

#[derive(Serialize)]
pub struct SessionResponse {
    authenticated: bool,
    #[serde(flatten)]
    session: Option<Session>,
}

/// GET /api/session - Resolved identity of the caller
pub async fn current(MaybeSession(session): MaybeSession) -> Json<SessionResponse> {
    Json(SessionResponse {
        authenticated: session.is_some(),
        session,
    })
}

/// POST /api/profile - Sign-up: store name and student id for the caller
pub async fn create_profile(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    ApiJson(input): ApiJson<CreateProfileInput>,
) -> ApiResult<Json<Profile>> {
    let profile = state
        .user_command
        .create_profile(&session.principal, input)
        .await?;

    Ok(Json(profile))
}

/// POST /api/profile/ensure - First sign-in through the identity provider
pub async fn ensure_profile(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
) -> ApiResult<Json<Profile>> {
    let profile = state.user_command.ensure_profile(&session.principal).await?;

    Ok(Json(profile))
}
