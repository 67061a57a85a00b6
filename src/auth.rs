use std::{
    convert::Infallible,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use axum_extra::extract::CookieJar;
use campusconnect_user::{Principal, Session};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{config::JwtConfig, error::ApiError, routes::AppState};

pub const AUTH_COOKIE_NAME: &str = "auth_token";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    aud: String,
    exp: u64,
    iat: u64,
    iss: String,
    sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        Principal {
            id: claims.sub,
            email: claims.email,
            name: claims.name,
        }
    }
}

pub fn generate_token(config: &JwtConfig, principal: &Principal) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let claims = Claims {
        aud: config.audience.to_owned(),
        exp: now + config.expiration_days * 24 * 60 * 60,
        iat: now,
        iss: config.issuer.to_owned(),
        sub: principal.id.to_owned(),
        email: principal.email.to_owned(),
        name: principal.name.to_owned(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(token)
}

pub fn decode_token(config: &JwtConfig, token: &str) -> Option<Principal> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[config.issuer.to_owned()]);
    validation.set_audience(&[config.audience.to_owned()]);

    match decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    ) {
        Ok(data) => Some(data.claims.into()),
        Err(e) => {
            tracing::debug!("rejected auth token: {e}");
            None
        }
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_owned())
}

/// Session of the caller, `None` when signed out or the token is invalid.
///
/// Resolved once per request and cached in the request extensions.
#[derive(Clone)]
pub struct MaybeSession(pub Option<Session>);

impl FromRequestParts<AppState> for MaybeSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(session) = parts.extensions.get::<MaybeSession>() {
            return Ok(session.clone());
        }

        let token = match bearer_token(parts) {
            Some(token) => Some(token),
            None => CookieJar::from_request_parts(parts, state)
                .await
                .ok()
                .and_then(|jar| jar.get(AUTH_COOKIE_NAME).map(|c| c.value().to_owned())),
        };

        let principal = token.and_then(|token| decode_token(&state.config.jwt, &token));
        let session = MaybeSession(state.resolver.resolve(principal).await);
        parts.extensions.insert(session.clone());

        Ok(session)
    }
}

pub struct AuthSession(pub Session);

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Ok(MaybeSession(session)) = MaybeSession::from_request_parts(parts, state).await;

        Ok(AuthSession(campusconnect_user::require_session(session)?))
    }
}

pub struct AdminSession(pub Session);

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthSession(session) = AuthSession::from_request_parts(parts, state).await?;

        if let Err(e) = session.require_admin() {
            tracing::warn!(user_id = %session.user_id(), "non-admin attempted admin route");
            return Err(e.into());
        }

        Ok(AdminSession(session))
    }
}
