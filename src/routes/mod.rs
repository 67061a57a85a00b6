use axum::{
    Router,
    routing::{delete, get, post},
};
use sqlx::SqlitePool;

use crate::config::Config;

mod events;
mod health;
mod registrations;
mod session;
mod stats;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub resolver: campusconnect_user::Resolver,
    pub user_command: campusconnect_user::Command,
    pub event_command: campusconnect_event::Command,
    pub registration_command: campusconnect_registration::Command,
    /// Read-only pool for queries.
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(config: Config, state: campusconnect_shared::State) -> Self {
        let resolver = campusconnect_user::Resolver::new(
            state.read_db.clone(),
            config.identity.seed_admin_email.to_owned(),
        );

        Self {
            config,
            resolver,
            user_command: campusconnect_user::Command::new(state.clone()),
            event_command: campusconnect_event::Command::new(state.clone()),
            registration_command: campusconnect_registration::Command::new(state.clone()),
            pool: state.read_db,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/api/session", get(session::current))
        .route("/api/profile", post(session::create_profile))
        .route("/api/profile/ensure", post(session::ensure_profile))
        .route("/api/events", get(events::list).post(events::create))
        .route(
            "/api/events/{id}",
            get(events::detail).put(events::update).delete(events::remove),
        )
        .route("/api/events/{id}/registered", get(registrations::registered))
        .route(
            "/api/events/{id}/registrations",
            get(registrations::for_event).post(registrations::register),
        )
        .route("/api/registrations", get(registrations::mine))
        .route("/api/registrations/{id}", delete(registrations::withdraw))
        .route("/api/admin/stats", get(stats::dashboard))
        .with_state(app_state)
}
