#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use campusconnect::{
    AppState,
    config::{
        Config, DatabaseConfig, IdentityConfig, JwtConfig, ObservabilityConfig, ServerConfig,
    },
};
use campusconnect_user::Principal;
use http_body_util::BodyExt;
use serde_json::Value;
use temp_dir::TempDir;
use tower::ServiceExt;

pub const SEED_ADMIN: &str = "admin@campusconnect.com";

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    // keeps the database file alive
    _dir: TempDir,
}

pub fn test_config(url: String) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        database: DatabaseConfig {
            url,
            max_connections: 2,
        },
        jwt: JwtConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_owned(),
            issuer: "campusconnect".to_owned(),
            audience: "campusconnect".to_owned(),
            expiration_days: 7,
        },
        identity: IdentityConfig {
            seed_admin_email: Some(SEED_ADMIN.to_owned()),
        },
        observability: ObservabilityConfig::default(),
    }
}

pub async fn setup_test_app() -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("db.sqlite3").to_str().unwrap());
    let pool = campusconnect::db::create_pool(&url, 2).await?;
    campusconnect::db::migrate(&pool).await?;

    let state = AppState::new(test_config(url), campusconnect_shared::State::single(pool));
    let app = campusconnect::server::app(state.clone());

    Ok(TestApp {
        app,
        state,
        _dir: dir,
    })
}

pub fn principal(name: &str) -> Principal {
    Principal {
        id: format!("uid-{name}"),
        email: Some(format!("{name}@campusconnect.localhost")),
        name: Some(name.to_owned()),
    }
}

pub fn seed_admin() -> Principal {
    Principal {
        id: "uid-seed".to_owned(),
        email: Some(SEED_ADMIN.to_owned()),
        name: None,
    }
}

impl TestApp {
    pub fn token(&self, principal: &Principal) -> String {
        campusconnect::auth::generate_token(&self.state.config.jwt, principal).unwrap()
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        principal: Option<&Principal>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(principal) = principal {
            builder = builder.header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.token(principal)),
            );
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, json)
    }

    /// Creates an event as the seed admin and returns its id.
    pub async fn create_event(&self, title: &str, date: &str) -> String {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/events",
                Some(&seed_admin()),
                Some(serde_json::json!({
                    "title": title,
                    "date": date,
                    "time": "18:00",
                    "location": "Main Hall",
                    "description": format!("{title} for all students"),
                    "category": "Technology",
                    "organizer": "Computing Society",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");

        body["id"].as_str().unwrap().to_owned()
    }

    /// Stores a profile for `principal` through the sign-up endpoint.
    pub async fn sign_up(&self, principal: &Principal, name: &str, student_id: &str) {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/profile",
                Some(principal),
                Some(serde_json::json!({ "name": name, "student_id": student_id })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
    }
}
