use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use campusconnect_user::Role;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

mod helpers;

#[tokio::test]
async fn test_session_signed_out() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;

    let (status, body) = app.request(Method::GET, "/api/session", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["authenticated"], false);
    assert!(body.get("role").is_none());

    Ok(())
}

#[tokio::test]
async fn test_session_seed_admin() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;

    let (status, body) = app
        .request(Method::GET, "/api/session", Some(&helpers::seed_admin()), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["role"], "admin");
    assert_eq!(body["profile"]["student_id"], "ADMIN");
    assert_eq!(body["principal"]["id"], "uid-seed");

    Ok(())
}

#[tokio::test]
async fn test_sign_up_and_ensure_profile() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;
    let jane = helpers::principal("jane");

    let (status, body) = app
        .request(Method::POST, "/api/profile/ensure", None, None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthenticated");

    let (status, body) = app
        .request(Method::POST, "/api/profile/ensure", Some(&jane), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "user");
    assert!(body["student_id"].is_null());

    app.sign_up(&jane, "Jane Roe", "S100").await;

    let (_, body) = app
        .request(Method::GET, "/api/session", Some(&jane), None)
        .await;
    assert_eq!(body["role"], "user");
    assert_eq!(body["profile"]["name"], "Jane Roe");
    assert_eq!(body["profile"]["student_id"], "S100");

    let (status, body) = app
        .request(
            Method::POST,
            "/api/profile",
            Some(&jane),
            Some(json!({ "name": "", "student_id": "S100" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation");

    Ok(())
}

#[tokio::test]
async fn test_events_listed_by_date() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;

    app.create_event("Career Fair", "2024-05-01").await;
    app.create_event("Hackathon", "2024-01-10").await;
    app.create_event("Robotics Expo", "2024-03-15").await;

    let (status, body) = app.request(Method::GET, "/api/events", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let dates = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap().to_owned())
        .collect::<Vec<_>>();
    assert_eq!(dates, vec!["2024-01-10", "2024-03-15", "2024-05-01"]);

    Ok(())
}

#[tokio::test]
async fn test_event_mutations_require_admin() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;
    let event = json!({
        "title": "Hackathon",
        "date": "2024-01-10",
        "time": "18:00",
        "location": "Main Hall",
        "description": "Build things",
        "category": "Technology",
        "organizer": "Computing Society",
    });

    let (status, _) = app
        .request(Method::POST, "/api/events", None, Some(event.clone()))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let student = helpers::principal("student");
    let (status, body) = app
        .request(Method::POST, "/api/events", Some(&student), Some(event.clone()))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "forbidden");

    // a stored admin role works the same as the seed admin
    let officer = helpers::principal("officer");
    app.sign_up(&officer, "Club Officer", "S1").await;
    app.state.user_command.set_role(&officer.id, Role::Admin).await?;

    let (status, body) = app
        .request(Method::POST, "/api/events", Some(&officer), Some(event))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_update_and_delete_event() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;
    let admin = helpers::seed_admin();
    let id = app.create_event("Hackathon", "2024-01-10").await;

    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/api/events/{id}"),
            Some(&admin),
            Some(json!({ "location": "Engineering Building" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Hackathon");
    assert_eq!(body["location"], "Engineering Building");

    let (status, body) = app
        .request(
            Method::PUT,
            "/api/events/missing",
            Some(&admin),
            Some(json!({ "title": "Renamed" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (status, _) = app
        .request(Method::DELETE, &format!("/api/events/{id}"), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .request(Method::DELETE, &format!("/api/events/{id}"), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app
        .request(Method::GET, &format!("/api/events/{id}"), None, None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], format!("event '{id}' not found"));

    Ok(())
}

#[tokio::test]
async fn test_filter_events() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;
    let admin = helpers::seed_admin();

    app.create_event("Hackathon", "2024-01-10").await;
    let (status, _) = app
        .request(
            Method::POST,
            "/api/events",
            Some(&admin),
            Some(json!({
                "title": "Beach Cleanup",
                "date": "2024-02-01",
                "time": "09:00",
                "location": "North Beach",
                "description": "Gloves provided",
                "category": "Environment",
                "organizer": "Green Club",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .request(Method::GET, "/api/events?category=Environment", None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Beach Cleanup");

    let (_, body) = app
        .request(Method::GET, "/api/events?search=HACK", None, None)
        .await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Hackathon");

    let (status, body) = app
        .request(Method::GET, "/api/events?category=All", None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = app
        .request(Method::GET, "/api/events?category=Cooking", None, None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("unknown category 'Cooking'")
    );

    Ok(())
}

#[tokio::test]
async fn test_create_event_validation() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/events",
            Some(&helpers::seed_admin()),
            Some(json!({
                "title": "",
                "date": "2024-01-10",
                "time": "18:00",
                "location": "Main Hall",
                "description": "Build things",
                "category": "Technology",
                "organizer": "Computing Society",
                "image_url": "not a url",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation");

    let (status, body) = app
        .request(
            Method::POST,
            "/api/events",
            Some(&helpers::seed_admin()),
            Some(json!({
                "title": "Open Mic",
                "date": "2024-01-10",
                "time": "18:00",
                "location": "Main Hall",
                "description": "Bring an instrument",
                "category": "Music",
                "organizer": "Arts Society",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation");
    assert!(body["message"].as_str().unwrap().contains("Music"));

    let (status, body) = app
        .request(
            Method::PUT,
            "/api/events/any",
            Some(&helpers::seed_admin()),
            Some(json!({ "category": "Music" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation");

    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_json_error() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;
    let admin = helpers::seed_admin();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/events")
        .header(
            header::AUTHORIZATION,
            format!("Bearer {}", app.token(&admin)),
        )
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"title\":"))?;

    let response = app.app.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await?.to_bytes();
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["error"], "bad_request");

    Ok(())
}

#[tokio::test]
async fn test_clear_event_image() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;
    let admin = helpers::seed_admin();
    let id = app.create_event("Gala", "2024-02-14").await;
    let uri = format!("/api/events/{id}");

    let (status, body) = app
        .request(
            Method::PUT,
            &uri,
            Some(&admin),
            Some(json!({ "image_url": "https://cdn.campusconnect.localhost/gala.png" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["image_url"], "https://cdn.campusconnect.localhost/gala.png");

    let (status, body) = app
        .request(Method::PUT, &uri, Some(&admin), Some(json!({ "image_url": null })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["image_url"].is_null());
    assert_eq!(body["title"], "Gala");

    Ok(())
}

#[tokio::test]
async fn test_closed_store_is_unavailable() -> anyhow::Result<()> {
    let app = helpers::setup_test_app().await?;
    app.create_event("Hackathon", "2024-01-10").await;

    app.state.pool.close().await;

    let (status, body) = app.request(Method::GET, "/api/events", None, None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "backend_unavailable");
    assert_eq!(body["message"], "Service temporarily unavailable");

    Ok(())
}
