use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::{Duration, TimeZone, Utc};
use datastore::{MemoryAppointmentStore, MemoryUserStore};
use entities::Appointment;
use scheduler_server::{config::Config, create_app, create_state, seed};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn build_app(seeded: bool) -> Router {
    let appointments = MemoryAppointmentStore::new();
    let users = MemoryUserStore::new();
    if seeded {
        seed::seed_demo_data(&appointments, &users).await.unwrap();
    }
    create_app(create_state(Config::default(), appointments, users))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn range_uri(start: chrono::DateTime<Utc>, end: chrono::DateTime<Utc>) -> String {
    format!(
        "/api/appts?startDate={}&endDate={}",
        start.timestamp_millis(),
        end.timestamp_millis()
    )
}

#[tokio::test]
async fn test_health() {
    let app = build_app(false).await;
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_auth_sets_cookie_for_known_email() {
    let app = build_app(true).await;

    let response = app
        .oneshot(post_json(
            "/api/auth",
            json!({ "email": seed::DEMO_ADMIN_EMAIL, "password": "whatever" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("UserID=0"));
    assert!(cookie.contains("HttpOnly"));

    let body = read_json(response).await;
    assert_eq!(body["email"], seed::DEMO_ADMIN_EMAIL);
    assert_eq!(body["firstName"], "Admin");
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
async fn test_auth_unknown_email_is_forbidden() {
    let app = build_app(true).await;

    let response = app
        .oneshot(post_json(
            "/api/auth",
            json!({ "email": "nobody@test.com", "password": "pw" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    let body = read_json(response).await;
    assert_eq!(body["error"]["code"], "access_denied");
}

#[tokio::test]
async fn test_auth_requires_both_fields() {
    let app = build_app(true).await;

    let response = app
        .oneshot(post_json(
            "/api/auth",
            json!({ "email": seed::DEMO_ADMIN_EMAIL }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_auth_rejects_non_json_body() {
    let app = build_app(true).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("email=test@test.com"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_query_rejects_invalid_bounds() {
    let app = build_app(false).await;

    for uri in [
        "/api/appts",
        "/api/appts?startDate=0&endDate=1000",
        "/api/appts?startDate=1000&endDate=later",
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn test_appointment_lifecycle() {
    let app = build_app(false).await;
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    let end = start + Duration::minutes(120);

    // Create; the supplied id is ignored.
    let mut appointment = Appointment::new(start, end).with_customer(1, "Joe");
    appointment.id = 40;
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/appts/add",
            serde_json::to_value(&appointment).unwrap(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created: Appointment = serde_json::from_value(read_json(response).await).unwrap();
    assert_eq!(created.id, 0);

    // Sub-interval query finds nothing.
    let response = app
        .clone()
        .oneshot(get(&range_uri(
            start + Duration::minutes(30),
            end - Duration::minutes(30),
        )))
        .await
        .unwrap();
    assert_eq!(read_json(response).await, json!([]));

    // Update and read back through the exact window.
    let updated = Appointment {
        dentist_id: 3,
        dentist_name: "Jill".to_string(),
        ..created.clone()
    };
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/appts/update",
            serde_json::to_value(&updated).unwrap(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get(&range_uri(start, end))).await.unwrap();
    let found: Vec<Appointment> = serde_json::from_value(read_json(response).await).unwrap();
    assert_eq!(found, vec![updated]);

    // Delete, twice.
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post_json("/api/appts/delete", json!({ "id": created.id })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get(&range_uri(start, end))).await.unwrap();
    assert_eq!(read_json(response).await, json!([]));
}

#[tokio::test]
async fn test_update_missing_appointment_is_not_found() {
    let app = build_app(false).await;
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    let mut appointment = Appointment::starting_at(start, Duration::minutes(30));
    appointment.id = 12;

    let response = app
        .oneshot(post_json(
            "/api/appts/update",
            serde_json::to_value(&appointment).unwrap(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["error"]["code"], "resource_not_found");
}

#[tokio::test]
async fn test_list_users() {
    let app = build_app(true).await;

    let response = app.oneshot(get("/api/users")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["lastName"], "Jones");
}

#[tokio::test]
async fn test_update_without_id_is_rejected() {
    let app = build_app(true).await;
    let now = Utc::now();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/appts/update",
            json!({
                "start": now.to_rfc3339(),
                "end": (now + Duration::minutes(30)).to_rfc3339(),
            }),
        ))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
    assert_ne!(response.status(), StatusCode::NOT_FOUND);

    // The seeded appointment (id 0) is untouched.
    let response = app
        .oneshot(get(&range_uri(
            now - Duration::minutes(10),
            now + Duration::minutes(180),
        )))
        .await
        .unwrap();
    let found: Vec<Appointment> = serde_json::from_value(read_json(response).await).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].dentist_name, "Jill");
}
