//! Handler tests driving the full router with `tower::ServiceExt`.

mod common;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use chrono::{Days, Local};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use common::{insert_event, test_pool};
use community_connect_server::routes::create_routes;

async fn test_app() -> (Router, SqlitePool) {
    let pool = test_pool().await;
    (create_routes(pool.clone()), pool)
}

async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, uri: &str, body: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

const VALID_VOLUNTEER_FORM: &str = "first_name=Alice&last_name=Nguyen&date_of_birth=1995-04-12\
    &email=alice.nguyen%40example.com&phone=0412-345-678&address=1+Example+St";

#[tokio::test]
async fn dashboard_reports_schema_status_and_counts() {
    let (app, _pool) = test_app().await;

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["database_ok"], true);
    assert_eq!(body["data"]["volunteer_count"], 0);
    assert_eq!(body["data"]["organisation_count"], 3);
    assert_eq!(body["data"]["event_count"], 0);
}

#[tokio::test]
async fn create_volunteer_succeeds_and_redirects_to_the_list() {
    let (app, _pool) = test_app().await;

    let response = post_form(&app, "/volunteers/new", VALID_VOLUNTEER_FORM).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/volunteers");

    let body = json_body(response).await;
    assert_eq!(
        body["message"],
        "Volunteer Alice Nguyen created successfully!"
    );

    let list = json_body(get(&app, "/volunteers").await).await;
    let volunteers = list["data"].as_array().unwrap();
    assert_eq!(volunteers.len(), 1);
    assert_eq!(volunteers[0]["first_name"], "Alice");
    assert_eq!(volunteers[0]["phone"], "0412-345-678");
}

#[tokio::test]
async fn create_volunteer_collects_every_violation() {
    let (app, _pool) = test_app().await;

    let response = post_form(&app, "/volunteers/new", "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    let errors = body["error"]["details"]["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 6);
}

#[tokio::test]
async fn create_volunteer_rejects_future_date_of_birth() {
    let (app, _pool) = test_app().await;

    let tomorrow = Local::now()
        .date_naive()
        .checked_add_days(Days::new(1))
        .unwrap();
    let form = format!(
        "first_name=Alice&last_name=Nguyen&date_of_birth={}\
         &email=alice%40example.com&phone=0412345678&address=1+Example+St",
        tomorrow.format("%Y-%m-%d")
    );

    let response = post_form(&app, "/volunteers/new", &form).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    let errors = body["error"]["details"]["errors"].as_array().unwrap();
    assert!(errors
        .iter()
        .any(|e| e == "Date of birth must be in the past"));
    // The submitted values come back for re-rendering the form.
    assert_eq!(body["error"]["details"]["form"]["first_name"], "Alice");

    // Nothing was inserted.
    let dashboard = json_body(get(&app, "/").await).await;
    assert_eq!(dashboard["data"]["volunteer_count"], 0);
}

#[tokio::test]
async fn update_phone_for_unknown_volunteer_redirects_to_the_list() {
    let (app, _pool) = test_app().await;

    let response = post_form(&app, "/volunteers/999/update_phone", "phone=0412345678").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/volunteers");

    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn update_phone_validates_and_applies_the_new_number() {
    let (app, _pool) = test_app().await;

    post_form(&app, "/volunteers/new", VALID_VOLUNTEER_FORM).await;
    let list = json_body(get(&app, "/volunteers").await).await;
    let volunteer_id = list["data"][0]["volunteer_id"].as_i64().unwrap();

    let bad = post_form(
        &app,
        &format!("/volunteers/{volunteer_id}/update_phone"),
        "phone=04-12-AB-CD",
    )
    .await;
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    let body = json_body(bad).await;
    let errors = body["error"]["details"]["errors"].as_array().unwrap();
    assert_eq!(errors[0], "Please enter a valid phone number");

    let ok = post_form(
        &app,
        &format!("/volunteers/{volunteer_id}/update_phone"),
        "phone=0499-888-777",
    )
    .await;
    assert_eq!(ok.status(), StatusCode::SEE_OTHER);
    let body = json_body(ok).await;
    assert_eq!(
        body["message"],
        "Phone number updated successfully for Alice Nguyen"
    );

    let detail = json_body(get(&app, &format!("/volunteers/{volunteer_id}")).await).await;
    assert_eq!(detail["data"]["phone"], "0499-888-777");
}

#[tokio::test]
async fn delete_event_redirects_and_repeat_reports_not_found() {
    let (app, pool) = test_app().await;

    let start = chrono::NaiveDate::from_ymd_opt(2026, 9, 5).unwrap();
    let event_id = insert_event(&pool, "Beach Cleanup", start, start, 10, 1).await;

    let response = post_form(&app, &format!("/events/{event_id}/delete"), "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/events");
    let body = json_body(response).await;
    assert_eq!(
        body["message"],
        "Event \"Beach Cleanup\" deleted successfully"
    );

    let again = post_form(&app, &format!("/events/{event_id}/delete"), "").await;
    assert_eq!(again.status(), StatusCode::SEE_OTHER);
    let body = json_body(again).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn skill_search_requires_a_query() {
    let (app, _pool) = test_app().await;

    let response = get(&app, "/volunteers/search").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unknown_routes_get_a_404_envelope() {
    let (app, _pool) = test_app().await;

    let response = get(&app, "/no/such/page").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let (app, _pool) = test_app().await;

    let response = get(&app, "/").await;
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    assert_eq!(response.headers()["x-frame-options"], "DENY");
}

#[tokio::test]
async fn list_views_degrade_when_storage_fails() {
    let (app, pool) = test_app().await;

    sqlx::query("DROP TABLE VOLUNTEER")
        .execute(&pool)
        .await
        .unwrap();

    let response = get(&app, "/volunteers").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
    assert_eq!(body["message"], "Error retrieving volunteers from database");
}

#[tokio::test]
async fn report_storage_faults_stay_generic() {
    let (app, pool) = test_app().await;

    sqlx::query("DROP TABLE VOLUNTEER_EVENT")
        .execute(&pool)
        .await
        .unwrap();

    let response = get(&app, "/reports/event-statistics").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "DATABASE_ERROR");
    // Internal error text is logged, never exposed.
    assert_eq!(body["error"]["message"], "A database error occurred");
}

#[tokio::test]
async fn reports_cover_empty_data() {
    let (app, _pool) = test_app().await;

    // No volunteer holds any skill yet, so the distribution is empty.
    let distribution = json_body(get(&app, "/reports/skill-distribution").await).await;
    assert_eq!(distribution["data"].as_array().unwrap().len(), 0);

    // Every seeded organisation appears even with no events.
    let summary = json_body(get(&app, "/reports/organisation-summary").await).await;
    assert_eq!(summary["data"].as_array().unwrap().len(), 3);
}
