//! HTTP-level integration tests for defect types (including the cap) and
//! defect events (including count validation and write-back).

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, delete_auth, get, post_json_auth, put_json_auth};
use sqlx::PgPool;

async fn create_defect_type(
    app: &axum::Router,
    token: &str,
    name: &str,
) -> axum::http::Response<axum::body::Body> {
    let body = serde_json::json!({ "defect_name": name });
    post_json_auth(app.clone(), "/api/v1/defect-types", body, token).await
}

// ---------------------------------------------------------------------------
// Defect types
// ---------------------------------------------------------------------------

/// Creating and listing defect types preserves definition order.
#[sqlx::test(migrations = "../db/migrations")]
async fn defect_type_create_and_list(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(&app).await;

    for name in ["Scratch", "Dent", "Paint run"] {
        let response = create_defect_type(&app, &token, name).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get(app, "/api/v1/defect-types").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["defect_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Scratch", "Dent", "Paint run"]);
}

/// The configured cap (7 in tests) rejects the eighth type with 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn defect_type_cap_is_enforced(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(&app).await;

    for i in 0..7 {
        let response = create_defect_type(&app, &token, &format!("Defect {i}")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = create_defect_type(&app, &token, "One too many").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Deleting a type frees a slot under the cap.
#[sqlx::test(migrations = "../db/migrations")]
async fn defect_type_delete_frees_cap_slot(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(&app).await;

    let mut last_id = 0;
    for i in 0..7 {
        let response = create_defect_type(&app, &token, &format!("Defect {i}")).await;
        assert_eq!(response.status(), StatusCode::OK);
        last_id = body_json(response).await["data"]["id"].as_i64().unwrap();
    }

    let response =
        delete_auth(app.clone(), &format!("/api/v1/defect-types/{last_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = create_defect_type(&app, &token, "Replacement").await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Duplicate defect names conflict via the unique constraint.
#[sqlx::test(migrations = "../db/migrations")]
async fn defect_type_duplicate_name_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(&app).await;

    let response = create_defect_type(&app, &token, "Scratch").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = create_defect_type(&app, &token, "Scratch").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Blank defect names are rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn defect_type_blank_name_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(&app).await;

    let response = create_defect_type(&app, &token, "   ").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Defect events
// ---------------------------------------------------------------------------

/// The count field accepts both JSON numbers and numeric strings, and the
/// stored form is canonical text.
#[sqlx::test(migrations = "../db/migrations")]
async fn defect_event_accepts_number_and_string_counts(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(&app).await;

    let as_number = serde_json::json!({
        "employee_name": "Ada Lovelace",
        "defect_name": "Scratch",
        "defect_count": 4,
        "time": "10:30",
    });
    let response = post_json_auth(app.clone(), "/api/v1/defect-events", as_number, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["data"]["defect_count"], "4");

    let as_string = serde_json::json!({
        "employee_name": "Ada Lovelace",
        "defect_name": "Scratch",
        "defect_count": " 7 ",
        "time": "11:05",
    });
    let response = post_json_auth(app, "/api/v1/defect-events", as_string, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["data"]["defect_count"], "7");
}

/// Negative and non-numeric counts are rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn defect_event_rejects_bad_counts(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(&app).await;

    for bad in [serde_json::json!(-1), serde_json::json!("three")] {
        let body = serde_json::json!({
            "employee_name": "Ada Lovelace",
            "defect_name": "Scratch",
            "defect_count": bad,
            "time": "10:30",
        });
        let response = post_json_auth(app.clone(), "/api/v1/defect-events", body, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

/// The write-back path replaces a record's count in place.
#[sqlx::test(migrations = "../db/migrations")]
async fn defect_event_count_write_back(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(&app).await;

    let body = serde_json::json!({
        "employee_name": "Ada Lovelace",
        "defect_name": "Scratch",
        "defect_count": 2,
        "time": "10:30",
    });
    let response = post_json_auth(app.clone(), "/api/v1/defect-events", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let patch = serde_json::json!({ "defect_count": 9 });
    let response =
        put_json_auth(app.clone(), &format!("/api/v1/defect-events/{id}"), patch, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["data"]["defect_count"], "9");

    // Unknown id 404s.
    let patch = serde_json::json!({ "defect_count": 1 });
    let response = put_json_auth(app, "/api/v1/defect-events/9999", patch, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Events serialize their time column under the legacy `time` key.
#[sqlx::test(migrations = "../db/migrations")]
async fn defect_event_wire_shape(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(&app).await;

    let body = serde_json::json!({
        "employee_name": "Ada Lovelace",
        "defect_name": "Scratch",
        "defect_count": 1,
        "time": "14.45",
    });
    let response = post_json_auth(app.clone(), "/api/v1/defect-events", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, "/api/v1/defect-events").await;
    let json = body_json(response).await;
    let event = &json["data"][0];
    assert_eq!(event["time"], "14.45");
    assert!(event.get("event_time").is_none());
}
