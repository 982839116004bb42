//! HTTP-level integration tests for the employee and color-code CRUD routes.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, delete_auth, get, post_json_auth, put_json_auth};
use sqlx::PgPool;

fn ada() -> serde_json::Value {
    serde_json::json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "color_name": "Blue",
        "color_code": "#0000ff",
    })
}

// ---------------------------------------------------------------------------
// Employee CRUD
// ---------------------------------------------------------------------------

/// Full create, read, update, delete round trip through the API.
#[sqlx::test(migrations = "../db/migrations")]
async fn employee_crud_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(&app).await;

    // Create.
    let response = post_json_auth(app.clone(), "/api/v1/employees", ada(), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().expect("created id");
    assert_eq!(created["data"]["first_name"], "Ada");

    // Read back.
    let response = get(app.clone(), &format!("/api/v1/employees/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["data"]["last_name"], "Lovelace");

    // Partial update leaves the other fields alone.
    let patch = serde_json::json!({ "color_name": "Red", "color_code": "#ff0000" });
    let response =
        put_json_auth(app.clone(), &format!("/api/v1/employees/{id}"), patch, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["data"]["first_name"], "Ada");
    assert_eq!(updated["data"]["color_name"], "Red");

    // Delete, then the read 404s.
    let response = delete_auth(app.clone(), &format!("/api/v1/employees/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, &format!("/api/v1/employees/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Blank required fields are rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn employee_create_rejects_blank_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(&app).await;

    let body = serde_json::json!({
        "first_name": "",
        "last_name": "Lovelace",
        "color_name": "Blue",
        "color_code": "#0000ff",
    });
    let response = post_json_auth(app, "/api/v1/employees", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Updating or deleting a missing id returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn employee_missing_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(&app).await;

    let patch = serde_json::json!({ "first_name": "Ghost" });
    let response = put_json_auth(app.clone(), "/api/v1/employees/9999", patch, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(app, "/api/v1/employees/9999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// The list endpoint returns employees in registration order.
#[sqlx::test(migrations = "../db/migrations")]
async fn employee_list_preserves_registration_order(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(&app).await;

    for (first, last) in [("Ada", "Lovelace"), ("Grace", "Hopper"), ("Edsger", "Dijkstra")] {
        let body = serde_json::json!({
            "first_name": first,
            "last_name": last,
            "color_name": "Blue",
            "color_code": "#0000ff",
        });
        let response = post_json_auth(app.clone(), "/api/v1/employees", body, &token).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get(app, "/api/v1/employees").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["first_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Ada", "Grace", "Edsger"]);
}

// ---------------------------------------------------------------------------
// Color codes
// ---------------------------------------------------------------------------

/// Color codes accept valid hex and reject malformed values.
#[sqlx::test(migrations = "../db/migrations")]
async fn color_code_hex_validation(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(&app).await;

    let valid = serde_json::json!({ "color_name": "Teal", "hex_code": "#00b3a4" });
    let response = post_json_auth(app.clone(), "/api/v1/color-codes", valid, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["data"]["color_name"], "Teal");

    for bad in ["00b3a4", "#00b3", "#00b3a4ff", "#ggggge"] {
        let body = serde_json::json!({ "color_name": "Bad", "hex_code": bad });
        let response = post_json_auth(app.clone(), "/api/v1/color-codes", body, &token).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "hex {bad:?} must be rejected"
        );
    }
}

/// Deleting a color code removes it from the list.
#[sqlx::test(migrations = "../db/migrations")]
async fn color_code_delete(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token(&app).await;

    let body = serde_json::json!({ "color_name": "Teal", "hex_code": "#00b3a4" });
    let response = post_json_auth(app.clone(), "/api/v1/color-codes", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = delete_auth(app.clone(), &format!("/api/v1/color-codes/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, "/api/v1/color-codes").await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}
