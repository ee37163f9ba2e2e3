//! End-to-end tests for the preview endpoints.

use std::str::FromStr;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use comuniapp_api::{AppState, create_router};
use comuniapp_shared::BillingConfig;
use comuniapp_shared::types::Currency;

fn app() -> axum::Router {
    create_router(AppState::new(BillingConfig::default()))
}

async fn post_json(app: axum::Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn dec_at(value: &Value) -> Decimal {
    match value {
        Value::String(s) => Decimal::from_str(s).expect("decimal string"),
        other => Decimal::from_str(&other.to_string()).expect("decimal number"),
    }
}

fn unit(number: &str, coefficient: Option<&str>) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "number": number,
        "coefficient": coefficient,
    })
}

fn amounts(body: &Value) -> Vec<Decimal> {
    body["shares"]
        .as_array()
        .expect("shares")
        .iter()
        .map(|s| dec_at(&s["amount"]))
        .collect()
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_reports_billing_settings() {
    let request = Request::builder()
        .uri("/api/v1/health")
        .body(Body::empty())
        .expect("request");
    let response = app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let body: Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["currency"], "CLP");
    assert_eq!(body["decimal_places"], 2);
}

// ============================================================================
// Proration preview
// ============================================================================

#[tokio::test]
async fn test_equal_preview_splits_thirds() {
    let payload = json!({
        "units": [unit("101", None), unit("102", None), unit("103", None)],
        "total_amount": "100",
        "method": "EQUAL",
    });

    let (status, body) = post_json(app(), "/api/v1/proration/preview", &payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["method"], "EQUAL");
    assert_eq!(amounts(&body), vec![dec!(33.34), dec!(33.33), dec!(33.33)]);
    assert_eq!(dec_at(&body["allocated_total"]["amount"]), dec!(100));
    assert_eq!(body["allocated_total"]["currency"], "CLP");
}

#[tokio::test]
async fn test_coefficient_preview_keeps_request_order() {
    let payload = json!({
        "units": [unit("A", Some("1")), unit("B", Some("2")), unit("C", Some("4"))],
        "total_amount": "100",
        "method": "COEFFICIENT",
    });

    let (status, body) = post_json(app(), "/api/v1/proration/preview", &payload).await;

    assert_eq!(status, StatusCode::OK);
    let numbers: Vec<&str> = body["shares"]
        .as_array()
        .expect("shares")
        .iter()
        .map(|s| s["unit_number"].as_str().expect("number"))
        .collect();
    assert_eq!(numbers, vec!["A", "B", "C"]);
    assert_eq!(amounts(&body), vec![dec!(14.29), dec!(28.57), dec!(57.14)]);
}

#[tokio::test]
async fn test_preview_rejects_empty_units() {
    let payload = json!({ "units": [], "total_amount": "100", "method": "EQUAL" });

    let (status, body) = post_json(app(), "/api/v1/proration/preview", &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_preview_rejects_negative_total() {
    let payload = json!({
        "units": [unit("101", None)],
        "total_amount": "-5",
        "method": "EQUAL",
    });

    let (status, body) = post_json(app(), "/api/v1/proration/preview", &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap_or_default().contains("-5"));
}

#[rstest]
#[case::unknown("SURFACE")]
#[case::lowercase("equal")]
#[case::empty("")]
#[tokio::test]
async fn test_preview_rejects_unknown_method(#[case] method: &str) {
    let payload = json!({
        "units": [unit("101", None)],
        "total_amount": "100",
        "method": method,
    });

    let (status, _) = post_json(app(), "/api/v1/proration/preview", &payload).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_preview_uses_configured_precision() {
    let billing = BillingConfig {
        decimal_places: 0,
        currency: Currency::Clp,
    };
    let app = create_router(AppState::new(billing));
    let payload = json!({
        "units": [unit("1", None), unit("2", None), unit("3", None)],
        "total_amount": "1000",
        "method": "EQUAL",
    });

    let (status, body) = post_json(app, "/api/v1/proration/preview", &payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(amounts(&body), vec![dec!(334), dec!(333), dec!(333)]);
}

// ============================================================================
// Expense preview
// ============================================================================

fn draft(items: &Value) -> Value {
    json!({
        "community_id": Uuid::new_v4(),
        "period": "2024-03",
        "due_date": "2024-04-10",
        "items": items,
        "proration_method": "COEFFICIENT",
    })
}

#[tokio::test]
async fn test_expense_preview_prorates_item_total() {
    let payload = json!({
        "form": draft(&json!([
            { "name": "Elevator", "amount": "60000" },
            { "name": "Cleaning", "amount": "40000", "description": "Monthly" },
        ])),
        "units": [unit("101", Some("0.25")), unit("102", Some("0.75"))],
    });

    let (status, body) = post_json(app(), "/api/v1/expenses/preview", &payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec_at(&body["total_amount"]), dec!(100000));
    assert_eq!(body["method"], "COEFFICIENT");
    assert_eq!(amounts(&body), vec![dec!(25000), dec!(75000)]);
}

#[tokio::test]
async fn test_expense_preview_reports_every_invalid_field() {
    let payload = json!({
        "form": {
            "community_id": Uuid::new_v4(),
            "period": "2024-13",
            "items": [{ "name": "", "amount": "0" }],
        },
        "units": [unit("101", None)],
    });

    let (status, body) = post_json(app(), "/api/v1/expenses/preview", &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    let fields = body["fields"].as_object().expect("fields");
    assert!(fields.contains_key("period"));
    assert!(fields.contains_key("due_date"));
    assert!(fields.contains_key("items[0].name"));
    assert!(fields.contains_key("items[0].amount"));
}

#[tokio::test]
async fn test_expense_preview_requires_units() {
    let payload = json!({
        "form": draft(&json!([{ "name": "Water", "amount": "1000" }])),
        "units": [],
    });

    let (status, body) = post_json(app(), "/api/v1/expenses/preview", &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("fields").is_none());
}

// ============================================================================
// Expense statistics
// ============================================================================

fn charge(amount: &str, status: &str) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "amount": amount,
        "concept": "Gasto común",
        "due_date": "2024-04-10",
        "status": status,
    })
}

#[tokio::test]
async fn test_stats_summarize_charges() {
    let payload = json!({
        "expenses": [
            charge("100", "PAID"),
            charge("50", "PENDING"),
            charge("25", "OVERDUE"),
        ],
    });

    let (status, body) = post_json(app(), "/api/v1/expenses/stats", &payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 3);
    assert_eq!(body["paid_count"], 1);
    assert_eq!(dec_at(&body["total_amount"]), dec!(175));
    assert_eq!(dec_at(&body["overdue_amount"]), dec!(25));
    assert_eq!(dec_at(&body["payment_percentage"]), dec!(33.3));
}

#[tokio::test]
async fn test_stats_filter_by_status() {
    let payload = json!({
        "expenses": [charge("100", "PAID"), charge("50", "PENDING"), charge("70", "PENDING")],
        "status": "PENDING",
    });

    let (status, body) = post_json(app(), "/api/v1/expenses/stats", &payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 2);
    assert_eq!(dec_at(&body["pending_amount"]), dec!(120));
    assert_eq!(dec_at(&body["payment_percentage"]), Decimal::ZERO);
}

#[tokio::test]
async fn test_stats_of_nothing_is_zero() {
    let (status, body) =
        post_json(app(), "/api/v1/expenses/stats", &json!({ "expenses": [] })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 0);
    assert_eq!(dec_at(&body["payment_percentage"]), Decimal::ZERO);
}

#[tokio::test]
async fn test_stats_reject_overflowing_amounts() {
    let max = Decimal::MAX.to_string();
    let payload = json!({
        "expenses": [charge(&max, "PAID"), charge(&max, "PAID")],
    });

    let (status, body) = post_json(app(), "/api/v1/expenses/stats", &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_coefficient_preview_answers_for_huge_totals() {
    let payload = json!({
        "units": [unit("1", Some("100000000")), unit("2", Some("1"))],
        "total_amount": "1000000000000000000000",
        "method": "COEFFICIENT",
    });

    let (status, body) = post_json(app(), "/api/v1/proration/preview", &payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        dec_at(&body["allocated_total"]["amount"]),
        dec!(1000000000000000000000)
    );
}
