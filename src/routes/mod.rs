pub mod report;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new().merge(report::routes())
}

/// Full application under the `/coach` base path.
pub fn build_app(state: AppState) -> Router {
    let api = create_router()
        .route("/", get(|| async { "Sales Coach API" }))
        .route("/health", get(health_check));

    Router::new()
        .nest("/coach", api)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use axum::body::{to_bytes, Body};
    use http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use crate::services::coach::tests::ScriptedModel;
    use crate::services::coach::COMMUNICATION_ERROR;
    use crate::services::form::{GenerationState, SalesForm};

    fn app_with(model: ScriptedModel) -> (Router, AppState) {
        let state = AppState::new(SalesForm::new(15000.0), Arc::new(model));
        (build_app(state.clone()), state)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn health_responds_ok() {
        let (app, _) = app_with(ScriptedModel::replying("x"));
        let response = app
            .oneshot(Request::builder().uri("/coach/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn edits_flow_into_metrics() {
        let (app, _) = app_with(ScriptedModel::replying("x"));

        send(&app, Method::PATCH, "/coach/report/fields", Some(json!({ "field": "pos_sales", "value": 30 }))).await;
        send(&app, Method::PATCH, "/coach/report/fields", Some(json!({ "field": "orders", "value": "2" }))).await;
        send(&app, Method::PATCH, "/coach/report/fields", Some(json!({ "field": "visit_count", "value": 10 }))).await;
        send(&app, Method::PUT, "/coach/report/categories/0/items/0", Some(json!({ "qty": 2 }))).await;
        let (status, body) =
            send(&app, Method::PUT, "/coach/report/categories/0/items/15", Some(json!({ "qty": 1 }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metrics"]["calc_sales"], json!(29.0));
        assert_eq!(body["metrics"]["gap"], json!(1.0));
        assert_eq!(body["metrics"]["status"], json!("alert"));
        assert_eq!(body["metrics"]["aov"], json!(14.5));
        assert_eq!(body["metrics"]["conversion_rate"], json!(20.0));
        assert_eq!(body["data"]["categories"][0]["items"][0]["qty"], json!(2));
        assert_eq!(body["generation"], json!("idle"));
    }

    #[tokio::test]
    async fn unknown_field_is_bad_request() {
        let (app, _) = app_with(ScriptedModel::replying("x"));
        let (status, body) =
            send(&app, Method::PATCH, "/coach/report/fields", Some(json!({ "field": "tips", "value": 1 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("Unknown field: tips"));
    }

    #[tokio::test]
    async fn body_without_field_is_json_bad_request() {
        let (app, _) = app_with(ScriptedModel::replying("x"));
        let (status, body) =
            send(&app, Method::PATCH, "/coach/report/fields", Some(json!({ "value": 1 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("missing field `field`"));
    }

    #[tokio::test]
    async fn non_json_quantity_body_is_json_bad_request() {
        let (app, _) = app_with(ScriptedModel::replying("x"));
        let request = Request::builder()
            .method(Method::PUT)
            .uri("/coach/report/categories/0/items/0")
            .header("content-type", "application/json")
            .body(Body::from("{qty"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn unknown_item_is_not_found() {
        let (app, _) = app_with(ScriptedModel::replying("x"));
        let (status, _) =
            send(&app, Method::PUT, "/coach/report/categories/9/items/0", Some(json!({ "qty": 1 }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn generate_returns_parsed_sections() {
        let (app, state) = app_with(ScriptedModel::replying("1) 오늘 요약\n매출 $29\n2) 핵심 포인트\n객단가 $14.5"));

        let (status, body) = send(&app, Method::POST, "/coach/report/generate", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sections"].as_array().unwrap().len(), 2);
        assert_eq!(body["sections"][0]["title"], json!("오늘 요약"));
        assert_eq!(body["sections"][1]["body"], json!("객단가 $14.5"));
        assert_eq!(state.form.lock().await.generation(), GenerationState::Idle);

        let (status, body) = send(&app, Method::GET, "/coach/report/coaching", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sections"][1]["kind"], json!("key_points"));
    }

    #[tokio::test]
    async fn model_failure_surfaces_fallback_text() {
        let (app, _) = app_with(ScriptedModel::failing("network down"));
        let (status, body) = send(&app, Method::POST, "/coach/report/generate", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["raw"], json!(COMMUNICATION_ERROR));
        assert_eq!(body["sections"].as_array().unwrap().len(), 1);
        assert_eq!(body["sections"][0]["body"], json!(COMMUNICATION_ERROR));
    }

    #[tokio::test]
    async fn generate_while_in_flight_conflicts() {
        let (app, state) = app_with(ScriptedModel::replying("x"));
        state.form.lock().await.begin_generation().unwrap();

        let (status, _) = send(&app, Method::POST, "/coach/report/generate", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        let (status, _) = send(&app, Method::DELETE, "/coach/report", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn coaching_missing_before_first_generation() {
        let (app, _) = app_with(ScriptedModel::replying("x"));
        let (status, _) = send(&app, Method::GET, "/coach/report/coaching", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn reset_clears_entries() {
        let (app, _) = app_with(ScriptedModel::replying("x"));
        send(&app, Method::PUT, "/coach/report/categories/1/items/0", Some(json!({ "qty": 3 }))).await;
        let (status, body) = send(&app, Method::DELETE, "/coach/report", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["categories"][1]["items"][0]["qty"], json!(0));
        assert_eq!(body["metrics"]["calc_sales"], json!(0.0));
        assert_eq!(body["coaching"], Value::Null);
    }
}
