use axum::{
    routing::{get, patch, post, put},
    Router,
};
use crate::handlers::report::{
    generate_report, get_coaching, get_report, reset_report, update_field, update_quantity,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/report", get(get_report).delete(reset_report))
        .route("/report/fields", patch(update_field))
        .route("/report/categories/{category}/items/{item}", put(update_quantity))
        .route("/report/generate", post(generate_report))
        .route("/report/coaching", get(get_coaching))
}
