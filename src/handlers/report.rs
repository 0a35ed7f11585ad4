// src/handlers/report.rs
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::Value;
use crate::dtos::report::{ReportResponse, UpdateFieldRequest, UpdateQuantityRequest};
use crate::error::AppError;
use crate::services::coach::generate_coaching_report;
use crate::services::form::{CoachingReport, ReportField};
use crate::state::AppState;
use tracing::{error, info, instrument};

// GET /report - Current form, metrics and latest coaching report
#[instrument(skip(state))]
pub async fn get_report(State(state): State<AppState>) -> Json<ReportResponse> {
    let form = state.form.lock().await;
    Json(ReportResponse::from(&*form))
}

// DELETE /report - Start over with a blank form
#[instrument(skip(state))]
pub async fn reset_report(State(state): State<AppState>) -> Result<Json<ReportResponse>, AppError> {
    let mut form = state.form.lock().await;
    form.reset()?;
    Ok(Json(ReportResponse::from(&*form)))
}

// PATCH /report/fields - Replace one scalar field
#[instrument(skip(state, payload))]
pub async fn update_field(
    State(state): State<AppState>,
    payload: Result<Json<UpdateFieldRequest>, JsonRejection>,
) -> Result<Json<ReportResponse>, AppError> {
    let Json(payload) = payload?;
    let field: ReportField = serde_json::from_value(Value::String(payload.field.clone()))
        .map_err(|_| AppError::validation(format!("Unknown field: {}", payload.field)))?;

    let mut form = state.form.lock().await;
    form.set_field(field, &payload.value);
    Ok(Json(ReportResponse::from(&*form)))
}

// PUT /report/categories/:category/items/:item - Replace one item quantity
#[instrument(skip(state, payload))]
pub async fn update_quantity(
    Path((category, item)): Path<(usize, usize)>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateQuantityRequest>, JsonRejection>,
) -> Result<Json<ReportResponse>, AppError> {
    let Json(payload) = payload?;
    let mut form = state.form.lock().await;
    form.set_quantity(category, item, &payload.qty)?;
    Ok(Json(ReportResponse::from(&*form)))
}

// POST /report/generate - Ask the model for today's coaching report
#[instrument(skip(state))]
pub async fn generate_report(State(state): State<AppState>) -> Result<Json<CoachingReport>, AppError> {
    let snapshot = state.form.lock().await.begin_generation()?;
    info!(date = %snapshot.data.date, "Generating coaching report");

    // Runs detached so a dropped request cannot leave the form stuck in flight.
    let task_state = state.clone();
    let handle = tokio::spawn(async move {
        let raw = generate_coaching_report(
            task_state.coach.as_ref(),
            &snapshot.data,
            &snapshot.metrics,
        )
        .await;
        task_state.form.lock().await.finish_generation(raw)
    });

    match handle.await {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            error!(?e, "Generation task aborted");
            state.form.lock().await.abort_generation();
            Err(AppError::internal(format!("Generation task failed: {e}")))
        }
    }
}

// GET /report/coaching - Latest coaching report
#[instrument(skip(state))]
pub async fn get_coaching(State(state): State<AppState>) -> Result<Json<CoachingReport>, AppError> {
    let form = state.form.lock().await;
    form.latest_report()
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found("No coaching report generated yet"))
}
