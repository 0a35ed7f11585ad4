// src/dtos/report.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::models::sales_report::SalesReportData;
use crate::services::form::{CoachingReport, GenerationState, SalesForm};
use crate::services::metrics::CalculationResult;

#[derive(Debug, Deserialize)]
pub struct UpdateFieldRequest {
    pub field: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    #[serde(default)]
    pub qty: Value,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub data: SalesReportData,
    pub metrics: CalculationResult,
    pub generation: GenerationState,
    pub coaching: Option<CoachingReport>,
}

impl From<&SalesForm> for ReportResponse {
    fn from(form: &SalesForm) -> Self {
        Self {
            data: form.data().clone(),
            metrics: form.metrics().clone(),
            generation: form.generation(),
            coaching: form.latest_report().cloned(),
        }
    }
}
