// src/services/form.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};
use crate::models::sales_report::{FieldValue, SalesReportData};
use crate::services::metrics::{calculate, CalculationResult};
use crate::services::sections::{parse_sections, ReportSection};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("No menu item at category {category}, item {item}")]
    UnknownItem { category: usize, item: usize },
    #[error("A coaching report is already being generated")]
    GenerationInFlight,
}

/// Scalar fields of the form that can be edited one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportField {
    Date,
    PosSales,
    Orders,
    VisitCount,
    Note,
    MonthlyTarget,
    MtdSales,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationState {
    Idle,
    InFlight,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoachingReport {
    pub raw: String,
    pub sections: Vec<ReportSection>,
    pub generated_at: DateTime<Utc>,
}

/// What a generation run works from, detached from the live form.
#[derive(Debug, Clone)]
pub struct GenerationSnapshot {
    pub data: SalesReportData,
    pub metrics: CalculationResult,
}

// ==================== Numeric Coercion ====================

/// Anything that is not a finite number becomes 0.
pub fn coerce_amount(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) if s.trim().is_empty() => 0.0,
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if parsed.is_finite() { parsed } else { 0.0 }
}

/// Non-negative whole count; fractions truncate, negatives clamp to 0.
pub fn coerce_count(value: &Value) -> u32 {
    let amount = coerce_amount(value);
    if amount <= 0.0 {
        0
    } else if amount >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        amount.trunc() as u32
    }
}

fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl ReportField {
    pub fn coerce(self, value: &Value) -> FieldValue {
        match self {
            ReportField::Date => FieldValue::Date(coerce_text(value)),
            ReportField::PosSales => FieldValue::PosSales(coerce_amount(value)),
            ReportField::Orders => FieldValue::Orders(coerce_count(value)),
            ReportField::VisitCount => FieldValue::VisitCount(coerce_count(value)),
            ReportField::Note => FieldValue::Note(coerce_text(value)),
            ReportField::MonthlyTarget => FieldValue::MonthlyTarget(coerce_amount(value)),
            ReportField::MtdSales => FieldValue::MtdSales(coerce_amount(value)),
        }
    }
}

// ==================== Form Controller ====================

/// Owns the day's data and keeps the derived metrics in step with it.
#[derive(Debug)]
pub struct SalesForm {
    monthly_target: f64,
    data: SalesReportData,
    metrics: CalculationResult,
    generation: GenerationState,
    latest: Option<CoachingReport>,
}

impl SalesForm {
    pub fn new(monthly_target: f64) -> Self {
        let data = SalesReportData::new(monthly_target);
        let metrics = calculate(&data);
        Self {
            monthly_target,
            data,
            metrics,
            generation: GenerationState::Idle,
            latest: None,
        }
    }

    pub fn data(&self) -> &SalesReportData {
        &self.data
    }

    pub fn metrics(&self) -> &CalculationResult {
        &self.metrics
    }

    pub fn generation(&self) -> GenerationState {
        self.generation
    }

    pub fn latest_report(&self) -> Option<&CoachingReport> {
        self.latest.as_ref()
    }

    fn replace(&mut self, data: SalesReportData) {
        self.metrics = calculate(&data);
        self.data = data;
    }

    pub fn set_field(&mut self, field: ReportField, value: &Value) {
        let coerced = field.coerce(value);
        debug!(?field, ?coerced, "Updating field");
        let next = self.data.with_field(coerced);
        self.replace(next);
    }

    pub fn set_quantity(&mut self, category: usize, item: usize, qty: &Value) -> Result<(), FormError> {
        let qty = coerce_count(qty);
        let next = self
            .data
            .with_item_qty(category, item, qty)
            .ok_or(FormError::UnknownItem { category, item })?;
        debug!(category, item, qty, "Updating quantity");
        self.replace(next);
        Ok(())
    }

    /// Back to a blank form for today, as after a reload.
    pub fn reset(&mut self) -> Result<(), FormError> {
        if self.generation == GenerationState::InFlight {
            return Err(FormError::GenerationInFlight);
        }
        self.replace(SalesReportData::new(self.monthly_target));
        self.latest = None;
        info!("Form reset");
        Ok(())
    }

    pub fn begin_generation(&mut self) -> Result<GenerationSnapshot, FormError> {
        if self.generation == GenerationState::InFlight {
            return Err(FormError::GenerationInFlight);
        }
        self.generation = GenerationState::InFlight;
        Ok(GenerationSnapshot {
            data: self.data.clone(),
            metrics: self.metrics.clone(),
        })
    }

    pub fn finish_generation(&mut self, raw: String) -> CoachingReport {
        let report = CoachingReport {
            sections: parse_sections(&raw),
            raw,
            generated_at: Utc::now(),
        };
        self.latest = Some(report.clone());
        self.generation = GenerationState::Idle;
        report
    }

    /// Returns to idle without touching the latest report.
    pub fn abort_generation(&mut self) {
        self.generation = GenerationState::Idle;
    }
}
