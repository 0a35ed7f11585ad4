// src/models/sales_report.rs
use chrono::Local;
use serde::{Deserialize, Serialize};
use crate::models::menu::{default_catalog, MenuCategory, MenuItem};

pub const DEFAULT_MONTHLY_TARGET: f64 = 15000.0;

/// Everything entered for one business day.
///
/// Edits never mutate a shared value: every operation returns a new record,
/// and the form swaps its root for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReportData {
    pub date: String,
    pub pos_sales: f64,
    pub orders: u32,
    pub visit_count: u32,
    pub note: String,
    pub monthly_target: f64,
    pub mtd_sales: f64,
    pub categories: Vec<MenuCategory>,
}

/// A single scalar edit, already coerced to the field's type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Date(String),
    PosSales(f64),
    Orders(u32),
    VisitCount(u32),
    Note(String),
    MonthlyTarget(f64),
    MtdSales(f64),
}

impl SalesReportData {
    /// Blank form for today with the store catalog.
    pub fn new(monthly_target: f64) -> Self {
        Self {
            date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            pos_sales: 0.0,
            orders: 0,
            visit_count: 0,
            note: String::new(),
            monthly_target,
            mtd_sales: 0.0,
            categories: default_catalog(),
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    pub fn item(&self, category: usize, item: usize) -> Option<&MenuItem> {
        self.categories.get(category)?.items.get(item)
    }

    pub fn with_field(&self, value: FieldValue) -> Self {
        let mut next = self.clone();
        match value {
            FieldValue::Date(date) => next.date = date,
            FieldValue::PosSales(v) => next.pos_sales = v,
            FieldValue::Orders(v) => next.orders = v,
            FieldValue::VisitCount(v) => next.visit_count = v,
            FieldValue::Note(note) => next.note = note,
            FieldValue::MonthlyTarget(v) => next.monthly_target = v,
            FieldValue::MtdSales(v) => next.mtd_sales = v,
        }
        next
    }

    /// Returns `None` when `(category, item)` is outside the catalog.
    pub fn with_item_qty(&self, category: usize, item: usize, qty: u32) -> Option<Self> {
        self.item(category, item)?;

        let categories = self
            .categories
            .iter()
            .enumerate()
            .map(|(ci, cat)| {
                if ci != category {
                    return cat.clone();
                }
                MenuCategory {
                    items: cat
                        .items
                        .iter()
                        .enumerate()
                        .map(|(ii, it)| {
                            if ii == item {
                                MenuItem { qty, ..it.clone() }
                            } else {
                                it.clone()
                            }
                        })
                        .collect(),
                    ..cat.clone()
                }
            })
            .collect();

        Some(Self {
            categories,
            ..self.clone()
        })
    }
}

impl Default for SalesReportData {
    fn default() -> Self {
        Self::new(DEFAULT_MONTHLY_TARGET)
    }
}
