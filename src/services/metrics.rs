// src/services/metrics.rs
use serde::Serialize;
use crate::models::{menu::CategoryRole, sales_report::SalesReportData};

/// How far the itemised total drifts from the POS total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapStatus {
    Normal,
    Warning,
    Alert,
}

impl GapStatus {
    /// Classifies an absolute gap rate in percent. Boundaries belong to the lower bucket.
    pub fn from_gap_rate(gap_rate: f64) -> Self {
        let abs = gap_rate.abs();
        if abs > 3.0 {
            GapStatus::Alert
        } else if abs > 1.0 {
            GapStatus::Warning
        } else {
            GapStatus::Normal
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            GapStatus::Normal => "✅",
            GapStatus::Warning => "🟡",
            GapStatus::Alert => "🔴",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub calc_sales: f64,
    pub gap: f64,
    pub gap_rate: f64,
    pub status: GapStatus,
    pub aov: f64,
    pub conversion_rate: f64,
    pub addon_per_order: f64,
}

/// Half-up rounding to `places` decimals.
fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale + 0.5).floor() / scale
}

/// Derives every summary metric from one snapshot of the form.
pub fn calculate(data: &SalesReportData) -> CalculationResult {
    let mut calc_sales = 0.0;
    let mut addon_sum: u64 = 0;

    for category in &data.categories {
        for item in &category.items {
            calc_sales += item.line_total();
            if category.role == CategoryRole::AddOn {
                addon_sum += u64::from(item.qty);
            }
        }
    }

    let gap = data.pos_sales - calc_sales;
    let gap_rate = if data.pos_sales > 0.0 {
        gap / data.pos_sales * 100.0
    } else {
        0.0
    };

    let orders = f64::from(data.orders);
    let aov = if data.orders > 0 {
        round_to(calc_sales / orders, 2)
    } else {
        0.0
    };
    let conversion_rate = if data.visit_count > 0 {
        // one decimal of a percentage: scale by 1000 in a single step
        (orders * 1000.0 / f64::from(data.visit_count) + 0.5).floor() / 10.0
    } else {
        0.0
    };
    let addon_per_order = if data.orders > 0 {
        round_to(addon_sum as f64 / orders, 1)
    } else {
        0.0
    };

    CalculationResult {
        calc_sales: round_to(calc_sales, 2),
        gap: round_to(gap, 2),
        gap_rate: round_to(gap_rate, 2),
        status: GapStatus::from_gap_rate(gap_rate),
        aov,
        conversion_rate,
        addon_per_order,
    }
}
