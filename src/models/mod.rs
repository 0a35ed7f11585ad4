pub mod menu;
pub mod sales_report;
