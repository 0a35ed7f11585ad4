// src/config.rs
use std::net::IpAddr;
use crate::models::sales_report::DEFAULT_MONTHLY_TARGET;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub monthly_target: f64,
}

impl Config {
    /// Reads settings from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .and_then(|h| h.parse().ok())
            .unwrap_or(IpAddr::from([127, 0, 0, 1]));
        let port = lookup("PORT").and_then(|p| p.parse().ok()).unwrap_or(3000);
        let api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("API_KEY"))
            .filter(|k| !k.trim().is_empty());
        let monthly_target = lookup("MONTHLY_TARGET")
            .and_then(|t| t.parse::<f64>().ok())
            .filter(|t| t.is_finite())
            .unwrap_or(DEFAULT_MONTHLY_TARGET);

        Self {
            host,
            port,
            api_key,
            model: lookup("COACH_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: lookup("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            monthly_target,
        }
    }
}
