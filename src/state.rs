// src/state.rs
use std::sync::Arc;
use tokio::sync::Mutex;
use crate::services::{coach::CoachModel, form::SalesForm};

#[derive(Clone)]
pub struct AppState {
    pub form: Arc<Mutex<SalesForm>>,
    pub coach: Arc<dyn CoachModel>,
}

impl AppState {
    pub fn new(form: SalesForm, coach: Arc<dyn CoachModel>) -> Self {
        Self {
            form: Arc::new(Mutex::new(form)),
            coach,
        }
    }
}
