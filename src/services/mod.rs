pub mod coach;
pub mod form;
pub mod gemini;
pub mod metrics;
pub mod sections;
