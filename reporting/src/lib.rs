mod format;
mod generator;
pub mod strategies;

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use format::ReportFormat;
pub use generator::ReportGenerator;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to render {format} report data: {source}")]
    Render {
        format: ReportFormat,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to announce {format} report: {source}")]
    Output {
        format: ReportFormat,
        #[source]
        source: io::Error,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReportData {
    pub title: String,
    pub content: Vec<i64>,
}

pub trait ReportStrategy {
    fn generate(&self, data: &ReportData, filename: &str) -> Result<(), ReportError>;
}
