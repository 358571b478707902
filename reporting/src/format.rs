use common::output::SharedOutput;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::{
    strategies::{CsvReportStrategy, JsonReportStrategy, PdfReportStrategy},
    ReportStrategy,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize)]
pub enum ReportFormat {
    #[strum(to_string = "PDF")]
    Pdf,
    #[strum(to_string = "CSV")]
    Csv,
    #[strum(to_string = "JSON")]
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }

    pub fn strategy(&self, output: SharedOutput) -> Box<dyn ReportStrategy> {
        match self {
            ReportFormat::Pdf => Box::new(PdfReportStrategy::with_output(output)),
            ReportFormat::Csv => Box::new(CsvReportStrategy::with_output(output)),
            ReportFormat::Json => Box::new(JsonReportStrategy::with_output(output)),
        }
    }
}
