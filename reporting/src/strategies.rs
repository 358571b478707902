use common::output::{self, write_line, SharedOutput};
use log::trace;

use crate::{ReportData, ReportError, ReportFormat, ReportStrategy};

pub struct PdfReportStrategy {
    output: SharedOutput,
}

pub struct CsvReportStrategy {
    output: SharedOutput,
}

pub struct JsonReportStrategy {
    output: SharedOutput,
}

macro_rules! report_strategy {
    ($strategy:ident, $format:expr) => {
        impl $strategy {
            pub fn new() -> Self {
                Self::with_output(output::stdout())
            }

            pub fn with_output(output: SharedOutput) -> Self {
                $strategy { output }
            }
        }

        impl Default for $strategy {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ReportStrategy for $strategy {
            fn generate(&self, data: &ReportData, filename: &str) -> Result<(), ReportError> {
                announce(&self.output, $format, data, filename)
            }
        }
    };
}

report_strategy!(PdfReportStrategy, ReportFormat::Pdf);
report_strategy!(CsvReportStrategy, ReportFormat::Csv);
report_strategy!(JsonReportStrategy, ReportFormat::Json);

// Only announces the target file; nothing is written to disk.
fn announce(
    output: &SharedOutput,
    format: ReportFormat,
    data: &ReportData,
    filename: &str,
) -> Result<(), ReportError> {
    let rendered =
        serde_json::to_string(data).map_err(|source| ReportError::Render { format, source })?;
    let target = format!("{filename}.{}", format.extension());
    trace!("Generating {format} report into {target}");
    write_line(
        output,
        &format!("Generating {format} report: {target} with data: {rendered}"),
    )
    .map_err(|source| ReportError::Output { format, source })
}
