use common::output::SharedOutput;
use log::{info, warn};
use reporting::ReportGenerator;

use crate::{config::app::ReportConfig, AppError};

/// Generates the configured report once per format, swapping strategy in between.
pub fn run(config: &ReportConfig, output: SharedOutput) -> Result<(), AppError> {
    let mut formats = config.formats.iter();
    let Some(first) = formats.next() else {
        warn!("No report format configured");
        return Ok(());
    };

    info!("Generating {} with {first} strategy", config.filename);
    let mut generator = ReportGenerator::new(first.strategy(output.clone()));
    generator.generate_report(&config.data, &config.filename)?;

    for format in formats {
        info!("Switching to {format} strategy");
        generator.set_strategy(format.strategy(output.clone()));
        generator.generate_report(&config.data, &config.filename)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use common_test::Transcript;
    use reporting::ReportFormat;

    use crate::config::app::AppConfig;

    use super::run;

    #[test]
    fn test_run_with_defaults() {
        // Given
        let config = AppConfig::defaults().unwrap();
        let transcript = Transcript::new();

        // When
        run(&config.report, transcript.output()).unwrap();

        // Then
        let data = r#"{"title":"Sales Report","content":[100,200,300]}"#;
        assert_eq!(
            vec![
                format!("Generating PDF report: sales_report.pdf with data: {data}"),
                format!("Generating CSV report: sales_report.csv with data: {data}"),
                format!("Generating JSON report: sales_report.json with data: {data}"),
            ],
            transcript.lines()
        );
    }

    #[test]
    fn test_run_should_follow_configured_order() {
        // Given
        let mut config = AppConfig::defaults().unwrap().report;
        config.formats = vec![ReportFormat::Json, ReportFormat::Pdf];
        let transcript = Transcript::new();

        // When
        run(&config, transcript.output()).unwrap();

        // Then
        let lines = transcript.lines();
        assert_eq!(2, lines.len());
        assert!(lines[0].starts_with("Generating JSON report: sales_report.json"));
        assert!(lines[1].starts_with("Generating PDF report: sales_report.pdf"));
    }

    #[test]
    fn test_run_without_format_should_print_nothing() {
        let mut config = AppConfig::defaults().unwrap().report;
        config.formats.clear();
        let transcript = Transcript::new();

        run(&config, transcript.output()).unwrap();

        assert!(transcript.lines().is_empty());
    }
}
