use log::{debug, trace};

use crate::{ReportData, ReportError, ReportStrategy};

pub struct ReportGenerator {
    strategy: Box<dyn ReportStrategy>,
}

impl ReportGenerator {
    pub fn new(strategy: Box<dyn ReportStrategy>) -> Self {
        ReportGenerator { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn ReportStrategy>) {
        debug!("Switching report strategy");
        self.strategy = strategy;
    }

    pub fn generate_report(&self, data: &ReportData, filename: &str) -> Result<(), ReportError> {
        trace!("Delegating report \"{}\" for {filename}", data.title);
        self.strategy.generate(data, filename)
    }
}

#[cfg(test)]
mod tests {
    use common_test::Transcript;
    use mockall::mock;

    use crate::{ReportData, ReportError, ReportFormat, ReportStrategy};

    use super::ReportGenerator;

    mock! {
        Strategy {}

        impl ReportStrategy for Strategy {
            fn generate<'a>(&self, data: &'a ReportData, filename: &'a str) -> Result<(), ReportError>;
        }
    }

    fn data() -> ReportData {
        ReportData {
            title: "Sales Report".to_string(),
            content: vec![100, 200, 300],
        }
    }

    #[test]
    fn test_generate_report_should_delegate_with_arguments() {
        // Given
        let mut strategy = MockStrategy::new();
        strategy
            .expect_generate()
            .withf(|data, filename| data.content == vec![100, 200, 300] && filename == "sales_report")
            .times(1)
            .returning(|_, _| Ok(()));
        let generator = ReportGenerator::new(Box::new(strategy));

        // When
        let result = generator.generate_report(&data(), "sales_report");

        // Then
        assert!(result.is_ok(), "Should relay on strategy");
    }

    #[test]
    fn test_set_strategy_should_replace_previous_one() {
        // Given
        let mut previous = MockStrategy::new();
        previous.expect_generate().never();
        let mut next = MockStrategy::new();
        next.expect_generate().times(1).returning(|_, _| Ok(()));
        let mut generator = ReportGenerator::new(Box::new(previous));

        // When
        generator.set_strategy(Box::new(next));
        generator.generate_report(&data(), "sales_report").unwrap();

        // Then expectations are verified when the mocks drop
    }

    #[test]
    fn test_swap_should_change_output_format() {
        // Given
        let transcript = Transcript::new();
        let mut generator = ReportGenerator::new(ReportFormat::Pdf.strategy(transcript.output()));
        generator.generate_report(&data(), "sales_report").unwrap();

        // When
        generator.set_strategy(ReportFormat::Csv.strategy(transcript.output()));
        generator.generate_report(&data(), "sales_report").unwrap();

        // Then
        let lines = transcript.lines();
        assert!(lines[0].contains("sales_report.pdf"));
        assert!(lines[1].contains("sales_report.csv"));
        assert!(!lines[1].contains(".pdf"));
    }
}
