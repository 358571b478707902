use common::{
    output::{self, write_line, SharedOutput},
    subject_observer::Observer,
};
use log::trace;

use crate::{NewsAgency, NotificationError};

pub struct EmailSubscriber {
    output: SharedOutput,
}

pub struct SmsSubscriber {
    output: SharedOutput,
}

impl EmailSubscriber {
    pub fn new() -> Self {
        Self::with_output(output::stdout())
    }

    pub fn with_output(output: SharedOutput) -> Self {
        EmailSubscriber { output }
    }
}

impl Default for EmailSubscriber {
    fn default() -> Self {
        Self::new()
    }
}

impl SmsSubscriber {
    pub fn new() -> Self {
        Self::with_output(output::stdout())
    }

    pub fn with_output(output: SharedOutput) -> Self {
        SmsSubscriber { output }
    }
}

impl Default for SmsSubscriber {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer<NewsAgency, String> for EmailSubscriber {
    fn update(&self, _: &NewsAgency, event: String) -> Result<(), NotificationError> {
        trace!("Emailing news: {event}");
        deliver(&self.output, "EmailSubscriber", &event)
    }
}

impl Observer<NewsAgency, String> for SmsSubscriber {
    fn update(&self, _: &NewsAgency, event: String) -> Result<(), NotificationError> {
        trace!("Texting news: {event}");
        deliver(&self.output, "SMSSubscriber", &event)
    }
}

fn deliver(
    output: &SharedOutput,
    subscriber: &'static str,
    news: &str,
) -> Result<(), NotificationError> {
    write_line(output, &format!("{subscriber} received news: {news}"))
        .map_err(|source| NotificationError::Delivery { subscriber, source })
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        io::{self, Write},
        rc::Rc,
    };

    use common::subject_observer::Subject;
    use common_test::Transcript;

    use crate::{NewsAgency, NotificationError};

    use super::{EmailSubscriber, SmsSubscriber};

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_subscribers_should_print_each_headline() {
        // Given
        let transcript = Transcript::new();
        let mut agency = NewsAgency::new();
        agency.attach(Rc::new(EmailSubscriber::with_output(transcript.output())));
        agency.attach(Rc::new(SmsSubscriber::with_output(transcript.output())));

        // When
        agency.set_news("Breaking: X").unwrap();
        agency.set_news("Update: Y").unwrap();

        // Then
        assert_eq!(
            vec![
                "EmailSubscriber received news: Breaking: X",
                "SMSSubscriber received news: Breaking: X",
                "EmailSubscriber received news: Update: Y",
                "SMSSubscriber received news: Update: Y",
            ],
            transcript.lines()
        );
    }

    #[test]
    fn test_write_failure_should_name_the_subscriber() {
        // Given
        let transcript = Transcript::new();
        let mut agency = NewsAgency::new();
        agency.attach(Rc::new(SmsSubscriber::with_output(Rc::new(RefCell::new(
            ClosedPipe,
        )))));
        agency.attach(Rc::new(EmailSubscriber::with_output(transcript.output())));

        // When
        let result = agency.set_news("Breaking: X");

        // Then
        assert!(matches!(
            result,
            Err(NotificationError::Delivery {
                subscriber: "SMSSubscriber",
                ..
            })
        ));
        assert!(
            transcript.lines().is_empty(),
            "Should not reach subscribers attached after the failing one"
        );
    }
}
