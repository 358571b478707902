use std::rc::Rc;

use common::{output::SharedOutput, subject_observer::Subject};
use log::info;
use notification::{
    subscribers::{EmailSubscriber, SmsSubscriber},
    NewsAgency,
};

use crate::{config::app::NewsConfig, AppError};

pub fn run(config: &NewsConfig, output: SharedOutput) -> Result<(), AppError> {
    let mut agency = NewsAgency::new();
    agency.attach(Rc::new(EmailSubscriber::with_output(output.clone())));
    agency.attach(Rc::new(SmsSubscriber::with_output(output)));
    info!(
        "Publishing {} headline(s) to {} subscriber(s)",
        config.headlines.len(),
        agency.subscriber_count()
    );

    for headline in &config.headlines {
        agency.set_news(headline.as_str())?;
    }
    Ok(())
}
