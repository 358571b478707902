mod news_agency;
pub mod subscribers;

use std::io;

use thiserror::Error;

pub use news_agency::NewsAgency;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Failed to deliver news to {subscriber}: {source}")]
    Delivery {
        subscriber: &'static str,
        #[source]
        source: io::Error,
    },
}
