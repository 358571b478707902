use std::rc::Rc;

use common::subject_observer::{Observer, ObserverList, Subject};
use log::debug;

use crate::NotificationError;

/// Publishes headlines to its subscribers as soon as they are set.
#[derive(Default)]
pub struct NewsAgency {
    observers: ObserverList<NewsAgency, String>,
    news: String,
}

impl Subject<String> for NewsAgency {
    type Error = NotificationError;

    fn attach(&mut self, observer: Rc<dyn Observer<Self, String>>) {
        self.observers.attach(observer);
    }

    fn detach(&mut self, observer: &Rc<dyn Observer<Self, String>>) {
        self.observers.detach(observer);
    }

    fn notify(&self, event: String) -> Result<(), Self::Error> {
        self.observers.notify(self, event)
    }
}

impl NewsAgency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn news(&self) -> &str {
        &self.news
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Stores the headline then pushes it to every subscriber.
    pub fn set_news(&mut self, value: impl Into<String>) -> Result<(), NotificationError> {
        self.news = value.into();
        debug!(
            "Publishing \"{}\" to {} subscriber(s)",
            self.news,
            self.observers.len()
        );
        self.notify(self.news.clone())
    }
}
