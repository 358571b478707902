pub mod config;
pub mod scenarios;

use std::io;

use ::config::ConfigError;
use notification::NotificationError;
use payment::PaymentError;
use reporting::ReportError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unable to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationErrors),
    #[error("Unable to write to output: {0}")]
    Output(#[from] io::Error),
    #[error(transparent)]
    Notification(#[from] NotificationError),
    #[error(transparent)]
    Payment(#[from] PaymentError),
    #[error(transparent)]
    Report(#[from] ReportError),
}
