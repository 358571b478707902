mod context;
pub mod methods;

use std::io;

use thiserror::Error;

pub use context::PaymentContext;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Failed to record {method} payment: {source}")]
    Receipt {
        method: &'static str,
        #[source]
        source: io::Error,
    },
}

pub trait PaymentStrategy {
    fn pay(&self, amount: f64) -> Result<(), PaymentError>;
}
