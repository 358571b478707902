use log::{debug, trace};

use crate::{PaymentError, PaymentStrategy};

/// Holds the payment method currently in use and charges through it.
pub struct PaymentContext {
    strategy: Box<dyn PaymentStrategy>,
}

impl PaymentContext {
    pub fn new(strategy: Box<dyn PaymentStrategy>) -> Self {
        PaymentContext { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        debug!("Switching payment method");
        self.strategy = strategy;
    }

    pub fn pay(&self, amount: f64) -> Result<(), PaymentError> {
        trace!("Delegating payment of {amount:.2}");
        self.strategy.pay(amount)
    }
}
