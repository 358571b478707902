use common::output::{self, write_line, SharedOutput};

use crate::{PaymentError, PaymentStrategy};

/// Card payment; only the last four digits ever appear in a receipt.
pub struct CreditCardPayment {
    card_number: String,
    card_holder: String,
    cvv: String,
    expiry_date: String,
    output: SharedOutput,
}

pub struct PayPalPayment {
    email: String,
    output: SharedOutput,
}

pub struct BitcoinPayment {
    wallet_address: String,
    output: SharedOutput,
}

impl CreditCardPayment {
    pub fn new(
        card_number: impl Into<String>,
        card_holder: impl Into<String>,
        cvv: impl Into<String>,
        expiry_date: impl Into<String>,
    ) -> Self {
        CreditCardPayment {
            card_number: card_number.into(),
            card_holder: card_holder.into(),
            cvv: cvv.into(),
            expiry_date: expiry_date.into(),
            output: output::stdout(),
        }
    }

    pub fn with_output(self, output: SharedOutput) -> Self {
        Self { output, ..self }
    }

    pub fn card_holder(&self) -> &str {
        &self.card_holder
    }

    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    pub fn expiry_date(&self) -> &str {
        &self.expiry_date
    }
}

impl PayPalPayment {
    pub fn new(email: impl Into<String>) -> Self {
        PayPalPayment {
            email: email.into(),
            output: output::stdout(),
        }
    }

    pub fn with_output(self, output: SharedOutput) -> Self {
        Self { output, ..self }
    }
}

impl BitcoinPayment {
    pub fn new(wallet_address: impl Into<String>) -> Self {
        BitcoinPayment {
            wallet_address: wallet_address.into(),
            output: output::stdout(),
        }
    }

    pub fn with_output(self, output: SharedOutput) -> Self {
        Self { output, ..self }
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: f64) -> Result<(), PaymentError> {
        let line = format!(
            "Paid ${} using Credit Card ({})",
            dollars(amount),
            tail(&self.card_number, 4)
        );
        receipt(&self.output, "Credit Card", &line)
    }
}

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: f64) -> Result<(), PaymentError> {
        let line = format!(
            "Paid ${} using PayPal account {}",
            dollars(amount),
            self.email
        );
        receipt(&self.output, "PayPal", &line)
    }
}

impl PaymentStrategy for BitcoinPayment {
    fn pay(&self, amount: f64) -> Result<(), PaymentError> {
        let line = format!(
            "Paid ${} using Bitcoin wallet {}...{}",
            dollars(amount),
            head(&self.wallet_address, 6),
            tail(&self.wallet_address, 4)
        );
        receipt(&self.output, "Bitcoin", &line)
    }
}

fn receipt(output: &SharedOutput, method: &'static str, line: &str) -> Result<(), PaymentError> {
    write_line(output, line).map_err(|source| PaymentError::Receipt { method, source })
}

// Receipts spell NaN in lowercase, like the infinities Rust already prints as "inf".
fn dollars(amount: f64) -> String {
    if amount.is_nan() {
        "nan".to_string()
    } else {
        format!("{amount:.2}")
    }
}

// Both helpers count chars and return the whole value when it is shorter than `count`.
fn head(value: &str, count: usize) -> &str {
    match value.char_indices().nth(count) {
        Some((index, _)) => &value[..index],
        None => value,
    }
}

fn tail(value: &str, count: usize) -> &str {
    match count.checked_sub(1) {
        None => "",
        Some(skip) => match value.char_indices().rev().nth(skip) {
            Some((index, _)) => &value[index..],
            None => value,
        },
    }
}
