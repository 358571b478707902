use common::output::{write_line, SharedOutput};
use log::info;
use payment::{
    methods::{BitcoinPayment, CreditCardPayment, PayPalPayment},
    PaymentContext,
};

use crate::{config::app::PaymentConfig, AppError};

const TITLE: &str = "Strategy Pattern Example: Payment Methods";

pub fn run(config: &PaymentConfig, output: SharedOutput) -> Result<(), AppError> {
    write_line(&output, TITLE)?;
    write_line(&output, "")?;

    let card = &config.credit_card;
    let credit_card = CreditCardPayment::new(
        card.card_number.as_str(),
        card.card_holder.as_str(),
        card.cvv.as_str(),
        card.expiry_date.as_str(),
    )
    .with_output(output.clone());
    write_line(&output, "Created Initial payment method: Credit Card")?;
    let paypal = PayPalPayment::new(config.paypal.email.as_str()).with_output(output.clone());
    let bitcoin =
        BitcoinPayment::new(config.bitcoin.wallet_address.as_str()).with_output(output.clone());

    let mut context = PaymentContext::new(Box::new(credit_card));
    context.pay(card.amount)?;

    info!("Switching to PayPal");
    context.set_strategy(Box::new(paypal));
    context.pay(config.paypal.amount)?;

    info!("Switching to Bitcoin");
    context.set_strategy(Box::new(bitcoin));
    context.pay(config.bitcoin.amount)?;
    Ok(())
}
