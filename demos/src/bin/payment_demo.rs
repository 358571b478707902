use anyhow::{Context, Result};
use common::output;
use demos::{
    config::{app::AppConfig, log},
    scenarios::payment,
};

fn main() -> Result<()> {
    log::init()?;
    let config = AppConfig::new().context("Unable to start payment demonstration")?;

    payment::run(&config.payment, output::stdout()).context("Payment demonstration aborted")
}
