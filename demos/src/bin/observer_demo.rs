use anyhow::{Context, Result};
use common::output;
use demos::{
    config::{app::AppConfig, log},
    scenarios::news,
};

fn main() -> Result<()> {
    log::init()?;
    let config = AppConfig::new().context("Unable to start observer demonstration")?;

    news::run(&config.news, output::stdout()).context("Observer demonstration aborted")
}
