use anyhow::{Context, Result};
use common::output;
use demos::{
    config::{app::AppConfig, log},
    scenarios::report,
};

fn main() -> Result<()> {
    log::init()?;
    let config = AppConfig::new().context("Unable to start report demonstration")?;

    report::run(&config.report, output::stdout()).context("Report demonstration aborted")
}
