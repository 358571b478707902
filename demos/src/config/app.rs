use ::config::{Config, ConfigBuilder, Environment, File, FileFormat};
use ::config::builder::DefaultState;
use reporting::{ReportData, ReportFormat};
use serde::Deserialize;
use validator::Validate;

use crate::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";
const NESTED_KEY_SEPARATOR: &str = "__";

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    #[validate(nested)]
    pub news: NewsConfig,
    pub payment: PaymentConfig,
    #[validate(nested)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct NewsConfig {
    #[validate(length(min = 1))]
    pub headlines: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaymentConfig {
    pub credit_card: CreditCardConfig,
    pub paypal: PayPalConfig,
    pub bitcoin: BitcoinConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CreditCardConfig {
    pub card_number: String,
    pub card_holder: String,
    pub cvv: String,
    pub expiry_date: String,
    pub amount: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PayPalConfig {
    pub email: String,
    pub amount: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BitcoinConfig {
    pub wallet_address: String,
    pub amount: f64,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct ReportConfig {
    #[validate(length(min = 1))]
    pub filename: String,
    #[validate(length(min = 1))]
    pub formats: Vec<ReportFormat>,
    pub data: ReportData,
}

impl AppConfig {
    /// Embedded defaults overridden by `APP_`-prefixed environment variables,
    /// e.g. `APP_REPORT__FILENAME`.
    pub fn new() -> Result<Self, AppError> {
        let builder = defaults().add_source(
            Environment::with_prefix(DEFAULT_CONFIG_PREFIX)
                .prefix_separator("_")
                .separator(NESTED_KEY_SEPARATOR),
        );
        Self::build(builder)
    }

    /// Embedded defaults only.
    pub fn defaults() -> Result<Self, AppError> {
        Self::build(defaults())
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

fn defaults() -> ConfigBuilder<DefaultState> {
    Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
}
