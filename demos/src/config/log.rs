use env_logger::Env;
use log::SetLoggerError;

const DEFAULT_FILTER: &str = "warn";

/// Logs go to stderr so they never mix with the demonstration output.
pub fn init() -> Result<(), SetLoggerError> {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER)).try_init()
}
