mod database;
mod logging;

pub use database::init_database;
pub use logging::init_logging;

use quartz_dns_domain::config::{CliOverrides, Config, ConfigError};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> Result<Config, ConfigError> {
    Config::load(path, overrides)
}
