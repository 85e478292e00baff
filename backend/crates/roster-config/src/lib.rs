mod access_config;
mod add_member_policy;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use access_config::AccessConfig;
pub use add_member_policy::AddMemberPolicy;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "ROSTER_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".roster";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_PATH: &str = "contributions.json";
const DEFAULT_ADMIN_EMAILS: [&str; 2] = ["admin@photovault.com", "george@photovault.com"];
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
