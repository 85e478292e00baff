use crate::{
    AccessConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub access: AccessConfig,
    pub logging: LoggingConfig,
    /// Env overrides that failed to parse, reported by log_summary()
    #[serde(skip)]
    rejected_overrides: Vec<String>,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for ROSTER_CONFIG_DIR env var, else use ./.roster/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply ROSTER_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: ROSTER_CONFIG_DIR env var > ./.roster/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.storage.validate()?;
        self.access.validate()?;
        Ok(())
    }

    /// Absolute path of the roster file.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.path))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  storage: {}", self.storage.path);
        info!(
            "  access: {} admin(s), add_member_policy={}",
            self.access.admin_emails.len(),
            self.access.add_member_policy.as_str()
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("none")
        );
        for rejected in &self.rejected_overrides {
            warn!("{rejected}");
        }
    }

    /// Env overrides that were set but could not be parsed. The value from
    /// config.toml (or the default) stays in effect for each of them.
    pub fn rejected_overrides(&self) -> &[String] {
        &self.rejected_overrides
    }

    fn apply_env_overrides(&mut self) {
        // Storage
        Self::apply_env_string("ROSTER_STORAGE_PATH", &mut self.storage.path);

        // Access
        Self::apply_env_list("ROSTER_ADMIN_EMAILS", &mut self.access.admin_emails);
        Self::apply_env_parse(
            "ROSTER_ADD_MEMBER_POLICY",
            &mut self.access.add_member_policy,
            &mut self.rejected_overrides,
        );

        // Logging
        Self::apply_env_parse(
            "ROSTER_LOG_LEVEL",
            &mut self.logging.level,
            &mut self.rejected_overrides,
        );
        Self::apply_env_bool("ROSTER_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ROSTER_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values.
    /// Unparseable values leave `target` alone and are recorded in `rejected`.
    fn apply_env_parse<T>(var_name: &str, target: &mut T, rejected: &mut Vec<String>)
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        if let Ok(val) = std::env::var(var_name) {
            match val.parse() {
                Ok(parsed) => *target = parsed,
                Err(e) => rejected.push(format!("Ignoring {var_name}={val}: {e}")),
            }
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply comma-separated environment variable override for lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
