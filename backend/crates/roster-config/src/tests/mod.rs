mod access;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and point ROSTER_CONFIG_DIR at it.
///
/// Also clears every ROSTER_* override so tests start from defaults.
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards = vec![EnvGuard::set(
        crate::CONFIG_DIR_ENV,
        temp.path().to_str().unwrap(),
    )];
    for key in [
        "ROSTER_STORAGE_PATH",
        "ROSTER_ADMIN_EMAILS",
        "ROSTER_ADD_MEMBER_POLICY",
        "ROSTER_LOG_LEVEL",
        "ROSTER_LOG_COLORED",
        "ROSTER_LOG_FILE",
    ] {
        guards.push(EnvGuard::remove(key));
    }
    (temp, guards)
}

/// Write config.toml into the directory returned by setup_config_dir().
pub(crate) fn write_config(temp: &TempDir, contents: &str) {
    std::fs::write(temp.path().join(crate::CONFIG_FILENAME), contents).unwrap();
}
