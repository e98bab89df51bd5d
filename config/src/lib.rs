//! Load configuration from XDG `config.toml` and project `.env`, then apply it to the process
//! environment with priority: **existing env > .env > XDG**.
//!
//! Typed views over the resulting environment live in [`settings`].

mod dotenv_file;
pub mod settings;
mod xdg_toml;

use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

pub use settings::{ClientSettings, CorsOrigins, ServerSettings, StoreLocation};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("xdg config path: {0}")]
    XdgPath(String),
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    Dotenv(::dotenv::Error),
}

/// Sets environment variables from `.env` and `$XDG_CONFIG_HOME/<app_name>/config.toml`
/// for keys that are not already set.
///
/// * `app_name`: `"promptmaster"` for the binaries.
/// * `override_dir`: look for `.env` here instead of the current directory.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<(), LoadError> {
    let xdg_map = xdg_toml::load_env_map(app_name)?;
    let dotenv_map = dotenv_file::load_env_map(override_dir).map_err(LoadError::Dotenv)?;

    let keys: HashSet<&String> = xdg_map.keys().chain(dotenv_map.keys()).collect();
    for key in keys {
        if std::env::var_os(key).is_some() {
            continue;
        }
        if let Some(v) = dotenv_map.get(key).or_else(|| xdg_map.get(key)) {
            std::env::set_var(key, v);
        }
    }
    Ok(())
}

/// Serializes tests that read or write the process environment.
#[cfg(test)]
static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// A failed test leaves the lock poisoned; the guarded data is `()`, so keep going.
#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}
