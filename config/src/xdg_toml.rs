//! Load the `[env]` table from `$XDG_CONFIG_HOME/<app>/config.toml`.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::LoadError;

fn xdg_config_path(app_name: &str) -> Result<Option<PathBuf>, LoadError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| LoadError::XdgPath("no config directory for this platform".to_string()))?;
    let path = config_dir.join(app_name).join("config.toml");
    Ok(path.exists().then_some(path))
}

#[derive(serde::Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    env: HashMap<String, String>,
}

/// Key-value pairs from the `[env]` table. A missing file or section yields an empty map.
pub fn load_env_map(app_name: &str) -> Result<HashMap<String, String>, LoadError> {
    let Some(path) = xdg_config_path(app_name)? else {
        return Ok(HashMap::new());
    };
    let content = std::fs::read_to_string(&path).map_err(LoadError::XdgRead)?;
    let config: ConfigFile = toml::from_str(&content)?;
    Ok(config.env)
}
