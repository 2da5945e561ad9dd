use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (--config)
/// 2. ACTCARD_CONFIG environment variable
/// 3. ~/.config/actcard/config.toml
///
/// `None` when no HOME is available; the CLI then runs on defaults.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var("ACTCARD_CONFIG") {
        return Some(PathBuf::from(env_path));
    }

    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(".config/actcard/config.toml"))
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub routes: RouteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    /// Fixed render width. Detected from the terminal when absent.
    #[serde(default)]
    pub width: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Client dashboard route template; `{id}` is replaced with the pfp id.
    #[serde(default = "default_client_dashboard")]
    pub client_dashboard: String,
}

fn default_client_dashboard() -> String {
    "/clients/{id}/dashboard".to_string()
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            client_dashboard: default_client_dashboard(),
        }
    }
}

impl RouteConfig {
    pub fn client_dashboard_url(&self, pfp_id: &str) -> String {
        self.client_dashboard.replace("{id}", pfp_id)
    }
}

impl Config {
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default_route_template() {
        let config = Config::default();
        assert_eq!(config.routes.client_dashboard, "/clients/{id}/dashboard");
        assert_eq!(config.display.width, None);
    }

    #[test]
    fn test_dashboard_url_substitutes_the_id() {
        let config = Config::default();
        assert_eq!(
            config.routes.client_dashboard_url("pfp-77"),
            "/clients/pfp-77/dashboard"
        );
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.display.width = Some(100);
        config.routes.client_dashboard = "/crm/client/{id}".to_string();

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.display.width, Some(100));
        assert_eq!(loaded.routes.client_dashboard_url("7"), "/crm/client/7");

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.routes.client_dashboard, "/clients/{id}/dashboard");

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_in_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[display]\nwidth = 72\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.display.width, Some(72));
        assert_eq!(config.routes.client_dashboard, "/clients/{id}/dashboard");

        Ok(())
    }
}
