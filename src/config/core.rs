use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{RenderConfig, ShaderConfig, WindowConfig};

/// Optional override file, looked up in the working directory.
pub const CONFIG_FILE: &str = "thegoal.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub render: RenderConfig,
    pub shaders: ShaderConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads the config at `path`, falling back to the built-in defaults when
    /// the file does not exist. A file that exists but fails to parse is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        Self::from_toml(&content).with_context(|| format!("Failed to parse config file {:?}", path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    /// Unknown level names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Info)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path().join(CONFIG_FILE)).unwrap();

        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.title, "The Goal.");
        assert_eq!(config.shaders.vertex, "shaders/transvertex.glsl");
    }

    #[test]
    fn test_partial_file_overrides_only_named_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[window]\nwidth = 1024\n\n[render]\nspin_speed = 90.0").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.render.spin_speed, 90.0);
        assert_eq!(config.render.clear_color, [0.4, 0.58, 0.92, 1.0]);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[window\nwidth = ").unwrap();

        assert!(AppConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_log_level_parsing() {
        let debug = LoggingConfig {
            level: "debug".into(),
        };
        assert_eq!(debug.level_filter(), LevelFilter::Debug);

        let bogus = LoggingConfig {
            level: "chatty".into(),
        };
        assert_eq!(bogus.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_defaults_survive_toml_round_trip() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let config = AppConfig::from_toml(&text).unwrap();
        assert_eq!(config.window.gl_version, (3, 3));
        assert_eq!(config.logging.level, "info");
    }
}
