use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use crate::services::ArtifactPaths;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub prediction: PredictionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8100 }

/// Where the trained model and its feature schema live
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    #[serde(default = "default_model_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_model_file")]
    pub model_file: String,
    #[serde(default = "default_columns_file")]
    pub columns_file: String,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            dir: default_model_dir(),
            model_file: default_model_file(),
            columns_file: default_columns_file(),
        }
    }
}

impl ModelSettings {
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::in_dir(&self.dir, &self.model_file, &self.columns_file)
    }
}

fn default_model_dir() -> PathBuf { PathBuf::from("model") }
fn default_model_file() -> String { "dwelling_model.json".to_string() }
fn default_columns_file() -> String { "columns.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionSettings {
    /// Fixed confidence percentage reported with every estimate
    #[serde(default = "default_confidence")]
    pub confidence: u8,
}

impl Default for PredictionSettings {
    fn default() -> Self {
        Self { confidence: default_confidence() }
    }
}

fn default_confidence() -> u8 { 85 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with DWELLING)
    /// 5. `MODEL_DIR`, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., DWELLING__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("DWELLING")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_model_dir_override(settings, std::env::var("MODEL_DIR").ok())?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("DWELLING")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// `MODEL_DIR` points the service at a mounted artifact directory
fn apply_model_dir_override(settings: Config, model_dir: Option<String>) -> Result<Config, ConfigError> {
    match model_dir {
        Some(dir) => Config::builder()
            .add_source(settings)
            .set_override("model.dir", dir)?
            .build(),
        None => Ok(settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8100);
        assert_eq!(settings.prediction.confidence, 85);
        assert_eq!(settings.model.dir, PathBuf::from("model"));
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_artifact_paths() {
        let model = ModelSettings {
            dir: PathBuf::from("/srv/model"),
            ..ModelSettings::default()
        };
        let paths = model.artifact_paths();
        assert_eq!(paths.model, PathBuf::from("/srv/model/dwelling_model.json"));
        assert_eq!(paths.columns, PathBuf::from("/srv/model/columns.json"));
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let settings: Settings = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.server.port, 8100);
        assert_eq!(settings.model.columns_file, "columns.json");
    }

    #[test]
    fn test_model_dir_override() {
        let base = Config::builder()
            .set_default("model.dir", "model")
            .unwrap()
            .build()
            .unwrap();
        let settings: Settings = apply_model_dir_override(base, Some("/mnt/artifacts".to_string()))
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.model.dir, PathBuf::from("/mnt/artifacts"));
    }

    #[test]
    fn test_partial_section_keeps_field_defaults() {
        let settings: Settings = Config::builder()
            .set_override("server.port", 9000)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "0.0.0.0");
    }
}
