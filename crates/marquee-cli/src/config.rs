// crates/marquee-cli/src/config.rs
//
// Runtime configuration for the Marquee CLI.
// Loaded from a TOML file or populated with sensible defaults.

use marquee_engine::EngineConfig;
use serde::Deserialize;
use std::fs;

/// Runtime configuration for the CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Path of the JSON catalog holding people, movies, and ratings.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Log level: "trace", "debug", "info", "warn", "error".
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Prediction and p-value tuning.
    #[serde(default)]
    pub engine: EngineConfig,
}

fn default_data_file() -> String {
    "~/.marquee/catalog.json".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_level: default_log_level(),
            engine: EngineConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration, falling back to defaults only when the file is missing.
    ///
    /// Returns `(config, true)` when the file was read. An unreadable or
    /// malformed file is an error.
    pub fn load_or_default(path: &str) -> Result<(Self, bool), Box<dyn std::error::Error>> {
        match fs::read_to_string(expand_tilde(path)) {
            Ok(contents) => {
                let config: CliConfig = toml::from_str(&contents)
                    .map_err(|e| format!("Invalid config {}: {}", path, e))?;
                Ok((config, true))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok((CliConfig::default(), false)),
            Err(e) => Err(format!("Could not read config {}: {}", path, e).into()),
        }
    }

    /// The catalog path with a leading `~/` expanded.
    pub fn data_path(&self) -> String {
        expand_tilde(&self.data_file)
    }
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}/{}", home.display(), rest);
        }
    }
    path.to_string()
}
