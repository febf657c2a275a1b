//! Shared configuration used by the core and the gateway.

use crate::knowledge::KNOWN_SUBJECTS;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Global application configuration (gateway identity + subjects). Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Application identity shown by `/v1/status` and in the startup log line.
    pub app_name: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Subject labels to build agents for, in the order the UI lists them.
    #[serde(default = "default_subjects")]
    pub subjects: Vec<String>,
    /// If true, the gateway serves the static UI from `qa-frontend/`. (Config alias: `ui_enabled`)
    #[serde(default, alias = "ui_enabled")]
    pub frontend_enabled: bool,
}

fn default_subjects() -> Vec<String> {
    KNOWN_SUBJECTS.iter().map(|s| s.to_string()).collect()
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            app_name: "Subject Q&A Gateway".to_string(),
            port: 8001,
            subjects: default_subjects(),
            frontend_enabled: false,
        }
    }
}

impl CoreConfig {
    /// Load config from file and environment. Precedence: env `SUBJECT_QA_*` > file at
    /// `SUBJECT_QA_CONFIG` (default `config/gateway`) > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("SUBJECT_QA_CONFIG").unwrap_or_else(|_| "config/gateway".to_string());
        Self::load_from(&config_path)
    }

    /// Same as [`CoreConfig::load`] with an explicit file path (extension optional).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        let builder = config::Config::builder()
            .set_default("app_name", defaults.app_name)?
            .set_default("port", i64::from(defaults.port))?;

        // `config::File::with_name` resolves `config/gateway` to `config/gateway.toml`.
        let path = Path::new(config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder.add_source(config::File::with_name(config_path).required(false))
        };

        let built = builder
            .add_source(config::Environment::with_prefix("SUBJECT_QA").separator("__"))
            .build()?;

        built.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_list_known_subjects_in_ui_order() {
        let config = CoreConfig::default();
        assert_eq!(config.subjects, vec!["Polity", "History", "Economics"]);
        assert_eq!(config.port, 8001);
        assert!(!config.frontend_enabled);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = CoreConfig::load_from("./does/not/exist/gateway").unwrap();
        assert_eq!(config.app_name, "Subject Q&A Gateway");
        assert_eq!(config.subjects.len(), 3);
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gateway.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "app_name = \"Exam Prep\"\nport = 8042\nui_enabled = true\nsubjects = [\"History\"]"
        )
        .unwrap();

        let config = CoreConfig::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.app_name, "Exam Prep");
        assert_eq!(config.port, 8042);
        assert!(config.frontend_enabled);
        assert_eq!(config.subjects, vec!["History"]);
    }
}
