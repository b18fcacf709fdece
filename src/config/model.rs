//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Question source and timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// TOML question bank. The bundled bank is used when unset.
    #[serde(default)]
    pub bank_path: Option<PathBuf>,
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            bank_path: None,
            tick_interval_ms: default_tick_interval(),
        }
    }
}

/// UI appearance settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Overrides the bank's own title when set.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: None,
            show_key_hints: true,
        }
    }
}

/// Diagnostic log settings. The terminal is owned by the UI, so logs only
/// ever go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_tick_interval() -> u64 {
    1000
}
fn default_log_dir() -> String {
    "~/.local/share/crabquiz/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.quiz.tick_interval_ms, 1000);
        assert!(cfg.ui.show_key_hints);
        assert!(!cfg.logging.enabled);
    }

    #[test]
    fn test_partial_config() {
        let cfg: AppConfig = toml::from_str(
            r#"
[quiz]
bank_path = "/tmp/bank.toml"

[logging]
enabled = true
level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(cfg.quiz.bank_path, Some(PathBuf::from("/tmp/bank.toml")));
        assert_eq!(cfg.quiz.tick_interval_ms, 1000);
        assert!(cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.logging.log_dir, "~/.local/share/crabquiz/logs");
    }

    #[test]
    fn test_round_trips_through_toml() {
        let mut cfg = AppConfig::default();
        cfg.ui.title = Some("Practice".into());
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }
}
