use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HistoryError, Result};
use crate::fields::FieldRegistry;
use crate::page::ACCOUNT_BALANCE_SELECTOR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
    Table,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_balance_selector")]
    pub balance_selector: String,
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
    /// Extra header label -> registered column it should parse as.
    #[serde(default)]
    pub column_aliases: BTreeMap<String, String>,
}

fn default_balance_selector() -> String {
    ACCOUNT_BALANCE_SELECTOR.to_string()
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Csv
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            balance_selector: default_balance_selector(),
            output_format: default_output_format(),
            column_aliases: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// The standard columns plus any configured aliases.
    pub fn registry(&self) -> Result<FieldRegistry> {
        let mut registry = FieldRegistry::standard();
        for (label, target) in &self.column_aliases {
            registry.alias(label, target)?;
        }
        Ok(registry)
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("tdhistory")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// Missing or unreadable settings fall back to defaults.
pub fn load_settings_from(path: &Path) -> Settings {
    if path.exists() {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| HistoryError::Settings(e.to_string()))?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    save_settings_to(settings, &settings_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep").join("settings.json");
        let mut settings = Settings::default();
        settings.output_format = OutputFormat::Json;
        settings
            .column_aliases
            .insert("Posting Date".to_string(), "Date".to_string());
        save_settings_to(&settings, &path).unwrap();
        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn test_load_returns_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let s = load_settings_from(&dir.path().join("nope.json"));
        assert_eq!(s, Settings::default());
        assert_eq!(s.balance_selector, ACCOUNT_BALANCE_SELECTOR);
    }

    #[test]
    fn test_load_merges_with_defaults() {
        let json = r#"{"output_format": "table"}"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.output_format, OutputFormat::Table);
        assert_eq!(s.balance_selector, ACCOUNT_BALANCE_SELECTOR);
        assert!(s.column_aliases.is_empty());
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(load_settings_from(&path), Settings::default());
    }

    #[test]
    fn test_registry_applies_aliases() {
        let mut settings = Settings::default();
        settings
            .column_aliases
            .insert("Amount Out".to_string(), "Debit".to_string());
        let registry = settings.registry().unwrap();
        assert!(registry.lookup("Amount Out").is_some());

        settings
            .column_aliases
            .insert("Memo".to_string(), "Notes".to_string());
        assert!(matches!(
            settings.registry(),
            Err(HistoryError::UnknownField(name)) if name == "Notes"
        ));
    }
}
