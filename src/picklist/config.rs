use crate::error::{PicklistError, Result};
use crate::record::RecordMapping;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_DIRNAME: &str = ".picklist";
const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_VALUE_FIELD: &str = "id";
const DEFAULT_DISPLAY_FORMAT: &str = "{id} - {name}";

/// Configuration for picklist, stored in .picklist/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PicklistConfig {
    /// Record field used as the option value
    #[serde(default = "default_value_field")]
    pub value_field: String,

    /// Template for the option label, e.g. "{id} - {name}"
    #[serde(default = "default_display_format")]
    pub display_format: String,
}

fn default_value_field() -> String {
    DEFAULT_VALUE_FIELD.to_string()
}

fn default_display_format() -> String {
    DEFAULT_DISPLAY_FORMAT.to_string()
}

impl Default for PicklistConfig {
    fn default() -> Self {
        Self {
            value_field: default_value_field(),
            display_format: default_display_format(),
        }
    }
}

impl PicklistConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PicklistConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<&str> {
        match key {
            "value_field" => Ok(&self.value_field),
            "display_format" => Ok(&self.display_format),
            other => Err(unknown_key(other)),
        }
    }

    /// Set a key, rejecting values that would not produce a usable mapping
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        match key {
            "value_field" => updated.value_field = value.to_string(),
            "display_format" => updated.display_format = value.to_string(),
            other => return Err(unknown_key(other)),
        }
        updated.mapping()?;
        *self = updated;
        Ok(())
    }

    pub fn mapping(&self) -> Result<RecordMapping> {
        RecordMapping::new(&self.value_field, &self.display_format)
    }
}

fn unknown_key(key: &str) -> PicklistError {
    PicklistError::Config(format!(
        "Unknown config key '{}'. Known keys: value_field, display_format",
        key
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PicklistConfig::default();
        assert_eq!(config.value_field, "id");
        assert_eq!(config.display_format, "{id} - {name}");
        assert!(config.mapping().is_ok());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = PicklistConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, PicklistConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_dir = temp_dir.path().join(CONFIG_DIRNAME);

        let mut config = PicklistConfig::default();
        config.set("display_format", "{name}").unwrap();
        config.save(&config_dir).unwrap();

        let loaded = PicklistConfig::load(&config_dir).unwrap();
        assert_eq!(loaded.display_format, "{name}");
        assert_eq!(loaded.value_field, "id");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: PicklistConfig = serde_json::from_str(r#"{"value_field": "code"}"#).unwrap();
        assert_eq!(config.value_field, "code");
        assert_eq!(config.display_format, DEFAULT_DISPLAY_FORMAT);
    }

    #[test]
    fn test_set_rejects_bad_format() {
        let mut config = PicklistConfig::default();
        assert!(config.set("display_format", "{oops").is_err());
        assert_eq!(config.display_format, DEFAULT_DISPLAY_FORMAT);
    }

    #[test]
    fn test_unknown_key() {
        let mut config = PicklistConfig::default();
        assert!(matches!(config.get("color"), Err(PicklistError::Config(_))));
        assert!(config.set("color", "red").is_err());
    }
}
