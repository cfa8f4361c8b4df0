use crate::error::Result;
use crate::store::{DEFAULT_GROUP_ROOT, DEFAULT_SERIAL_FIELD};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "dotview.json";

/// Configuration for dotview, stored in `<config dir>/dotview.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DotviewConfig {
    /// Top-level key holding the record groups
    #[serde(default = "default_group_root")]
    pub group_root: String,

    /// Record field that holds the serial
    #[serde(default = "default_serial_field")]
    pub serial_field: String,
}

fn default_group_root() -> String {
    DEFAULT_GROUP_ROOT.to_string()
}

fn default_serial_field() -> String {
    DEFAULT_SERIAL_FIELD.to_string()
}

impl Default for DotviewConfig {
    fn default() -> Self {
        Self {
            group_root: default_group_root(),
            serial_field: default_serial_field(),
        }
    }
}

impl DotviewConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DotviewConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "config loaded");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "group-root" => Some(self.group_root.clone()),
            "serial-field" => Some(self.serial_field.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        if value.is_empty() {
            return Err(format!("{} cannot be empty", key));
        }
        match key {
            "group-root" => self.group_root = value.to_string(),
            "serial-field" => self.serial_field = value.to_string(),
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["group-root", "serial-field"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DotviewConfig::default();
        assert_eq!(config.group_root, "Schedule");
        assert_eq!(config.serial_field, "serial");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = DotviewConfig::load(dir.path()).unwrap();
        assert_eq!(config, DotviewConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");

        let mut config = DotviewConfig::default();
        config.set("group-root", "Catalog").unwrap();
        config.save(&nested).unwrap();

        let loaded = DotviewConfig::load(&nested).unwrap();
        assert_eq!(loaded.group_root, "Catalog");
        assert_eq!(loaded.serial_field, "serial");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"serial_field": "id"}"#).unwrap();

        let config = DotviewConfig::load(dir.path()).unwrap();
        assert_eq!(config.group_root, "Schedule");
        assert_eq!(config.serial_field, "id");
    }

    #[test]
    fn test_get_and_set_keys() {
        let mut config = DotviewConfig::default();
        assert_eq!(config.get("serial-field").as_deref(), Some("serial"));
        assert_eq!(config.get("nope"), None);

        config.set("serial-field", "id").unwrap();
        assert_eq!(config.serial_field, "id");
        assert!(config.set("nope", "x").is_err());
        assert!(config.set("group-root", "").is_err());
    }
}
