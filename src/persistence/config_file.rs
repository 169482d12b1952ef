//! Loading and saving parameter values as JSON files.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::codec::{from_json, to_json};
use crate::group::Values;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// The document's top level is not a JSON object.
    #[error("configuration must be a JSON object")]
    NotAnObject,
    /// A value with no parameter equivalent (arrays, huge integers).
    #[error("unsupported value at '{path}'")]
    UnsupportedValue { path: String },
    /// `save` was called before any path was known.
    #[error("no configuration file selected")]
    NoPath,
}

/// Save values to a pretty-printed JSON file.
pub fn save_values(path: &Path, values: &Values) -> Result<(), ConfigError> {
    let json = serde_json::to_string_pretty(&to_json(values))?;
    std::fs::write(path, json)?;
    info!("Saved configuration to {}", path.display());
    Ok(())
}

/// Load values from a JSON file.
pub fn load_values(path: &Path) -> Result<Values, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    let json: serde_json::Value = serde_json::from_str(&text)?;
    let values = from_json(&json)?;
    info!("Loaded configuration from {}", path.display());
    Ok(values)
}

/// Remembers the current configuration file for "Save" vs "Save As".
#[derive(Debug, Default)]
pub struct ConfigFile {
    path: Option<PathBuf>,
}

impl ConfigFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// The file last loaded or saved, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// Saves to the remembered path.
    pub fn save(&self, values: &Values) -> Result<&Path, ConfigError> {
        let path = self.path.as_deref().ok_or(ConfigError::NoPath)?;
        save_values(path, values)?;
        Ok(path)
    }

    /// Saves to `path` and remembers it on success.
    pub fn save_as(&mut self, path: impl Into<PathBuf>, values: &Values) -> Result<(), ConfigError> {
        let path = path.into();
        save_values(&path, values)?;
        self.path = Some(path);
        Ok(())
    }

    /// Loads from `path` and remembers it on success.
    pub fn load(&mut self, path: impl Into<PathBuf>) -> Result<Values, ConfigError> {
        let path = path.into();
        let values = load_values(&path)?;
        self.path = Some(path);
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::ParameterGroup;
    use crate::param::{ParamValue, Parameter};

    fn panel() -> ParameterGroup {
        let mut pid = ParameterGroup::linked("PID Controller");
        pid.add_parameter(Parameter::float("Kp", 0.0, 10.0, 0.1, 1.0).unwrap())
            .unwrap();
        pid.add_parameter(Parameter::float("Ki", 0.0, 10.0, 0.1, 0.5).unwrap())
            .unwrap();

        let mut root = ParameterGroup::independent("Root");
        root.add_group(pid).unwrap();
        root.add_parameter(Parameter::choice("Mode", ["auto", "manual"]).unwrap())
            .unwrap();
        root.add_parameter(Parameter::action("Reset")).unwrap();
        root
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tuning.json");

        let mut source = panel();
        source.set_at(&["PID Controller", "Kp"], 3.5).unwrap();
        source.set("Mode", "manual").unwrap();
        save_values(&path, &source.get_values()).unwrap();

        let mut target = panel();
        target.set_values(&load_values(&path).unwrap()).unwrap();
        assert_eq!(target.get_values(), source.get_values());
        assert_eq!(
            target.parameter_at(&["PID Controller", "Kp"]).unwrap().value(),
            &ParamValue::Float(3.5)
        );
    }

    #[test]
    fn test_saved_file_is_plain_nested_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tuning.json");
        save_values(&path, &panel().get_values()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "PID Controller": { "Kp": 1.0, "Ki": 0.5 },
                "Mode": "auto",
                "Reset": null
            })
        );
    }

    #[test]
    fn test_config_file_remembers_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.json");
        let values = panel().get_values();

        let mut file = ConfigFile::new();
        assert!(file.path().is_none());
        assert!(matches!(file.save(&values), Err(ConfigError::NoPath)));

        file.save_as(&path, &values).unwrap();
        assert_eq!(file.path(), Some(path.as_path()));
        assert_eq!(file.save(&values).unwrap(), path.as_path());

        let mut other = ConfigFile::new();
        assert_eq!(other.load(&path).unwrap(), values);
        assert_eq!(other.path(), Some(path.as_path()));
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = ConfigFile::new();

        let missing = dir.path().join("missing.json");
        assert!(matches!(file.load(&missing), Err(ConfigError::Io(_))));
        assert!(file.path().is_none());

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(file.load(&broken), Err(ConfigError::Json(_))));

        let list = dir.path().join("list.json");
        std::fs::write(&list, "[1, 2, 3]").unwrap();
        assert!(matches!(file.load(&list), Err(ConfigError::NotAnObject)));
    }
}
