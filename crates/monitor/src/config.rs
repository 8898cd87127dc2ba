//! Monitor configuration, loaded from YAML.
//!
//! ```yaml
//! name: commander-status
//! abort_on_malformed: false
//! ignored_fields:
//!   - pips_sys
//!   - pips_eng
//!   - pips_wea
//! ```

use crate::error::MonitorError;
use flightdeck_status::StatusField;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_name() -> String {
    "status".to_string()
}

/// How a [`crate::StatusMonitor`] treats its input and what it publishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonitorConfig {
    /// Name used in log output.
    pub name: String,
    /// Stop at the first malformed frame instead of skipping it.
    pub abort_on_malformed: bool,
    /// Fields whose transitions are never published.
    pub ignored_fields: Vec<StatusField>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            abort_on_malformed: false,
            ignored_fields: Vec::new(),
        }
    }
}

impl MonitorConfig {
    /// Parse a configuration document.
    ///
    /// # Errors
    ///
    /// [`MonitorError::Config`] for invalid YAML, unknown keys or unknown
    /// field names.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, MonitorError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// [`MonitorError::Io`] when the file cannot be read, otherwise as
    /// [`MonitorConfig::from_yaml_str`].
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, MonitorError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| MonitorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    fn validate(&self) -> Result<(), MonitorError> {
        if self.name.trim().is_empty() {
            return Err(MonitorError::Config("name must not be empty".to_string()));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_ignored(&self, field: StatusField) -> bool {
        self.ignored_fields.contains(&field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_defaults() -> TestResult {
        let config = MonitorConfig::from_yaml_str("{}")?;
        assert_eq!(config, MonitorConfig::default());
        assert_eq!(config.name, "status");
        assert!(!config.abort_on_malformed);
        Ok(())
    }

    #[test]
    fn test_full_document() -> TestResult {
        let config = MonitorConfig::from_yaml_str(
            "name: cmdr\nabort_on_malformed: true\nignored_fields: [pips_sys, fuel]\n",
        )?;
        assert_eq!(config.name, "cmdr");
        assert!(config.abort_on_malformed);
        assert!(config.is_ignored(StatusField::PipsSys));
        assert!(config.is_ignored(StatusField::Fuel));
        assert!(!config.is_ignored(StatusField::Docked));
        Ok(())
    }

    #[test]
    fn test_unknown_field_name_is_rejected() {
        let result = MonitorConfig::from_yaml_str("ignored_fields: [warp_drive]\n");
        assert!(matches!(result, Err(MonitorError::Config(msg)) if msg.contains("warp_drive")));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = MonitorConfig::from_yaml_str("abort: true\n");
        assert!(matches!(result, Err(MonitorError::Config(_))));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let result = MonitorConfig::from_yaml_str("name: '  '\n");
        assert!(matches!(result, Err(MonitorError::Config(_))));
    }

    #[test]
    fn test_load_from_path() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "name: from-disk")?;
        let config = MonitorConfig::load_from_path(file.path())?;
        assert_eq!(config.name, "from-disk");
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let result = MonitorConfig::load_from_path("/nonexistent/flightdeck.yaml");
        assert!(matches!(result, Err(MonitorError::Io { .. })));
    }
}
