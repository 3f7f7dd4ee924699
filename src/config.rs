//! Labeler configuration file support.
//!
//! The configuration lists the drawing tools and classification fields of a
//! labeling project. Tool names and field names become label keys, so they
//! are validated to be unique across both lists.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{ClassificationField, Tool};
use crate::state::AppState;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Tools and classification fields of a labeling project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelerConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Drawing tools, in display order
    #[serde(default)]
    pub tools: Vec<Tool>,

    /// Classification fields, in display order
    #[serde(default)]
    pub classification_fields: Vec<ClassificationField>,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl LabelerConfig {
    /// Create a new configuration with the given tools and fields.
    pub fn new(tools: Vec<Tool>, classification_fields: Vec<ClassificationField>) -> Self {
        Self {
            version: CONFIG_VERSION,
            tools,
            classification_fields,
            log_level: LogLevel::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize and validate configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!(
            "Loaded {} tools and {} classification fields from {:?}",
            config.tools.len(),
            config.classification_fields.len(),
            path
        );
        Ok(config)
    }

    /// Check that tool IDs are unique and that no label key is shared.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut ids = HashSet::new();
        let mut keys = HashSet::new();

        for tool in &self.tools {
            if !ids.insert(tool.id.as_str()) {
                return Err(ConfigError::DuplicateTool {
                    key: tool.id.clone(),
                });
            }
            if !keys.insert(tool.name.as_str()) {
                return Err(ConfigError::DuplicateTool {
                    key: tool.name.clone(),
                });
            }
        }

        for field in &self.classification_fields {
            if !keys.insert(field.name.as_str()) {
                return Err(ConfigError::NameCollision {
                    name: field.name.clone(),
                });
            }
        }

        Ok(())
    }

    /// Create an empty labeling state for this configuration.
    pub fn to_state(&self) -> AppState {
        AppState::new(
            self.tools.clone(),
            self.classification_fields
                .iter()
                .map(ClassificationField::without_answer)
                .collect(),
        )
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// Two tools share an ID or a name
    #[error("Duplicate tool '{key}'")]
    DuplicateTool { key: String },

    /// A classification field shares its name with a tool or another field
    #[error("Label key '{name}' is defined more than once")]
    NameCollision { name: String },

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldKind, ToolKind};

    fn create_test_config() -> LabelerConfig {
        LabelerConfig::new(
            vec![
                Tool::new("t1", "Car", ToolKind::Rectangle, "#ff0000"),
                Tool::new("t2", "Tree", ToolKind::Polygon, "#00ff00"),
            ],
            vec![ClassificationField::new("weather", "Weather?", FieldKind::Radio)],
        )
    }

    #[test]
    fn test_json_roundtrip() {
        let config = create_test_config();
        let json = config.to_json().unwrap();
        let loaded = LabelerConfig::from_json(&json).unwrap();

        assert_eq!(loaded.version, CONFIG_VERSION);
        assert_eq!(loaded.tools, config.tools);
        assert_eq!(loaded.classification_fields, config.classification_fields);
        assert_eq!(loaded.log_level, LogLevel::Info);
    }

    #[test]
    fn test_parse_template_json() {
        let json = r##"{
            "version": 1,
            "tools": [
                {"id": "a", "name": "Vehicle", "tool": "rectangle", "color": "#ff0000"},
                {"id": "b", "name": "Lane", "tool": "line", "color": "#00ffff"}
            ],
            "classificationFields": [
                {"name": "daytime", "title": "Is it day?", "type": "radio",
                 "options": [{"value": "yes", "label": "Yes"}, {"value": "no", "label": "No"}]}
            ],
            "logLevel": "debug"
        }"##;

        let config = LabelerConfig::from_json(json).unwrap();
        assert_eq!(config.tools[1].kind, ToolKind::Line);
        assert_eq!(config.classification_fields[0].options.len(), 2);
        assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_version_too_new() {
        let json = r#"{"version": 99}"#;
        assert!(matches!(
            LabelerConfig::from_json(json),
            Err(ConfigError::VersionTooNew { file_version: 99, .. })
        ));
    }

    #[test]
    fn test_unknown_tool_kind_rejected() {
        let json = r##"{"version": 1, "tools": [{"id": "a", "name": "A", "tool": "lasso", "color": "#fff"}]}"##;
        assert!(matches!(
            LabelerConfig::from_json(json),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_duplicate_tool_names_rejected() {
        let mut config = create_test_config();
        config
            .tools
            .push(Tool::new("t3", "Car", ToolKind::Point, "#000000"));

        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateTool { ref key }) if key == "Car"
        ));
    }

    #[test]
    fn test_duplicate_tool_ids_rejected() {
        let mut config = create_test_config();
        config
            .tools
            .push(Tool::new("t1", "Bike", ToolKind::Point, "#000000"));

        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateTool { ref key }) if key == "t1"
        ));
    }

    #[test]
    fn test_field_tool_collision_rejected() {
        let mut config = create_test_config();
        config
            .classification_fields
            .push(ClassificationField::new("Tree", "Tree?", FieldKind::Text));

        assert!(matches!(
            config.validate(),
            Err(ConfigError::NameCollision { ref name }) if name == "Tree"
        ));
    }

    #[test]
    fn test_to_state_starts_unanswered() {
        let mut config = create_test_config();
        config.classification_fields[0].user_answer = Some("sunny".into());
        config.tools[0].color = "#123456".to_string();

        let state = config.to_state();

        assert_eq!(state.tools.len(), 2);
        assert_eq!(state.tools[0].color, "#123456");
        assert!(!state.classification_fields[0].has_answer());
        assert!(state.annotations.is_empty());
        assert!(state.label.is_none());
        assert!(state.current_tool_id.is_none());
    }
}
