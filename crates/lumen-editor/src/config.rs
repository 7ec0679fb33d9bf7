use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// Configuration of an [`EditorSession`](crate::EditorSession).
///
/// Missing fields take their default value when deserializing.
///
/// # Example
///
/// ```
/// use lumen_editor::EditorConfig;
///
/// let config = EditorConfig::from_json_str(r#"{ "intensity_channel": 0 }"#).unwrap();
/// assert_eq!(config.intensity_channel, 0);
/// assert_eq!(config.max_gamma, 10.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Index of the channel holding the intensity plane, e.g. 2 for the V of HSV.
    pub intensity_channel: usize,
    /// Largest gamma accepted by [`EditorSession::apply_gamma`](crate::EditorSession::apply_gamma).
    pub max_gamma: f64,
    /// Largest level accepted by the blur and sharpen previews.
    pub max_slider_level: u8,
    /// Maximum number of undo snapshots kept, `None` keeps them all.
    pub history_limit: Option<usize>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            intensity_channel: 2,
            max_gamma: 10.0,
            max_slider_level: 10,
            history_limit: None,
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from a JSON string and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, EditorError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration from a JSON file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EditorError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> Result<(), EditorError> {
        if !self.max_gamma.is_finite() || self.max_gamma <= 0.0 {
            return Err(EditorError::InvalidConfig(format!(
                "max_gamma must be a finite positive value, got {}",
                self.max_gamma
            )));
        }

        if self.max_slider_level == 0 {
            return Err(EditorError::InvalidConfig(
                "max_slider_level must be at least 1".to_string(),
            ));
        }

        if self.history_limit == Some(0) {
            return Err(EditorError::InvalidConfig(
                "history_limit must be at least 1 when set".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::EditorConfig;
    use crate::error::EditorError;

    #[test]
    fn test_default_config() -> Result<(), EditorError> {
        let config = EditorConfig::default();
        config.validate()?;
        assert_eq!(config.intensity_channel, 2);
        assert_eq!(config.max_slider_level, 10);
        assert_eq!(config.history_limit, None);
        Ok(())
    }

    #[test]
    fn test_from_json_str() -> Result<(), EditorError> {
        let config = EditorConfig::from_json_str(
            r#"{ "intensity_channel": 0, "max_gamma": 5.0, "history_limit": 8 }"#,
        )?;
        assert_eq!(
            config,
            EditorConfig {
                intensity_channel: 0,
                max_gamma: 5.0,
                max_slider_level: 10,
                history_limit: Some(8),
            }
        );
        Ok(())
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            EditorConfig::from_json_str(r#"{ "max_gamma": 0.0 }"#),
            Err(EditorError::InvalidConfig(_))
        ));
        assert!(matches!(
            EditorConfig::from_json_str(r#"{ "max_slider_level": 0 }"#),
            Err(EditorError::InvalidConfig(_))
        ));
        assert!(matches!(
            EditorConfig::from_json_str(r#"{ "history_limit": 0 }"#),
            Err(EditorError::InvalidConfig(_))
        ));
        assert!(matches!(
            EditorConfig::from_json_str("not json"),
            Err(EditorError::Json(_))
        ));
    }

    #[test]
    fn test_from_json_file() -> Result<(), EditorError> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{ "max_slider_level": 20 }}"#)?;

        let config = EditorConfig::from_json_file(file.path())?;
        assert_eq!(config.max_slider_level, 20);
        assert_eq!(config.intensity_channel, 2);

        assert!(matches!(
            EditorConfig::from_json_file(file.path().with_extension("missing")),
            Err(EditorError::Io(_))
        ));
        Ok(())
    }
}
