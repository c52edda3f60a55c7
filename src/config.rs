use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::LessonError;

/// Settings handed explicitly to the lessons that need them.
///
/// `global_value` stands in for the process-wide variable the scope lesson
/// talks about; here it is just another argument.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LessonConfig {
    pub global_value: i32,
    pub banner_width: usize,
    pub color: bool,
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            global_value: 100,
            banner_width: 40,
            color: true,
        }
    }
}

impl LessonConfig {
    pub const FILE_NAME: &'static str = "lessons.toml";

    pub fn from_toml_str(content: &str) -> Result<Self, LessonError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads `path` when it exists; a missing file means defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, LessonError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no lesson config, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|err| LessonError::Config(format!("Failed to read {}: {err}", path.display())))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(?config, "loaded lesson config");
        Ok(config)
    }
}
