use super::definition::Screen;
use crate::error::DefinitionError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The body of the platform's "update flow JSON" call.
///
/// `version` is the schema version stored alongside the flow record; the
/// compiler never invents one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FlowDocument {
    pub version: String,
    pub screens: Vec<Screen>,
}

impl FlowDocument {
    pub fn new(version: impl Into<String>, screens: Vec<Screen>) -> Self {
        Self {
            version: version.into(),
            screens,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a flow document from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DefinitionError::Io(format!("Could not read '{}': {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    pub fn to_json_string(&self) -> Result<String, DefinitionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the document as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DefinitionError> {
        let path = path.as_ref();
        let json = self.to_json_string()?;
        fs::write(path, json).map_err(|e| {
            DefinitionError::Io(format!("Could not write '{}': {}", path.display(), e))
        })
    }
}
