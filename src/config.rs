//! Render configuration
//!
//! Configuration can be built in code with the `with_*` methods or loaded from a
//! TOML file. Keys missing from the file keep their defaults:
//!
//! ```toml
//! id_prefix = "bx"
//! debug_stroke = "#ff5757"
//! debug_stroke_width = 1
//!
//! [document]
//! padding = 8
//! standalone = true
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::ids::DefIds;

pub const DEFAULT_ID_PREFIX: &str = "bx";

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Options for the box renderer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Prefix of every generated definition id
    pub id_prefix: String,

    /// Stroke colour of the debug outline
    pub debug_stroke: String,

    /// Stroke width of the debug outline
    pub debug_stroke_width: f64,

    /// Options for wrapping a fragment into a document
    pub document: DocumentConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            debug_stroke: "#ff5757".to_string(),
            debug_stroke_width: 1.0,
            document: DocumentConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the definition id prefix
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Set the debug outline colour
    pub fn with_debug_stroke(mut self, color: impl Into<String>) -> Self {
        self.debug_stroke = color.into();
        self
    }

    /// Set the document options
    pub fn with_document(mut self, document: DocumentConfig) -> Self {
        self.document = document;
        self
    }

    pub fn def_ids(&self) -> DefIds {
        DefIds::new(self.id_prefix.clone())
    }
}

/// Options for standalone SVG output
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Padding around the viewBox
    pub padding: f64,

    /// Whether to include the XML declaration
    pub standalone: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            padding: 0.0,
            standalone: true,
        }
    }
}

impl DocumentConfig {
    /// Set the viewBox padding
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }
}
