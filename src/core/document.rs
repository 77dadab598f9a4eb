//! The page model
//!
//! An explicit, serializable stand-in for the host page's rendering surface:
//! a flat list of display fields in page order, each carrying its class
//! attribute, visible text, and the inline style properties we may set.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading or saving a page description
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read page description: {0}")]
    Io(#[from] std::io::Error),
    #[error("page description is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Inline style properties the formatter may set on a field.
///
/// `None` means "not set by us": the host page's own styling stands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStyle {
    /// White-space handling (`pre-wrap` once formatted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub white_space: Option<String>,
    /// Font family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Font size in the page's relative scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
}

/// One read-only field's rendered value in the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayField {
    /// HTML-style class attribute: whitespace-separated tokens
    #[serde(default)]
    pub class: String,
    /// The field's visible text
    pub text: String,
    /// Inline style, if any has been set
    #[serde(default, skip_serializing_if = "FieldStyle::is_unset")]
    pub style: FieldStyle,
}

impl FieldStyle {
    fn is_unset(&self) -> bool {
        *self == FieldStyle::default()
    }
}

impl DisplayField {
    /// Create an unstyled field with the given class attribute and text
    #[allow(dead_code)]
    pub fn new(class: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            text: text.into(),
            style: FieldStyle::default(),
        }
    }

    /// Whether the field's class attribute contains `marker` as a token.
    ///
    /// This is the opaque selector contract: the marker is a class name
    /// applied by the surrounding admin framework, matched by whitespace
    /// token equality like the DOM's `classList.contains`.
    pub fn has_class(&self, marker: &str) -> bool {
        self.class.split_whitespace().any(|token| token == marker)
    }
}

/// A page's display fields, in page order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub fields: Vec<DisplayField>,
}

impl Document {
    /// Parse a page description from its JSON form
    pub fn from_json_str(input: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a page description from a file
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Serialize the page description back to indented JSON
    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{\"fields\":[]}".to_string())
    }

    /// Write the page description to a file
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        fs::write(path, self.to_json_string())?;
        Ok(())
    }
}
