//! Output types for fieldfmt commands
//!
//! All output structures are designed to be JSON-first for machine
//! consumption.

use serde::{Deserialize, Serialize};

use crate::core::Document;

/// Result of `fieldfmt field`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldResult {
    /// The candidate text that was examined
    pub input: String,
    /// Whether the text parsed as JSON and was reformatted
    pub formatted: bool,
    /// The resulting text: the indented re-serialization, or the input
    /// unchanged on pass-through
    pub output: String,
}

/// One marked field's outcome within a page pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldReport {
    /// Position of the field in page order (0-indexed)
    pub index: usize,
    /// Whether the field's text was reformatted and styled
    pub formatted: bool,
}

/// Summary of one formatting pass over a page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageReport {
    /// Marker class used to select candidate fields
    pub marker: String,
    /// Total fields in the page
    pub fields_scanned: usize,
    /// Fields carrying the marker class
    pub fields_matched: usize,
    /// Marked fields whose text was valid JSON
    pub fields_formatted: usize,
    /// Marked fields passed through untouched
    pub fields_skipped: usize,
    /// Per-field outcomes, in page order
    pub fields: Vec<FieldReport>,
}

/// Result of `fieldfmt page`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult {
    /// Summary of the pass
    pub report: PageReport,
    /// The rewritten page description
    pub page: Document,
}

/// Result of `fieldfmt apply`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyResult {
    /// Path to the page file that was processed
    pub file_path: String,
    /// Path to the backup file (None if --no-backup)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_path: Option<String>,
    /// Whether changes were actually written (false for dry-run)
    pub applied: bool,
    /// Summary of the pass
    pub report: PageReport,
}

/// Generic error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always true for errors
    pub error: bool,
    /// Error code
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: true,
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Error codes used throughout fieldfmt
#[allow(dead_code)]
pub mod error_codes {
    pub const FILE_NOT_FOUND: &str = "FILE_NOT_FOUND";
    pub const INVALID_PAGE: &str = "INVALID_PAGE";
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const WRITE_FAILED: &str = "WRITE_FAILED";
}
