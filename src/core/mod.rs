//! Core formatting logic
//!
//! This module contains all the business logic for fieldfmt commands.

pub mod document;
pub mod format;
pub mod pretty;

// Re-export commonly used types
pub use document::{DisplayField, Document, DocumentError, FieldStyle};
pub use format::{
    apply_page_file, format_display_fields, format_page_file, format_page_str, FormatOptions,
};
pub use pretty::{reformat_candidate, FieldOutcome};
