//! The display formatter
//!
//! One sequential pass over a page's display fields: fields carrying the
//! marker class whose text parses as JSON get the indented re-serialization
//! and the monospace presentation style; everything else is left untouched.

use std::fs;
use std::path::Path;

use super::document::Document;
use super::pretty::{reformat_candidate, FieldOutcome};
use crate::output::{ApplyResult, FieldReport, PageReport, PageResult};

/// White-space mode applied to formatted fields so the inserted line breaks
/// and indentation render instead of collapsing.
pub const WHITE_SPACE_MODE: &str = "pre-wrap";

/// Default marker class for read-only display fields
pub const DEFAULT_MARKER: &str = "readonly";

/// Default monospace face applied to formatted fields
pub const DEFAULT_FONT_FAMILY: &str = "JetBrains Mono";

/// Default font size: one unit of the page's relative scale
pub const DEFAULT_FONT_SIZE: &str = "1em";

/// Options for a formatting pass
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Class token selecting candidate fields
    pub marker: String,
    /// Font family set on formatted fields
    pub font_family: String,
    /// Font size set on formatted fields
    pub font_size: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE.to_string(),
        }
    }
}

/// Format every marked display field in the document.
///
/// Fields are processed in page order. A field whose text is not valid JSON
/// is left completely unmodified, text and style alike, and never affects
/// the processing of any other field. Zero marked fields is a successful
/// no-op.
pub fn format_display_fields(document: &mut Document, options: &FormatOptions) -> PageReport {
    let mut reports = Vec::new();
    let mut formatted = 0;

    for (index, field) in document.fields.iter_mut().enumerate() {
        if !field.has_class(&options.marker) {
            continue;
        }

        let was_formatted = match reformat_candidate(&field.text) {
            FieldOutcome::Formatted(pretty) => {
                field.text = pretty;
                field.style.white_space = Some(WHITE_SPACE_MODE.to_string());
                field.style.font_family = Some(options.font_family.clone());
                field.style.font_size = Some(options.font_size.clone());
                formatted += 1;
                true
            }
            FieldOutcome::PassThrough => false,
        };

        reports.push(FieldReport {
            index,
            formatted: was_formatted,
        });
    }

    PageReport {
        marker: options.marker.clone(),
        fields_scanned: document.fields.len(),
        fields_matched: reports.len(),
        fields_formatted: formatted,
        fields_skipped: reports.len() - formatted,
        fields: reports,
    }
}

/// Format a page description given as a string (stdin input)
pub fn format_page_str(input: &str, options: &FormatOptions) -> Result<PageResult, String> {
    let mut document = Document::from_json_str(input).map_err(|e| e.to_string())?;
    let report = format_display_fields(&mut document, options);
    Ok(PageResult {
        report,
        page: document,
    })
}

/// Format a page description read from a file, without modifying it
pub fn format_page_file(path: &Path, options: &FormatOptions) -> Result<PageResult, String> {
    let mut document = Document::load(path).map_err(|e| e.to_string())?;
    let report = format_display_fields(&mut document, options);
    Ok(PageResult {
        report,
        page: document,
    })
}

/// Format a page file in place, with an optional `.bak` backup.
///
/// In dry-run mode the pass still runs and is reported, but nothing is
/// written and no backup is made.
pub fn apply_page_file(
    path: &Path,
    options: &FormatOptions,
    dry_run: bool,
    backup: bool,
) -> Result<ApplyResult, String> {
    let mut document = Document::load(path).map_err(|e| e.to_string())?;
    let report = format_display_fields(&mut document, options);

    let mut backup_path = None;
    if !dry_run {
        if backup {
            let bak = format!("{}.bak", path.display());
            fs::copy(path, &bak).map_err(|e| format!("Failed to create backup: {}", e))?;
            backup_path = Some(bak);
        }
        document.save(path).map_err(|e| e.to_string())?;
    }

    Ok(ApplyResult {
        file_path: path.display().to_string(),
        backup_path,
        applied: !dry_run,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::DisplayField;

    fn page(fields: Vec<DisplayField>) -> Document {
        Document { fields }
    }

    #[test]
    fn test_json_field_gets_text_and_style() {
        let mut doc = page(vec![DisplayField::new("readonly", r#"{"a":1,"b":[2,3]}"#)]);
        let report = format_display_fields(&mut doc, &FormatOptions::default());

        let field = &doc.fields[0];
        assert_eq!(field.text, "{\n  \"a\": 1,\n  \"b\": [\n    2,\n    3\n  ]\n}");
        assert_eq!(field.style.white_space.as_deref(), Some("pre-wrap"));
        assert_eq!(field.style.font_family.as_deref(), Some("JetBrains Mono"));
        assert_eq!(field.style.font_size.as_deref(), Some("1em"));
        assert_eq!(report.fields_formatted, 1);
    }

    #[test]
    fn test_non_json_field_is_untouched() {
        let mut doc = page(vec![DisplayField::new("readonly", "not json at all")]);
        let before = doc.fields[0].clone();
        let report = format_display_fields(&mut doc, &FormatOptions::default());

        assert_eq!(doc.fields[0], before);
        assert_eq!(report.fields_matched, 1);
        assert_eq!(report.fields_formatted, 0);
        assert_eq!(report.fields_skipped, 1);
    }

    #[test]
    fn test_unmarked_field_is_never_a_candidate() {
        // Valid JSON, but not carrying the marker class
        let mut doc = page(vec![DisplayField::new("form-row", r#"{"a":1}"#)]);
        let before = doc.fields[0].clone();
        let report = format_display_fields(&mut doc, &FormatOptions::default());

        assert_eq!(doc.fields[0], before);
        assert_eq!(report.fields_matched, 0);
    }

    #[test]
    fn test_failures_are_isolated_per_field() {
        let mut doc = page(vec![
            DisplayField::new("readonly", "{broken"),
            DisplayField::new("readonly", "[1,2]"),
            DisplayField::new("readonly", "<nope>"),
            DisplayField::new("readonly", "true"),
        ]);
        let report = format_display_fields(&mut doc, &FormatOptions::default());

        assert_eq!(report.fields_formatted, 2);
        assert_eq!(report.fields_skipped, 2);
        assert_eq!(doc.fields[1].text, "[\n  1,\n  2\n]");
        assert_eq!(doc.fields[3].text, "true");
        assert!(doc.fields[3].style.white_space.is_some());
        assert!(doc.fields[0].style.white_space.is_none());
    }

    #[test]
    fn test_bare_scalar_keeps_text_but_gains_style() {
        let mut doc = page(vec![DisplayField::new("readonly", "42")]);
        format_display_fields(&mut doc, &FormatOptions::default());

        assert_eq!(doc.fields[0].text, "42");
        assert_eq!(doc.fields[0].style.white_space.as_deref(), Some("pre-wrap"));
    }

    #[test]
    fn test_empty_page_is_a_successful_noop() {
        let mut doc = page(vec![]);
        let report = format_display_fields(&mut doc, &FormatOptions::default());

        assert_eq!(report.fields_scanned, 0);
        assert_eq!(report.fields_matched, 0);
        assert_eq!(report.fields_formatted, 0);
    }

    #[test]
    fn test_custom_marker_and_fonts() {
        let options = FormatOptions {
            marker: "ro-value".to_string(),
            font_family: "Fira Code".to_string(),
            font_size: "0.9em".to_string(),
        };
        let mut doc = page(vec![
            DisplayField::new("ro-value", "[]"),
            DisplayField::new("readonly", "[]"),
        ]);
        let report = format_display_fields(&mut doc, &options);

        assert_eq!(report.fields_matched, 1);
        assert_eq!(doc.fields[0].style.font_family.as_deref(), Some("Fira Code"));
        assert_eq!(doc.fields[0].style.font_size.as_deref(), Some("0.9em"));
        assert!(doc.fields[1].style.font_family.is_none());
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let mut doc = page(vec![DisplayField::new("readonly", r#"{"a":1,"b":[2,3]}"#)]);
        format_display_fields(&mut doc, &FormatOptions::default());
        let once = doc.clone();
        format_display_fields(&mut doc, &FormatOptions::default());
        assert_eq!(doc, once);
    }

    #[test]
    fn test_report_indexes_are_page_positions() {
        let mut doc = page(vec![
            DisplayField::new("plain", "x"),
            DisplayField::new("readonly", "1"),
            DisplayField::new("plain", "y"),
            DisplayField::new("readonly", "nope"),
        ]);
        let report = format_display_fields(&mut doc, &FormatOptions::default());

        assert_eq!(report.fields.len(), 2);
        assert_eq!(report.fields[0].index, 1);
        assert!(report.fields[0].formatted);
        assert_eq!(report.fields[1].index, 3);
        assert!(!report.fields[1].formatted);
    }
}
