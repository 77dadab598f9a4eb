//! Human-friendly text output formatting
//!
//! Used when --format text is specified.

use super::types::*;

/// Format FieldResult as human-readable text
pub fn format_field_result(result: &FieldResult) -> String {
    let mut output = String::new();

    if result.formatted {
        output.push_str("✓ Formatted\n\n");
        output.push_str(&result.output);
        output.push('\n');
    } else {
        output.push_str("– Not JSON, passed through\n\n");
        output.push_str(&result.output);
        output.push('\n');
    }

    output
}

fn push_report(report: &PageReport, output: &mut String) {
    output.push_str(&format!("Marker:    .{}\n", report.marker));
    output.push_str(&format!("Scanned:   {} field(s)\n", report.fields_scanned));
    output.push_str(&format!("Matched:   {} field(s)\n", report.fields_matched));
    output.push_str(&format!(
        "Formatted: {} field(s), {} passed through\n",
        report.fields_formatted, report.fields_skipped
    ));

    if !report.fields.is_empty() {
        output.push('\n');
        for field in &report.fields {
            output.push_str(&format!(
                "  field {}: {}\n",
                field.index,
                if field.formatted {
                    "formatted"
                } else {
                    "passed through"
                }
            ));
        }
    }
}

/// Format PageResult as human-readable text
pub fn format_page_result(result: &PageResult) -> String {
    let mut output = String::new();

    push_report(&result.report, &mut output);
    output.push('\n');
    output.push_str(&result.page.to_json_string());
    output.push('\n');

    output
}

/// Format ApplyResult as human-readable text
pub fn format_apply_result(result: &ApplyResult) -> String {
    let mut output = String::new();

    let mode = if result.applied { "APPLIED" } else { "DRY-RUN" };
    output.push_str(&format!("[{}]\n", mode));
    output.push_str(&format!("File:   {}\n", result.file_path));
    if let Some(ref bak) = result.backup_path {
        output.push_str(&format!("Backup: {}\n", bak));
    }
    output.push('\n');
    push_report(&result.report, &mut output);

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Document;

    #[test]
    fn test_field_result_text_shows_outcome() {
        let text = format_field_result(&FieldResult {
            input: "42".to_string(),
            formatted: true,
            output: "42".to_string(),
        });
        assert!(text.contains("Formatted"));

        let text = format_field_result(&FieldResult {
            input: "nope".to_string(),
            formatted: false,
            output: "nope".to_string(),
        });
        assert!(text.contains("passed through"));
    }

    #[test]
    fn test_page_result_text_includes_counts() {
        let text = format_page_result(&PageResult {
            report: PageReport {
                marker: "readonly".to_string(),
                fields_scanned: 3,
                fields_matched: 2,
                fields_formatted: 1,
                fields_skipped: 1,
                fields: vec![],
            },
            page: Document::default(),
        });
        assert!(text.contains(".readonly"));
        assert!(text.contains("Scanned:   3"));
        assert!(text.contains("1 passed through"));
    }
}
