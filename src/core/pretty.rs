//! The per-field JSON transform
//!
//! Takes one candidate text and either produces its canonical two-space
//! re-serialization or passes it through untouched.

use serde_json::Value;

/// Outcome of attempting to reformat one candidate text.
///
/// "Not valid JSON" is an outcome here, never an error: the caller decides
/// that pass-through means "leave the field alone".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The text parsed as JSON; here is its indented re-serialization.
    Formatted(String),
    /// The text is not a JSON-grammar value; nothing to do.
    PassThrough,
}

/// Attempt to reformat one candidate text as indented JSON.
///
/// Accepts any JSON-grammar value (object, array, string, number, boolean,
/// null). The re-serialization uses two spaces per nesting level and is
/// canonical: feeding a `Formatted` output back in yields the byte-identical
/// string.
pub fn reformat_candidate(text: &str) -> FieldOutcome {
    let Ok(value) = serde_json::from_str::<Value>(text) else {
        return FieldOutcome::PassThrough;
    };

    match serde_json::to_string_pretty(&value) {
        Ok(pretty) => FieldOutcome::Formatted(pretty),
        // Serializing a Value we just parsed cannot fail in practice
        Err(_) => FieldOutcome::PassThrough,
    }
}
