//! CLI interface using clap
//!
//! Defines all command-line arguments and subcommands.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::format::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_MARKER};

#[derive(Parser)]
#[command(name = "fieldfmt")]
#[command(author, version, about = "Pretty-print JSON embedded in read-only admin display fields", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON output (default, for machine consumption)
    Json,
    /// Human-readable text
    Text,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reformat one candidate text if it parses as JSON
    Field {
        /// The candidate text (use --file for file input, or pipe stdin)
        text: Option<String>,

        /// File to read the candidate text from
        #[arg(long, short = 'F')]
        file: Option<PathBuf>,
    },

    /// Format a page description's marked fields (preview, never writes)
    Page {
        /// Page description file (JSON; reads stdin if omitted)
        #[arg(long, short = 'F')]
        file: Option<PathBuf>,

        /// Marker class selecting read-only display fields
        #[arg(long, short = 'm', default_value = DEFAULT_MARKER)]
        marker: String,

        /// Font family set on formatted fields
        #[arg(long, default_value = DEFAULT_FONT_FAMILY)]
        font_family: String,

        /// Font size set on formatted fields
        #[arg(long, default_value = DEFAULT_FONT_SIZE)]
        font_size: String,
    },

    /// Format a page description file in place (with backup)
    Apply {
        /// Page description file to rewrite
        #[arg(long, short = 'F', required = true)]
        file: PathBuf,

        /// Marker class selecting read-only display fields
        #[arg(long, short = 'm', default_value = DEFAULT_MARKER)]
        marker: String,

        /// Font family set on formatted fields
        #[arg(long, default_value = DEFAULT_FONT_FAMILY)]
        font_family: String,

        /// Font size set on formatted fields
        #[arg(long, default_value = DEFAULT_FONT_SIZE)]
        font_size: String,

        /// Dry-run mode (show what would change, don't write)
        #[arg(long)]
        dry_run: bool,

        /// Disable backup (.bak) creation
        #[arg(long)]
        no_backup: bool,
    },
}

/// Parse CLI arguments
pub fn parse() -> Cli {
    Cli::parse()
}

/// Read the candidate text from stdin, hinting if stdin is a terminal
fn read_stdin_text() -> Result<String, String> {
    use std::io::{self, IsTerminal, Read};

    if io::stdin().is_terminal() {
        eprintln!("fieldfmt: reading from stdin (pipe data or press Ctrl-D when done)");
        eprintln!("  hint: fieldfmt field '{{\"a\":1}}' — or — cat value.txt | fieldfmt field");
    }
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| format!("Failed to read stdin: {}", e))?;
    Ok(input)
}

/// Handle the field command
pub fn handle_field(
    text: Option<&str>,
    file: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<String, String> {
    use crate::core::{reformat_candidate, FieldOutcome};
    use crate::output::json::format_json;
    use crate::output::text::format_field_result;
    use crate::output::FieldResult;

    let input = if let Some(file_path) = file {
        std::fs::read_to_string(file_path)
            .map_err(|e| format!("Failed to read {}: {}", file_path.display(), e))?
    } else if let Some(text) = text {
        text.to_string()
    } else {
        read_stdin_text()?
    };

    let result = match reformat_candidate(&input) {
        FieldOutcome::Formatted(pretty) => FieldResult {
            input: input.clone(),
            formatted: true,
            output: pretty,
        },
        FieldOutcome::PassThrough => FieldResult {
            input: input.clone(),
            formatted: false,
            output: input,
        },
    };

    match format {
        OutputFormat::Json => Ok(format_json(&result)),
        OutputFormat::Text => Ok(format_field_result(&result)),
    }
}

/// Handle the page command
pub fn handle_page(
    file: Option<&PathBuf>,
    marker: &str,
    font_family: &str,
    font_size: &str,
    format: OutputFormat,
) -> Result<String, String> {
    use crate::core::{format_page_file, format_page_str, FormatOptions};
    use crate::output::json::format_json;
    use crate::output::text::format_page_result;

    let options = FormatOptions {
        marker: marker.to_string(),
        font_family: font_family.to_string(),
        font_size: font_size.to_string(),
    };

    let result = if let Some(file_path) = file {
        format_page_file(file_path, &options)?
    } else {
        let input = read_stdin_text()?;
        format_page_str(&input, &options)?
    };

    match format {
        OutputFormat::Json => Ok(format_json(&result)),
        OutputFormat::Text => Ok(format_page_result(&result)),
    }
}

/// Handle the apply command
pub fn handle_apply(
    file: &std::path::Path,
    marker: &str,
    font_family: &str,
    font_size: &str,
    dry_run: bool,
    no_backup: bool,
    format: OutputFormat,
) -> Result<String, String> {
    use crate::core::{apply_page_file, FormatOptions};
    use crate::output::json::format_json;
    use crate::output::text::format_apply_result;

    let options = FormatOptions {
        marker: marker.to_string(),
        font_family: font_family.to_string(),
        font_size: font_size.to_string(),
    };

    let result = apply_page_file(file, &options, dry_run, !no_backup)?;

    match format {
        OutputFormat::Json => Ok(format_json(&result)),
        OutputFormat::Text => Ok(format_apply_result(&result)),
    }
}
