//! fieldfmt - pretty-print JSON embedded in read-only admin display fields
//!
//! Scans a page description for fields carrying a marker class, reformats
//! the ones whose text parses as JSON, and leaves everything else untouched.

mod core;
mod output;

#[cfg(feature = "cli")]
mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    #[cfg(feature = "cli")]
    {
        use cli::{parse, Commands};

        let args = parse();

        // If no command, show help
        let Some(command) = args.command else {
            eprintln!("fieldfmt: pretty-print JSON embedded in read-only admin display fields");
            eprintln!();
            eprintln!("Usage: fieldfmt <COMMAND>");
            eprintln!();
            eprintln!("Commands:");
            eprintln!("  field  Reformat one candidate text if it parses as JSON");
            eprintln!("  page   Format a page description's marked fields (preview)");
            eprintln!("  apply  Format a page description file in place (with backup)");
            eprintln!();
            eprintln!("Options:");
            eprintln!("  -f, --format <FORMAT>  Output format [json|text] (default: json)");
            eprintln!("  -h, --help             Print help");
            eprintln!("  -V, --version          Print version");
            return ExitCode::SUCCESS;
        };

        let format = args.format;

        let result = match command {
            Commands::Field { text, file } => {
                cli::handle_field(text.as_deref(), file.as_ref(), format)
            }

            Commands::Page {
                file,
                marker,
                font_family,
                font_size,
            } => cli::handle_page(file.as_ref(), &marker, &font_family, &font_size, format),

            Commands::Apply {
                file,
                marker,
                font_family,
                font_size,
                dry_run,
                no_backup,
            } => cli::handle_apply(
                &file,
                &marker,
                &font_family,
                &font_size,
                dry_run,
                no_backup,
                format,
            ),
        };

        match result {
            Ok(output) => {
                println!("{}", output);
                ExitCode::SUCCESS
            }
            Err(e) => {
                // Output error as structured JSON
                let error = crate::output::ErrorResponse::new("COMMAND_ERROR", &e);
                let error_json = serde_json::to_string(&error)
                    .unwrap_or_else(|_| format!(r#"{{"error":true,"message":"{}"}}"#, e));
                eprintln!("{}", error_json);
                ExitCode::FAILURE
            }
        }
    }

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("CLI feature not enabled. Build with --features cli");
        ExitCode::FAILURE
    }
}
