//! screengen CLI
//!
//! Generates `@Screens` dispatchers from front-end declaration files.

use std::io::{IsTerminal, Write};

use screengen::commands::{
    explain_error, generate_files, parse_cli_options, CliOptions, ErrorFormat, RunSummary,
};
use screengen::tracing_setup::init_tracing;
use screengen_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, TerminalEmitter};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "generate" | "check" => {
            let options = match parse_cli_options(&args[2..]) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!();
                    eprintln!("Usage: screengen {command} <file.json>... [options]");
                    std::process::exit(1);
                }
            };
            let write_source = command == "generate";
            if run(&options, write_source).has_errors() {
                std::process::exit(1);
            }
        }
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: screengen explain <CODE>");
                eprintln!("Example: screengen explain E1002");
                std::process::exit(1);
            }
            if let Err(message) = explain_error(&args[2], &mut std::io::stdout()) {
                eprintln!("error: {message}");
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("screengen {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Run `generate`/`check` against the real stdout/stderr (or `-o` file).
///
/// Only the emitter writes to stderr until it is finished.
fn run(options: &CliOptions, write_source: bool) -> RunSummary {
    let mut source = Vec::new();

    let result = match options.error_format {
        ErrorFormat::Text => {
            let is_tty = std::io::stderr().is_terminal();
            let mut emitter = TerminalEmitter::stderr(options.color, is_tty);
            let result = generate_files(options, &mut source, &mut emitter, write_source);
            if let Ok(summary) = &result {
                emitter.emit_summary(summary.errors, summary.warnings);
            }
            emitter.flush();
            result
        }
        ErrorFormat::Json => {
            let mut emitter = JsonEmitter::new(std::io::stderr());
            emitter.begin();
            let result = generate_files(options, &mut source, &mut emitter, write_source);
            emitter.end();
            emitter.flush();
            result
        }
    };

    let summary = match result {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("error: failed to buffer generated source: {err}");
            std::process::exit(1);
        }
    };

    if write_source && !source.is_empty() {
        let written = match &options.output {
            Some(path) => std::fs::write(path, &source),
            None => std::io::stdout().write_all(&source),
        };
        if let Err(err) = written {
            eprintln!("error: failed to write generated source: {err}");
            std::process::exit(1);
        }
    }

    summary
}

fn print_usage() {
    println!("screengen - dispatcher generator for @Screens enums");
    println!();
    println!("Usage: screengen <command> [options]");
    println!();
    println!("Commands:");
    println!("  generate <file.json>...  Print the generated extension for each declaration");
    println!("  check <file.json>...     Report diagnostics without printing source");
    println!("  explain <CODE>           Explain a diagnostic code (e.g., E1002)");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Options:");
    println!("  -o <path>                  Write generated source to a file");
    println!("  --unlabeled=<policy>       Unlabeled values: positional (default), labeled");
    println!("  --indent=<n>               Spaces per indentation level (default: 4)");
    println!("  --error-format=<format>    Diagnostics as text (default) or json");
    println!("  --color=<mode>             Colored diagnostics: auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  SCREENGEN_LOG              Log filter, e.g. screengen_codegen=debug");
    println!();
    println!("Examples:");
    println!("  screengen generate routes.json");
    println!("  screengen generate routes.json -o Routes+Screens.swift");
    println!("  screengen check routes.json --error-format=json");
    println!("  screengen explain W1001");
}
