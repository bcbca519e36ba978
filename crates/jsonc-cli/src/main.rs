use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use jsonc_par::{parse_owned, Value};

/// Decode a JSON document and print its value tree.
///
/// This binary exists to exercise the decoder end to end; it is a
/// demonstration front end, not a supported command-line tool.
#[derive(Debug, Parser)]
#[command(name = "jsonc", version, about)]
struct Cli {
    /// Path to the JSON file to decode.
    path: PathBuf,

    /// Emit verbose tracing output on stderr.
    #[arg(short, long, env = "JSONC_VERBOSE")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    tracing::debug!(path = %cli.path.display(), "reading input file");
    let bytes = fs::read(&cli.path)?;

    tracing::debug!(bytes = bytes.len(), "parsing document");
    let doc = match parse_owned(&bytes) {
        Ok(doc) => doc,
        Err(err) => {
            anyhow::bail!(
                "{} error at {}: {}",
                err.code,
                err.position,
                err.message
            );
        }
    };

    print_value(doc.root(), 0);
    Ok(())
}

fn print_value(value: &Value<'_>, depth: usize) {
    let indent = "  ".repeat(depth);
    match value {
        Value::Null => println!("{indent}null"),
        Value::Bool(b) => println!("{indent}{b}"),
        Value::Number(n) => println!("{indent}{n}"),
        Value::String(s) => println!("{indent}{s:?}"),
        Value::Array(items) => {
            println!("{indent}[");
            for item in *items {
                print_value(item, depth + 1);
            }
            println!("{indent}]");
        }
        Value::Object(entries) => {
            println!("{indent}{{");
            for (key, val) in *entries {
                println!("{indent}  {key:?}:");
                print_value(val, depth + 2);
            }
            println!("{indent}}}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_path_and_verbose_flag() {
        let cli = Cli::parse_from(["jsonc", "input.json", "--verbose"]);
        assert_eq!(cli.path, PathBuf::from("input.json"));
        assert!(cli.verbose);
    }

    #[test]
    fn cli_defaults_verbose_to_false() {
        let cli = Cli::parse_from(["jsonc", "input.json"]);
        assert!(!cli.verbose);
    }
}
