//! Kwfmt CLI - a capitalization formatter for keyword list files.
//!
//! Each line of an input is treated as one keyword string and formatted
//! independently.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use similar::TextDiff;

use kwfmt::config::Config;
use kwfmt::format_lines;

/// A capitalization formatter for advertising keyword lists.
#[derive(Parser, Debug)]
#[command(name = "kwfmt")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s) to format. Defaults to the config include patterns,
    /// or stdin when there are none.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Write formatted output back to the input file(s).
    #[arg(short, long)]
    write: bool,

    /// Check if files are already formatted (exit 1 if not), printing a
    /// diff for each file that is not.
    #[arg(short, long)]
    check: bool,

    /// Read input from stdin.
    #[arg(long)]
    stdin: bool,

    /// Keep U.S. state abbreviations uppercase.
    #[arg(long)]
    states: bool,

    /// Path to a configuration file (default: .kwfmt.toml, discovered
    /// upward from the current directory).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    let mut options = config.options();
    if args.states {
        options.with_states = true;
    }

    let files = if args.files.is_empty() && !args.stdin {
        let base_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        match config.collect_files(&base_dir) {
            Ok(files) => files,
            Err(e) => {
                eprintln!("Error collecting files: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        args.files.clone()
    };

    if args.stdin || files.is_empty() {
        let mut input = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut input) {
            eprintln!("Error reading stdin: {}", e);
            return ExitCode::FAILURE;
        }
        print!("{}", format_lines(&input, &options));
        return ExitCode::SUCCESS;
    }

    let mut all_formatted = true;

    for file in &files {
        let input = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading {}: {}", file.display(), e);
                return ExitCode::FAILURE;
            }
        };

        let output = format_lines(&input, &options);

        if args.check {
            if input != output {
                eprintln!("{}: not formatted", file.display());
                print_diff(&input, &output);
                all_formatted = false;
            }
        } else if args.write {
            if input != output {
                if let Err(e) = fs::write(file, &output) {
                    eprintln!("Error writing {}: {}", file.display(), e);
                    return ExitCode::FAILURE;
                }
            }
        } else {
            print!("{}", output);
        }
    }

    if args.check && !all_formatted {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Load the explicit config file, or discover one upward from the current
/// directory. Errors are rendered as user-facing messages.
fn load_config(args: &Args) -> Result<Config, String> {
    if let Some(path) = &args.config {
        return Config::from_file(path).map_err(|e| format!("Error loading config: {}", e));
    }
    let start_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match Config::discover(&start_dir) {
        Ok(Some((_, config))) => Ok(config),
        Ok(None) => Ok(Config::default()),
        Err(e) => Err(format!("Error loading config: {}", e)),
    }
}

/// Print a unified diff between the current and formatted content.
fn print_diff(input: &str, output: &str) {
    let diff = TextDiff::from_lines(input, output);
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            similar::ChangeTag::Delete => "-",
            similar::ChangeTag::Insert => "+",
            similar::ChangeTag::Equal => " ",
        };
        print!("{}{}", sign, change);
    }
}
