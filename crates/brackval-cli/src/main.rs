use std::{
    fs,
    io::{self, IsTerminal, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use brackval_core::{Verdict, find_unrecognized, validate};
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use serde::Serialize;
use thiserror::Error;

mod config;

use config::{ColorMode, Config};

/// A bracket sequence validator
#[derive(Parser, Debug)]
#[command(name = "brackval", version, about)]
struct Args {
    /// Sequences to validate (reads from stdin if none provided)
    #[arg()]
    sequences: Vec<String>,

    /// Treat arguments as files or glob patterns, one sequence per line
    #[arg(long)]
    files: bool,

    /// Read sequences from stdin, one per line
    #[arg(long)]
    stdin: bool,

    /// Print nothing, only set the exit code
    #[arg(short, long)]
    quiet: bool,

    /// Output format for verdicts
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// When to colorize output
    #[arg(long, value_enum)]
    color: Option<ColorMode>,

    /// Path to a configuration file (defaults to brackval.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Output format for verdict reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One human-readable line per sequence.
    #[default]
    Text,
    /// One JSON record per sequence.
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let printer = Printer::new(&args, &config);

    if args.files {
        check_files(&args, &printer)
    } else if args.stdin || args.sequences.is_empty() {
        match check_stdin(&printer) {
            Ok(all_valid) => exit_for(all_valid),
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::from(2)
            }
        }
    } else {
        exit_for(check_sequences(
            args.sequences.iter().map(String::as_str),
            &printer,
        ))
    }
}

fn exit_for(all_valid: bool) -> ExitCode {
    if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Validate each input, reporting as we go. Returns true if all were valid.
fn check_sequences<'a, I>(inputs: I, printer: &Printer) -> bool
where
    I: Iterator<Item = &'a str>,
{
    let mut all_valid = true;

    for input in inputs {
        let verdict = validate(input);
        if verdict != Verdict::Valid {
            all_valid = false;
        }
        printer.report(None, input, verdict);
    }

    all_valid
}

fn check_stdin(printer: &Printer) -> Result<bool, Error> {
    let mut source = String::new();
    io::stdin().read_to_string(&mut source)?;
    Ok(check_sequences(source.lines(), printer))
}

fn check_files(args: &Args, printer: &Printer) -> ExitCode {
    if args.sequences.is_empty() {
        eprintln!("error: --files requires at least one path or pattern");
        return ExitCode::from(2);
    }

    let mut all_valid = true;
    let mut any_error = false;

    for pattern in &args.sequences {
        match resolve_pattern(pattern) {
            Ok(paths) => {
                for path in paths {
                    match fs::read_to_string(&path) {
                        Ok(contents) => {
                            if !check_file_lines(&path, &contents, printer) {
                                all_valid = false;
                            }
                        }
                        Err(e) => {
                            eprintln!("{}: {e}", path.display());
                            any_error = true;
                        }
                    }
                }
            }
            Err(e) => {
                eprintln!("{pattern}: {e}");
                any_error = true;
            }
        }
    }

    if any_error {
        return ExitCode::from(2);
    }
    exit_for(all_valid)
}

fn check_file_lines(path: &Path, contents: &str, printer: &Printer) -> bool {
    let mut all_valid = true;

    for (index, line) in contents.lines().enumerate() {
        let verdict = validate(line);
        if verdict != Verdict::Valid {
            all_valid = false;
        }
        printer.report(Some((path, index + 1)), line, verdict);
    }

    all_valid
}

/// Expand a glob pattern into paths, falling back to the literal path when
/// nothing matches so the read error names the file.
fn resolve_pattern(pattern: &str) -> Result<Vec<PathBuf>, Error> {
    let mut paths = Vec::new();
    for entry in glob::glob(pattern)? {
        paths.push(entry?);
    }
    if paths.is_empty() {
        paths.push(PathBuf::from(pattern));
    }
    Ok(paths)
}

/// Verdict output settings resolved from flags and config.
struct Printer {
    quiet: bool,
    format: OutputFormat,
    color: bool,
}

/// One verdict, as emitted in JSON mode.
#[derive(Serialize)]
struct Record<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    input: &'a str,
    verdict: Verdict,
}

impl Printer {
    fn new(args: &Args, config: &Config) -> Self {
        let mode = args.color.unwrap_or(config.color);
        Self {
            quiet: args.quiet || config.quiet,
            format: args.format,
            color: match mode {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => io::stdout().is_terminal(),
            },
        }
    }

    fn report(&self, origin: Option<(&Path, usize)>, input: &str, verdict: Verdict) {
        if self.quiet {
            return;
        }

        if self.format == OutputFormat::Json {
            let record = Record {
                path: origin.map(|(path, _)| path.display().to_string()),
                line: origin.map(|(_, line)| line),
                input,
                verdict,
            };
            println!("{}", serde_json::to_string(&record).unwrap());
            return;
        }

        let label = self.label(input, verdict);
        let prefix = origin.map_or_else(String::new, |(path, line)| {
            format!("{}:{line}: ", path.display())
        });
        println!("{prefix}{input:?}: {label}");
    }

    fn label(&self, input: &str, verdict: Verdict) -> String {
        let text = match verdict {
            Verdict::Valid => "valid bracket sequence".to_string(),
            Verdict::Invalid => "invalid bracket sequence".to_string(),
            Verdict::MalformedInput => find_unrecognized(input).map_or_else(
                || "input is not valid".to_string(),
                |err| format!("input is not valid ({err})"),
            ),
        };

        if !self.color {
            return text;
        }
        match verdict {
            Verdict::Valid => text.green().to_string(),
            Verdict::Invalid => text.red().to_string(),
            Verdict::MalformedInput => text.yellow().to_string(),
        }
    }
}

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),
    #[error(transparent)]
    Glob(#[from] glob::GlobError),
}
