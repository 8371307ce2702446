use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use jpq::document::DocumentStore;
use jpq::error::JpqError;
use jpq::output;
use jpq::params::{self, ParamValue};
use jpq::query;

#[derive(Clone, Debug, PartialEq, Eq)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, String> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!("invalid color mode: {other} (expected auto, always, never)")),
        }
    }
}

#[derive(Parser)]
#[command(
    name = "jpq",
    version,
    about = "Query a JSON document with an ordered chain of URL parameters"
)]
struct Cli {
    /// Query string, e.g. "file=sample&users&0&name" (a leading '?' is allowed)
    query: String,

    /// Directory holding the documents named by the "file" parameter
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Compact output (no pretty printing)
    #[arg(short, long)]
    compact: bool,

    /// Raw string output (no quotes for string values)
    #[arg(short, long)]
    raw: bool,

    /// Colorize output [auto, always, never]
    #[arg(long, default_value = "auto")]
    color: ColorMode,

    /// Disable colorized output
    #[arg(long)]
    no_color: bool,

    /// Print the step trace even when the query resolves
    #[arg(short, long)]
    trace: bool,

    /// Include each step's snapshot in the trace output
    #[arg(short, long)]
    expand: bool,

    /// Emit the trace as JSON instead of text
    #[arg(long)]
    trace_json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let colorize = should_colorize(&cli);

    let ordered = params::parse(&cli.query)?;

    // The document name must be known before anything is read from disk.
    let selector = ordered
        .iter()
        .find(|p| p.key == query::FILE_PARAM)
        .ok_or(JpqError::MissingSelector)?;
    let name = match &selector.value {
        ParamValue::Text(name) => name.as_str(),
        ParamValue::Present => return Err(JpqError::SelectorNeedsValue.into()),
    };

    let store = DocumentStore::new(&cli.data_dir);
    let document = store
        .load(name)
        .with_context(|| format!("loading document {name:?}"))?;

    let outcome = query::run(&document, &ordered);

    let trace_opts = output::trace::RenderOptions {
        expand: cli.expand,
        colorize,
    };

    match &outcome.value {
        Some(value) => {
            let formatted =
                output::pretty::format_value_colored(value, cli.compact, cli.raw, colorize)?;
            println!("{formatted}");
            if cli.trace_json {
                println!("{}", output::trace::to_json(&outcome.trace)?);
            } else if cli.trace {
                print!("{}", output::trace::render(&outcome.trace, trace_opts));
            }
            Ok(())
        }
        None => {
            if cli.trace_json {
                println!("{}", output::trace::to_json(&outcome.trace)?);
            } else {
                eprint!("{}", output::trace::render(&outcome.trace, trace_opts));
            }
            eprintln!("path did not resolve");
            std::process::exit(1);
        }
    }
}

fn should_colorize(cli: &Cli) -> bool {
    if cli.no_color {
        return false;
    }
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    match cli.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}
