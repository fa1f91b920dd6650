//! Kestrel CLI
//!
//! Parses an HTML file or string with the strict parser and prints the tree,
//! the re-serialized markup, or a JSON dump. Parse errors are printed with
//! their position and exit with status 1.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use kestrel_dom::json::NodeView;
use kestrel_html::{ParseError, parse, print_tree};
use owo_colors::OwoColorize;

/// How the parsed document is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    /// Indented outline, one node per line.
    #[default]
    Tree,
    /// Serialized markup.
    Html,
    /// Nested JSON objects.
    Json,
}

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "kestrel",
    version,
    about = "Strict HTML parser: prints the concrete syntax tree or the first error."
)]
struct Args {
    /// HTML file to parse.
    #[arg(required_unless_present = "html", conflicts_with = "html")]
    file: Option<PathBuf>,

    /// Parse this string instead of a file.
    #[arg(long, value_name = "STRING")]
    html: Option<String>,

    /// Drop whitespace-only text nodes before printing.
    #[arg(long)]
    normalize: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Tree)]
    format: OutputFormat,

    /// Print errors without ANSI colors.
    #[arg(long)]
    no_color: bool,
}

impl Args {
    /// The source text and a name to show in diagnostics.
    fn read_input(&self) -> Result<(String, String)> {
        if let Some(html) = &self.html {
            return Ok((html.clone(), "<inline>".to_string()));
        }
        let path = self
            .file
            .as_ref()
            .context("either a file or --html is required")?;
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok((source, path.display().to_string()))
    }
}

/// Print a parse error as `error: <kind> (<name>:<line>:<column>)`, then the
/// source line and the caret.
fn report(name: &str, err: &ParseError, color: bool) {
    let header = format!("error: {} ({name}:{})", err.kind, err.position);
    if color {
        eprintln!("{}", header.red().bold());
        eprintln!("{}", err.source_line);
        eprintln!("{}", err.caret.red());
    } else {
        eprintln!("{header}");
        eprintln!("{}", err.source_line);
        eprintln!("{}", err.caret);
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let (source, name) = args.read_input()?;

    let mut tree = match parse(&source) {
        Ok(tree) => tree,
        Err(err) => {
            report(&name, &err, !args.no_color);
            return Ok(ExitCode::FAILURE);
        }
    };

    if args.normalize {
        tree.normalize();
    }

    match args.format {
        OutputFormat::Tree => print_tree(&tree, tree.root(), 0),
        OutputFormat::Html => println!("{tree}"),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&NodeView::document(&tree))?
        ),
    }
    Ok(ExitCode::SUCCESS)
}
