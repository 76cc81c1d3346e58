use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt};

use sigdex::catalog::{Catalog, CatalogDocument, SearchMode};

/// Search a documentation catalog by name, pattern, type or words
#[derive(Parser)]
#[command(name = "sigdex")]
#[command(version)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Override the catalog's permutation budget for type comparisons
    #[arg(long)]
    permutation_budget: Option<usize>,

    /// Catalog document (JSON)
    catalog: PathBuf,

    mode: Mode,

    query: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Exact short or fully-qualified name
    Name,
    /// Regular expression over the whole name
    Regexp,
    /// Type signature, up to currying, argument order and renaming
    Type,
    /// Type signature with type abbreviations unfolded
    TypeManifest,
    /// Documentation words, all of which must match
    #[value(name = "text")]
    FullText,
}

impl From<Mode> for SearchMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Name => SearchMode::Name,
            Mode::Regexp => SearchMode::Regexp,
            Mode::Type => SearchMode::Type,
            Mode::TypeManifest => SearchMode::TypeManifest,
            Mode::FullText => SearchMode::FullText,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let text = std::fs::read_to_string(&cli.catalog)
        .with_context(|| format!("failed to read catalog {}", cli.catalog.display()))?;
    let mut document: CatalogDocument =
        serde_json::from_str(&text).context("failed to load catalog")?;
    if let Some(budget) = cli.permutation_budget {
        document.config.permutation_budget = budget;
    }
    let catalog = Catalog::from_document(document);

    for declaration in catalog.search(cli.mode.into(), &cli.query)? {
        println!("{declaration}");
    }

    Ok(())
}
