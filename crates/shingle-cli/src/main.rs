mod config;
mod input;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use shingle_core::{most_common, shingles_from_text, strip_punctuation, Preprocess};

use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "shingle",
    version,
    about = "Compare documents by the Jaccard similarity of their k-shingles"
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two text files and print their similarity
    Compare {
        /// Path to the query text file
        #[arg(short, long)]
        query: PathBuf,

        /// Path to the target text file
        #[arg(short, long)]
        target: PathBuf,

        /// Shingle width (words per shingle)
        #[arg(short)]
        k: Option<usize>,

        /// Remove punctuation before tokenizing (`=false` overrides the config)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        remove_punctuation: Option<bool>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the shingles of a text, one per line
    Shingles {
        /// Shingle width (words per shingle)
        #[arg(short)]
        k: Option<usize>,

        /// Text to split (reads stdin if omitted)
        #[arg(long)]
        text: Option<String>,

        /// Remove punctuation before tokenizing (`=false` overrides the config)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        remove_punctuation: Option<bool>,
    },

    /// Print the most frequent shingles read from stdin
    Top {
        /// Number of frequency groups to print
        #[arg(short)]
        n: Option<usize>,

        /// Shingle width (words per shingle)
        #[arg(short)]
        k: Option<usize>,

        /// Remove punctuation before tokenizing (`=false` overrides the config)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        remove_punctuation: Option<bool>,
    },

    /// Show current configuration
    Config,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Similarity only, four decimal places
    Text,
    /// Full comparison report as JSON
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Compare {
            query,
            target,
            k,
            remove_punctuation,
            format,
        } => {
            let k = resolve_width(k, &cfg);
            let pp = resolve_preprocess(remove_punctuation, &cfg);
            cmd_compare(&query, &target, k, &pp, format)
        }
        Commands::Shingles {
            k,
            text,
            remove_punctuation,
        } => {
            let k = resolve_width(k, &cfg);
            let pp = resolve_preprocess(remove_punctuation, &cfg);
            cmd_shingles(text, k, &pp)
        }
        Commands::Top {
            n,
            k,
            remove_punctuation,
        } => {
            let k = resolve_width(k, &cfg);
            let pp = resolve_preprocess(remove_punctuation, &cfg);
            cmd_top(resolve_groups(n, &cfg), k, &pp)
        }
        Commands::Config => cmd_config(cli.config.as_deref(), &cfg),
    }
}

// Zero is passed through; the core rejects it as an invalid argument.
fn resolve_width(flag: Option<usize>, cfg: &Config) -> usize {
    flag.unwrap_or(cfg.shingle.width)
}

fn resolve_groups(flag: Option<usize>, cfg: &Config) -> usize {
    flag.unwrap_or(cfg.top.groups)
}

fn resolve_preprocess(flag: Option<bool>, cfg: &Config) -> Preprocess {
    Preprocess::new(flag.unwrap_or(cfg.shingle.remove_punctuation))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_compare(
    query: &Path,
    target: &Path,
    k: usize,
    preprocess: &Preprocess,
    format: OutputFormat,
) -> Result<()> {
    let cmp = input::compare_files(query, target, k, preprocess)?;
    match format {
        OutputFormat::Text => println!("{}", input::format_similarity(cmp.similarity)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&cmp)?),
    }
    Ok(())
}

fn cmd_shingles(text: Option<String>, k: usize, preprocess: &Preprocess) -> Result<()> {
    let body = match text {
        Some(t) => t,
        None => input::read_stdin()?,
    };
    write_shingles(&mut std::io::stdout().lock(), &body, k, preprocess)
}

fn cmd_top(n: usize, k: usize, preprocess: &Preprocess) -> Result<()> {
    let body = input::read_stdin()?;
    write_top(&mut std::io::stdout().lock(), &body, n, k, preprocess)
}

/// Shingles of `body` after preprocessing.
fn extract(body: &str, k: usize, preprocess: &Preprocess) -> Result<Vec<String>> {
    let all = if preprocess.remove_punctuation {
        shingles_from_text(&strip_punctuation(body), k)?
    } else {
        shingles_from_text(body, k)?
    };
    tracing::debug!(shingles = all.len(), k, "extracted shingles");
    Ok(all)
}

/// One shingle per line.
fn write_shingles(
    out: &mut impl Write,
    body: &str,
    k: usize,
    preprocess: &Preprocess,
) -> Result<()> {
    for s in extract(body, k, preprocess)? {
        writeln!(out, "{s}")?;
    }
    Ok(())
}

/// `<shingle>: <count>` for every shingle in the `n` highest frequency groups.
fn write_top(
    out: &mut impl Write,
    body: &str,
    n: usize,
    k: usize,
    preprocess: &Preprocess,
) -> Result<()> {
    let all = extract(body, k, preprocess)?;
    for group in most_common(&all, n)? {
        for phrase in &group.shingles {
            writeln!(out, "{phrase}: {}", group.count)?;
        }
    }
    Ok(())
}

fn cmd_config(explicit: Option<&Path>, cfg: &Config) -> Result<()> {
    println!("Config: {}", config::show_config_path(explicit));
    println!();
    println!("[shingle]");
    println!("  width = {}", cfg.shingle.width);
    println!("  remove_punctuation = {}", cfg.shingle.remove_punctuation);
    println!();
    println!("[top]");
    println!("  groups = {}", cfg.top.groups);
    Ok(())
}
