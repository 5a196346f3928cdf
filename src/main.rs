use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use notemark::Config;

#[derive(Parser)]
#[command(name = "notemark")]
#[command(about = "Convert article markup to HTML")]
struct Cli {
    /// Input text file
    input: PathBuf,

    /// Output HTML file (defaults to input name with .html extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file
    #[arg(short, long, default_value = "notemark.toml")]
    config: PathBuf,

    /// Emit a complete HTML document instead of a fragment
    #[arg(long)]
    standalone: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let content = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    let mut config = Config::load(&cli.config);
    if cli.standalone {
        config.document.standalone = true;
    }
    if config.document.title.is_empty() {
        if let Some(stem) = cli.input.file_stem() {
            config.document.title = stem.to_string_lossy().into_owned();
        }
    }

    let html = notemark::render_to_document(&content, &config);

    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension("html"));
    fs::write(&output, html).with_context(|| format!("writing {}", output.display()))?;

    println!("Created {}", output.display());
    Ok(())
}
