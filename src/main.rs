//! Static-site generator for the HENNETH landing page.
//!
//! Renders the page once and writes a self-contained HTML file:
//!
//! ```bash
//! henneth-landing --out dist/index.html
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use henneth_landing::render_page;

#[derive(Parser, Debug)]
#[command(name = "henneth-landing")]
#[command(about = "Render the HENNETH landing page to a static HTML file")]
#[command(version)]
struct Args {
    /// Output file for the rendered page
    #[arg(long, default_value = "dist/index.html")]
    out: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("henneth-landing v{}", env!("CARGO_PKG_VERSION"));

    let html = render_page();

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
    }
    fs::write(&args.out, &html)
        .with_context(|| format!("writing {}", args.out.display()))?;

    info!("wrote {} ({} bytes)", args.out.display(), html.len());
    Ok(())
}
