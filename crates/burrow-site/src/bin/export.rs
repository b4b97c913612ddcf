//! Static export binary
//!
//! Pre-renders the page into `index.html` under the configured output
//! directory, ready to sit next to the Trunk bundle on a static host.

use std::path::PathBuf;

use anyhow::Context;
use burrow_site::clock::current_year;
use burrow_site::config::SiteConfig;
use burrow_site::export::export_site;
use burrow_site::render::render_document;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Parser)]
#[command(name = "burrow-export", version, about = "Export the Bit Burrow Co site as static HTML")]
struct Cli {
    /// Config file (defaults to Site.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Public base path, e.g. "/" or "/burrow/"
    #[arg(short, long)]
    base_url: Option<String>,

    /// Keep existing files in the output directory
    #[arg(long)]
    keep_out_dir: bool,

    /// Print the document to stdout instead of writing it
    #[arg(long)]
    print: bool,
}

impl Cli {
    fn resolve(&self) -> anyhow::Result<SiteConfig> {
        let mut config = SiteConfig::discover(self.config.as_deref())
            .context("failed to load site config")?
            .with_env();
        if let Some(dir) = &self.out_dir {
            config.out_dir.clone_from(dir);
        }
        if let Some(url) = &self.base_url {
            config.base_url.clone_from(url);
        }
        if self.keep_out_dir {
            config.empty_out_dir = false;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.resolve()?;
    let year = current_year();

    if cli.print {
        config.validate().context("invalid site config")?;
        print!("{}", render_document(&config, year));
        return Ok(());
    }

    let index = export_site(&config, year)
        .with_context(|| format!("failed to export into {}", config.out_dir.display()))?;
    tracing::info!("wrote {}", index.display());
    Ok(())
}
