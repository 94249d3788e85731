//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::app::config::ConfigOverrides;
use crate::app::logging::initialize_logging;
use crate::domain::{AppError, LastmodSource};
use crate::{GenerateOptions, SITEMAP_FILE};

#[derive(Parser)]
#[command(name = "sitegen")]
#[command(version)]
#[command(
    about = "Regenerate sitemap.xml and robots.txt from a static site tree",
    long_about = None
)]
struct Cli {
    /// Site root to scan; outputs are written here
    #[arg(short, long, default_value = ".")]
    root: PathBuf,
    /// Base URL for canonical links (overrides config and BASE_URL)
    #[arg(short, long)]
    base_url: Option<String>,
    /// Source of <lastmod> values
    #[arg(short, long, value_enum)]
    lastmod: Option<LastmodArg>,
    /// Config file (default: <root>/sitegen.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Show debug logs
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
    /// Only show errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum LastmodArg {
    /// Filesystem modification time
    Mtime,
    /// Most recent commit touching the file
    Git,
}

impl From<LastmodArg> for LastmodSource {
    fn from(arg: LastmodArg) -> Self {
        match arg {
            LastmodArg::Mtime => LastmodSource::Mtime,
            LastmodArg::Git => LastmodSource::Git,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = initialize_logging(cli.verbose, cli.quiet) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run_generate(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(cli: Cli) -> Result<(), AppError> {
    let root = cli.root;
    let options = GenerateOptions {
        root: root.clone(),
        overrides: ConfigOverrides {
            config_path: cli.config,
            base_url: cli.base_url,
            lastmod: cli.lastmod.map(LastmodSource::from),
        },
    };

    let outcome = crate::generate(options)?;

    println!("✅ Wrote {} URLs to {}", outcome.url_count, root.join(SITEMAP_FILE).display());
    Ok(())
}
