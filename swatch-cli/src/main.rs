//! swatch: design tokens from a rendered web page.
//!
//! Loads a page in headless Chrome and prints its palette, gradients and
//! typography, either as a colored summary or as JSON.

mod summary;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;
use swatch_browser::options::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use swatch_browser::{
    BrowserOptions, ChromeCapture, Extractor, MemoryCache, Recorder, SnapshotFile,
};
use swatch_extract::{DesignReport, GroupingPolicy};

/// Extract colors, gradients and typography from a rendered web page
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Colored summary
    swatch https://example.com

    # JSON report
    swatch --json example.com

    # Capture once, then iterate offline
    swatch --save-snapshot page.json https://example.com
    swatch --snapshot page.json --pretty https://example.com

    # Keep classes apart when grouping text styles
    swatch --strict-typography https://example.com

ENVIRONMENT:
    SWATCH_CHROME    Chrome/Chromium binary (same as --chrome)
    SWATCH_TIMEOUT   navigation timeout in seconds (same as --timeout)
    RUST_LOG         log filter, e.g. RUST_LOG=swatch=debug
"#)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Page to extract from: URL, host name or local HTML file
    #[arg(value_name = "URL")]
    url: String,

    /// Read a saved snapshot instead of launching a browser
    #[arg(long, value_name = "FILE", conflicts_with = "save_snapshot")]
    snapshot: Option<PathBuf>,

    /// Write the captured snapshot to FILE
    #[arg(long, value_name = "FILE")]
    save_snapshot: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Print the report as indented JSON (implies --json)
    #[arg(long)]
    pretty: bool,

    /// Group text styles by tag, class and all eight font properties
    #[arg(long)]
    strict_typography: bool,

    /// Chrome or Chromium executable (auto-detected by default)
    #[arg(long, value_name = "PATH", env = "SWATCH_CHROME")]
    chrome: Option<PathBuf>,

    /// Navigation timeout in seconds
    #[arg(long, value_name = "SECS", env = "SWATCH_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    /// Viewport width
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    width: u32,

    /// Viewport height
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    height: u32,

    /// Launch Chrome without its sandbox (needed when running as root)
    #[arg(long)]
    no_sandbox: bool,
}

impl Cli {
    fn browser_options(&self) -> BrowserOptions {
        BrowserOptions {
            chrome_executable: self.chrome.clone(),
            viewport_width: self.width,
            viewport_height: self.height,
            navigation_timeout: Duration::from_secs(self.timeout),
            no_sandbox: self.no_sandbox,
            ..BrowserOptions::default()
        }
    }

    const fn policy(&self) -> GroupingPolicy {
        if self.strict_typography {
            GroupingPolicy::Strict
        } else {
            GroupingPolicy::Core
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let report = extract(&cli)
        .await
        .with_context(|| format!("failed to extract design tokens from {}", cli.url))?;

    if cli.json || cli.pretty {
        let json = if cli.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        println!("{json}");
    } else {
        print!("{}", summary::render(&report));
    }

    Ok(())
}

/// Pick the snapshot source the flags ask for and run the extraction.
async fn extract(cli: &Cli) -> anyhow::Result<DesignReport> {
    let policy = cli.policy();
    let options = cli.browser_options();
    let report = if let Some(path) = &cli.snapshot {
        log::info!(target: "swatch", "replaying snapshot {}", path.display());
        Extractor::new(SnapshotFile::new(path), MemoryCache::new())
            .with_options(&options)
            .with_policy(policy)
            .extract(&cli.url)
            .await?
    } else if let Some(path) = &cli.save_snapshot {
        let source = Recorder::new(ChromeCapture::new(options.clone()), path);
        Extractor::new(source, MemoryCache::new())
            .with_options(&options)
            .with_policy(policy)
            .extract(&cli.url)
            .await?
    } else {
        Extractor::new(ChromeCapture::new(options.clone()), MemoryCache::new())
            .with_options(&options)
            .with_policy(policy)
            .extract(&cli.url)
            .await?
    };
    Ok(report)
}
