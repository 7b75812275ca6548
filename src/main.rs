//! depth-crawler main entry point
//!
//! This is the command-line interface for the depth-bounded crawler.

use anyhow::Context;
use clap::Parser;
use depth_crawler::config::{load_config, validate, Config};
use depth_crawler::crawl_webpage;
use depth_crawler::output::write_link_listing;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// depth-crawler: list the URLs reachable from a page
///
/// Starting from the root URL, depth-crawler follows `<a href>` links
/// depth-first and prints every page it visited, up to the given number of
/// link hops.
#[derive(Parser, Debug)]
#[command(name = "depth-crawler")]
#[command(version)]
#[command(about = "List the URLs reachable from a web page", long_about = None)]
struct Cli {
    /// The url that you want to crawl [default: https://www.example.com/]
    #[arg(short, long)]
    url: Option<String>,

    /// The maximum number of links deep to traverse [default: 3]
    #[arg(short, long)]
    depth: Option<u32>,

    /// Optional TOML configuration file; flags override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    let outcome = crawl_webpage(&config)
        .await
        .with_context(|| format!("crawl of {:?} failed", config.crawler.root_url))?;

    let mut stdout = std::io::stdout().lock();
    write_link_listing(&mut stdout, &outcome.links).context("failed to write link listing")?;
    stdout.flush()?;

    Ok(())
}

/// Rewrites the single-dash long flags `-url` and `-depth` to their
/// double-dash form so clap does not read them as `-u rl` or `-d epth`.
fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            for flag in ["-url", "-depth"] {
                if text == flag || text.strip_prefix(flag).is_some_and(|rest| rest.starts_with('=')) {
                    return OsString::from(format!("-{}", text));
                }
            }
            arg
        })
        .collect()
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so the link listing on stdout stays machine-readable.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("depth_crawler=info,warn"),
            1 => EnvFilter::new("depth_crawler=debug,info"),
            2 => EnvFilter::new("depth_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file, if any, and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(url) = &cli.url {
        config.crawler.root_url = url.clone();
    }
    if let Some(depth) = cli.depth {
        config.crawler.max_depth = depth;
    }

    validate(&config).context("invalid configuration")?;

    Ok(config)
}
