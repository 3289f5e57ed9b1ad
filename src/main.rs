use anyhow::Context;
use clap::Parser;
use iptf_core::{Config, Pipeline};
use iptf_feeds::Feed;
use std::path::PathBuf;

/// Shell convention for a process stopped by SIGPIPE (128 + 13).
const BROKEN_PIPE_EXIT: i32 = 141;

#[derive(Parser)]
#[command(
    name = "iptf",
    about = "Filter iptables log lines and print a fixed-width summary",
    after_help = "Examples:\n  iptf /var/log/iptables\n  tail -f /var/log/iptables | iptf"
)]
struct Cli {
    /// Log file to read once. Reads stdin when omitted or `-`.
    file: Option<PathBuf>,

    /// Emit debug logs on stderr (overridden by RUST_LOG).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = Config::builtin().context("built-in ignore rules are invalid")?;
    tracing::debug!(rules = config.rules().len(), "ignore table loaded");

    let feed = Feed::from_arg(cli.file.as_deref());
    let input = feed.open()?;

    let stdout = std::io::stdout();
    let stats = match Pipeline::new(config.rules()).run(input, stdout.lock()) {
        Ok(stats) => stats,
        Err(err) if err.is_broken_pipe() => {
            tracing::debug!("stdout closed by reader");
            std::process::exit(BROKEN_PIPE_EXIT);
        }
        Err(err) => return Err(err).with_context(|| format!("filtering {feed} failed")),
    };

    tracing::info!(
        lines_read = stats.lines_read,
        discarded = stats.discarded,
        emitted = stats.emitted,
        lossy = stats.lossy,
        "done"
    );
    Ok(())
}
