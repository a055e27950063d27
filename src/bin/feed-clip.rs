use std::path::PathBuf;

use clap::Parser;
use feed_clip::{
    host::{
        clipboard::SystemClipboard,
        notifier::TerminalNotifier,
        source::{FilePageSource, HttpPageSource},
    },
    tracing::init_tracing_subscriber,
    RssCopierBuilder,
};

#[derive(Parser)]
#[command(
    name = "feed-clip",
    about = "Copies a YouTube channel's RSS feed address to the clipboard"
)]
struct Cli {
    /// Page URL to load (a /watch page or a channel page)
    #[arg(long, env = "FEED_CLIP_URL", required_unless_present = "file", conflicts_with = "file")]
    url: Option<reqwest::Url>,

    /// Saved page HTML to read instead of fetching
    #[arg(long)]
    file: Option<PathBuf>,

    /// Navigation path the saved page was captured under
    #[arg(long, default_value = "/", requires = "file")]
    page_path: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let ack = match (cli.url, cli.file) {
        (Some(url), None) => {
            tracing::info!(%url, "Loading page over HTTP");
            let copier = RssCopierBuilder::new()
                .page_source(HttpPageSource::new(url))
                .clipboard(SystemClipboard::new())
                .notifier(TerminalNotifier)
                .build();
            copier.on_command("copy_rss").await
        }
        (None, Some(file)) => {
            tracing::info!(file = %file.display(), page_path = %cli.page_path, "Reading saved page");
            let copier = RssCopierBuilder::new()
                .page_source(FilePageSource::new(file, cli.page_path))
                .clipboard(SystemClipboard::new())
                .notifier(TerminalNotifier)
                .build();
            copier.on_command("copy_rss").await
        }
        _ => unreachable!("clap enforces exactly one of --url / --file"),
    };

    tracing::debug!(?ack, "Command acknowledged");
    Ok(())
}
