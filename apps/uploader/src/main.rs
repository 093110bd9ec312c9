use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use client_core::{
    config::normalize_server_url, load_settings, HttpUploadClient, SubmitLabels, SubmitOutcome,
    UploadWorkflowController,
};
use shared::domain::SelectedFile;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod terminal_view;

use terminal_view::TerminalView;

/// Upload a sales sheet and fetch the generated map.
#[derive(Parser, Debug)]
struct Args {
    /// CSV or Excel file to upload.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Overrides the server url from uploader.toml and the environment.
    #[arg(long)]
    server_url: Option<String>,
    /// Write the map document to this path once it has loaded.
    #[arg(long)]
    save_map: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(server_url) = &args.server_url {
        settings.server_url = normalize_server_url(server_url);
    }
    info!(server_url = %settings.server_url, "uploader starting");

    let client = HttpUploadClient::new(&settings.server_url)?;
    let mut controller =
        UploadWorkflowController::bind(client, TerminalView::default(), SubmitLabels::from(&settings));

    let selection = match &args.file {
        Some(path) => Some(read_selection(path).await?),
        None => None,
    };
    controller.files_changed(selection);

    match controller.submit().await {
        SubmitOutcome::Rejected(failure) => {
            println!("{}", controller.view().summary());
            bail!(failure);
        }
        SubmitOutcome::AwaitingMap {
            map_source,
            map_html,
            ..
        } => {
            let document = controller
                .transport()
                .fetch_map(&map_source)
                .await
                .with_context(|| format!("map frame failed to load {map_source}"))?;

            if let Some(path) = &args.save_map {
                let contents = map_html.unwrap_or(document);
                tokio::fs::write(path, contents)
                    .await
                    .with_context(|| format!("failed to save map to '{}'", path.display()))?;
                info!(path = %path.display(), "map saved");
            }

            if !controller.frame_loaded(&map_source) {
                warn!(map_source = %map_source, "map source was replaced before it loaded");
            }
        }
    }

    println!("{}", controller.view().summary());
    Ok(())
}

async fn read_selection(path: &Path) -> Result<SelectedFile> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("'{}' does not name a file", path.display()))?;
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    Ok(SelectedFile::new(name, bytes))
}
