//! Thumbforge CLI — adapter that runs one pipeline invocation against a
//! local store root.
//!
//! This is the external glue around the core: it builds a `StorageEvent`
//! from the command line (or a raw JSON payload), wires a filesystem store,
//! and maps the invocation result to the process exit status so a hosting
//! runtime's retry policy can act on failures.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use thumbforge_core::{PipelineConfig, StorageEvent};
use thumbforge_pipeline::{InvocationOutcome, ThumbnailProducer};
use thumbforge_storage::LocalStore;

#[derive(Parser)]
#[command(name = "thumbforge", about = "Generate a thumbnail for one storage event")]
struct Cli {
    /// Root directory holding one subdirectory per bucket
    #[arg(long, default_value = ".")]
    store_root: PathBuf,

    /// Full event as JSON: {"bucket":"b","path":"a/img.jpg","contentType":"image/jpeg"}
    #[arg(long, conflicts_with_all = ["bucket", "path", "content_type"])]
    event_json: Option<String>,

    /// Bucket the object was finalized in
    #[arg(long, required_unless_present = "event_json")]
    bucket: Option<String>,

    /// Object path within the bucket
    #[arg(long, required_unless_present = "event_json")]
    path: Option<String>,

    /// Content type recorded on the object
    #[arg(long)]
    content_type: Option<String>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let event = match cli.event_json {
        Some(raw) => serde_json::from_str::<StorageEvent>(&raw).context("invalid event JSON")?,
        None => {
            let (Some(bucket), Some(path)) = (cli.bucket, cli.path) else {
                anyhow::bail!("--bucket and --path are required without --event-json");
            };
            StorageEvent {
                bucket,
                path,
                content_type: cli.content_type,
            }
        }
    };

    let store = Arc::new(LocalStore::new(cli.store_root).await?);
    let producer = ThumbnailProducer::new(store, PipelineConfig::from_env());

    match producer.handle_event(&event).await? {
        InvocationOutcome::Uploaded { path } => println!("uploaded {path}"),
        InvocationOutcome::Skipped(reason) => println!("skipped ({reason:?})"),
    }

    Ok(())
}
