//! Helpers shared across the UI layer: background task spawning and
//! panic capture.

use crate::app::{App, AppEvent};
use crate::feed::read_image;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Wraps a future to catch panics and convert them to errors.
///
/// A panicking spawned task would otherwise vanish silently; this turns
/// the panic payload into `Err(message)` so it can be reported as
/// `AppEvent::TaskPanicked`.
pub(super) async fn catch_task_panic<F, T>(future: F) -> Result<T, String>
where
    F: std::future::Future<Output = T>,
{
    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .map_err(|panic| {
            if let Some(s) = panic.downcast_ref::<&'static str>() {
                s.to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            }
        })
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_home(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(input)
}

/// Spawn a one-shot read of the image path typed into the composer.
///
/// The result comes back through the event channel and is applied on the
/// UI loop. There is no cancellation: closing the composer does not stop
/// the read.
pub(super) fn spawn_image_read(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    let raw = app.composer.image_path.trim();
    if raw.is_empty() {
        app.set_status("Type an image path first");
        return;
    }

    let path = expand_home(raw);
    let max_bytes = app.max_image_bytes;
    let tx = event_tx.clone();

    app.composer.pending_reads += 1;
    app.set_status(format!("Loading {}...", path.display()));
    tracing::debug!(path = %path.display(), max_bytes, "Spawning image read");

    tokio::spawn(async move {
        let event = match catch_task_panic(read_image(&path, max_bytes)).await {
            Ok(Ok(image)) => AppEvent::ImageStaged { path, image },
            Ok(Err(e)) => AppEvent::ImageStageFailed {
                path,
                error: e.to_string(),
            },
            Err(panic_msg) => {
                tracing::error!(error = %panic_msg, "Image read task panicked");
                AppEvent::TaskPanicked {
                    task: "image_read",
                    error: panic_msg,
                }
            }
        };

        if let Err(e) = tx.send(event).await {
            tracing::warn!(error = %e, "Failed to send image read result (receiver dropped)");
        }
    });
}
