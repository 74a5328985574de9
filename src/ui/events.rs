//! Application event handling.
//!
//! Applies background task results to application state. Runs on the UI
//! loop, so it is the only writer besides input handling.

use crate::app::{App, AppEvent};

pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::ImageStaged { path, image } => {
            tracing::info!(path = %path.display(), image = %image.describe(), "Image staged");
            let label = image.describe();
            app.apply_staged_image(image);
            if app.store.is_composer_open() {
                app.set_status(format!("Image ready ({})", label));
            }
        }
        AppEvent::ImageStageFailed { path, error } => {
            tracing::warn!(path = %path.display(), error = %error, "Image staging failed");
            app.image_read_failed();
            app.set_status(format!("Could not load image: {}", error));
        }
        AppEvent::TaskPanicked { task, error } => {
            tracing::error!(task, error = %error, "Background task panicked");
            app.image_read_failed();
            app.set_status(format!("Internal error in {}: {}", task, error));
        }
    }
}
