use std::sync::Arc;

use clipocr_core::clipboard_image;
use clipocr_types::{AppEvent, Notice};
use kanal::AsyncSender;

use crate::state::AppState;

/// Re-read the clipboard for the full-size popup
pub async fn handle_clipboard_image(
    state: &Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let clipboard = state.clipboard.clone();
    let result = tokio::task::spawn_blocking(move || clipboard_image(clipboard.as_ref())).await;

    let event = match result {
        Ok(Ok(image)) => AppEvent::ClipboardImage(image),
        Ok(Err(e)) => {
            tracing::warn!("[CLIPBOARD] {}", e);
            AppEvent::Notice(e.notice())
        }
        Err(e) => {
            tracing::error!("[CLIPBOARD] Task error: {}", e);
            AppEvent::Notice(Notice::error("Clipboard error", e.to_string()))
        }
    };

    app_to_ui_tx.send(event).await?;
    Ok(())
}
