use std::path::PathBuf;
use std::sync::Arc;

use clipocr_core::Session;
use clipocr_types::{AppEvent, Notice};
use kanal::AsyncSender;

use crate::state::AppState;

pub async fn handle_export(
    state: &Arc<AppState>,
    session: &Session,
    path: PathBuf,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let header = state.config.export.header.clone();
    let snapshot = session.clone();

    let result =
        tokio::task::spawn_blocking(move || snapshot.export(Some(path), &header)).await;

    let notice = match result {
        Ok(Ok(outcome)) => outcome.notice(),
        Ok(Err(e)) => {
            tracing::error!("[EXPORT] Failed: {}", e);
            Some(e.notice())
        }
        Err(e) => {
            tracing::error!("[EXPORT] Task error: {}", e);
            Some(Notice::error("Export failed", e.to_string()))
        }
    };

    if let Some(notice) = notice {
        app_to_ui_tx.send(AppEvent::Notice(notice)).await?;
    }

    Ok(())
}
