use std::sync::Arc;

use clipocr_core::Session;
use clipocr_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod clipboard_image;
pub mod export;
pub mod history;
pub mod recognize;

use clipboard_image::handle_clipboard_image;
use export::handle_export;
use history::{handle_history_replacement, handle_history_snapshot};
use recognize::handle_recognize;

/// App's main loop.
///
/// Owns the session; events are handled one at a time, so history updates
/// never interleave.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut session = Session::new();

    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Shutdown requested");
                break;
            }
            event = ui_to_app_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => {
                    tracing::info!("[EVENT_LOOP] UI channel closed");
                    break;
                }
            },
        };

        tracing::debug!("[EVENT_LOOP] EVENT RECEIVED: {:?}", event);
        handle_events(&state, &mut session, &app_to_ui_tx, event).await?;
    }

    Ok(())
}

async fn handle_events(
    state: &Arc<AppState>,
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Recognize => {
            handle_recognize(state, session, app_to_ui_tx).await?;
        }
        AppEvent::ExportHistory(path) => {
            handle_export(state, session, path, app_to_ui_tx).await?;
        }
        AppEvent::OpenHistoryEditor => {
            handle_history_snapshot(session, app_to_ui_tx).await?;
        }
        AppEvent::ReplaceHistory(entries) => {
            handle_history_replacement(session, entries);
        }
        AppEvent::ShowClipboardImage => {
            handle_clipboard_image(state, app_to_ui_tx).await?;
        }
        // UI-only events, ignore in backend
        AppEvent::BackendReady
        | AppEvent::Recognized { .. }
        | AppEvent::HistorySnapshot(_)
        | AppEvent::ClipboardImage(_)
        | AppEvent::StatusUpdate(_)
        | AppEvent::Notice(_) => {}
    }

    Ok(())
}
