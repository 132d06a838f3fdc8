use std::sync::Arc;

use clipocr_core::{Session, recognize_clipboard};
use clipocr_types::{AppEvent, Notice};
use kanal::AsyncSender;

use crate::state::AppState;

pub async fn handle_recognize(
    state: &Arc<AppState>,
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::StatusUpdate("Recognizing...".to_string()))
        .await?;

    let options = state.recognize_options();
    let clipboard = state.clipboard.clone();
    let recognizer = state.recognizer.clone();

    let result = tokio::task::spawn_blocking(move || {
        recognize_clipboard(clipboard.as_ref(), recognizer.as_ref(), &options)
    })
    .await;

    let recognition = match result {
        Ok(result) => session.record_recognition(result),
        Err(e) => {
            tracing::error!("[OCR] Task error: {}", e);
            app_to_ui_tx
                .send(AppEvent::Notice(Notice::error(
                    "Error",
                    format!("Recognition failed: {e}"),
                )))
                .await?;
            return Ok(());
        }
    };

    match recognition {
        Ok(recognition) => {
            tracing::debug!("[OCR] Got text: {} chars", recognition.text.chars().count());
            app_to_ui_tx
                .send(AppEvent::Recognized {
                    text: recognition.text,
                    thumbnail: recognition.thumbnail,
                })
                .await?;
        }
        Err(e) => {
            tracing::warn!("[OCR] Failed: {}", e);
            app_to_ui_tx.send(AppEvent::Notice(e.notice())).await?;
        }
    }

    Ok(())
}
