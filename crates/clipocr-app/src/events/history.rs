use clipocr_core::Session;
use clipocr_types::AppEvent;
use kanal::AsyncSender;

/// Hand the UI a copy to seed a history editor with
pub async fn handle_history_snapshot(
    session: &Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::HistorySnapshot(session.history().to_vec()))
        .await?;
    Ok(())
}

/// Commit from an editor, either a save or a delete
pub fn handle_history_replacement(session: &mut Session, entries: Vec<String>) {
    session.replace_history(entries);
}
