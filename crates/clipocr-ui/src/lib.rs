use std::rc::Rc;

use clipocr_config::Config;
use clipocr_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use slint::ComponentHandle;

mod dialogs;
mod events;
mod history;
mod state;

use self::state::UiState;

pub use dialogs::show_notice;

slint::include_modules!();

/// Runs the windows on the calling thread until the main window is closed
pub fn ui_loop(
    config: &Config,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let window = MainWindow::new()?;
    window.set_window_title(config.ui.title.as_str().into());

    let state = Rc::new(UiState::new(ui_to_app_tx));

    {
        let state = state.clone();
        let window_weak = window.as_weak();
        window.on_recognize(move || {
            if let Some(w) = window_weak.upgrade() {
                w.set_busy(true);
            }
            state.dispatch(AppEvent::Recognize);
        });
    }

    {
        let state = state.clone();
        let export = config.export.clone();
        window.on_export_history(move || match dialogs::pick_export_path(&export) {
            Some(path) => state.dispatch(AppEvent::ExportHistory(path)),
            None => tracing::debug!("[SLINT] Export cancelled"),
        });
    }

    {
        let state = state.clone();
        window.on_view_history(move || state.dispatch(AppEvent::OpenHistoryEditor));
    }

    {
        let state = state.clone();
        window.on_thumbnail_clicked(move || state.dispatch(AppEvent::ShowClipboardImage));
    }

    {
        let state = state.clone();
        window.window().on_close_requested(move || {
            if let Err(e) = state.close_secondary_windows() {
                tracing::error!("[SLINT] Failed to close secondary windows: {}", e);
            }
            if let Err(e) = slint::quit_event_loop() {
                tracing::error!("[SLINT] Failed to stop event loop: {}", e);
            }
            slint::CloseRequestResponse::HideWindow
        });
    }

    // Receive events from the backend on the UI thread
    {
        let window_weak = window.as_weak();
        let state = state.clone();
        slint::spawn_local(async move {
            while let Ok(event) = app_to_ui_rx.recv().await {
                events::handle_events(event, &window_weak, &state);
            }
            tracing::debug!("[SLINT] Backend channel closed");
        })?;
    }

    window.run()?;

    Ok(())
}
