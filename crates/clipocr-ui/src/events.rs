use std::rc::Rc;

use clipocr_types::{AppEvent, RawImage};
use slint::{ComponentHandle, Rgba8Pixel, SharedPixelBuffer, Weak};

use crate::dialogs::show_notice;
use crate::history::open_history_editor;
use crate::state::UiState;
use crate::{ImagePopup, MainWindow};

pub fn to_slint_image(image: &RawImage) -> slint::Image {
    let buffer =
        SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(&image.rgba, image.width, image.height);
    slint::Image::from_rgba8(buffer)
}

fn show_image_popup(state: &UiState, image: &RawImage) -> anyhow::Result<()> {
    let popup = ImagePopup::new()?;
    popup.set_source(to_slint_image(image));
    popup.show()?;

    if let Some(previous) = state.image_popup.replace(Some(popup)) {
        previous.hide()?;
    }
    Ok(())
}

pub fn handle_events(event: AppEvent, window_weak: &Weak<MainWindow>, state: &Rc<UiState>) {
    match event {
        AppEvent::BackendReady => {
            if let Some(w) = window_weak.upgrade() {
                tracing::debug!("[SLINT] Backend ready");
                w.set_ready(true);
            }
        }
        AppEvent::Recognized { text, thumbnail } => {
            if let Some(w) = window_weak.upgrade() {
                tracing::debug!(
                    "[SLINT] Recognized {} chars, thumbnail {:?}",
                    text.chars().count(),
                    thumbnail
                );
                w.set_result_text(text.into());
                w.set_thumbnail(to_slint_image(&thumbnail));
                w.set_status("Recognition finished".into());
                w.set_busy(false);
            }
        }
        AppEvent::StatusUpdate(status) => {
            if let Some(w) = window_weak.upgrade() {
                w.set_status(status.into());
            }
        }
        AppEvent::Notice(notice) => {
            if let Some(w) = window_weak.upgrade() {
                w.set_busy(false);
                w.set_status(format!("{}: {}", notice.title, notice.message).into());
            }
            show_notice(&notice);
        }
        AppEvent::HistorySnapshot(entries) => {
            if let Err(e) = open_history_editor(state, entries) {
                tracing::error!("[SLINT] Failed to open history editor: {}", e);
            }
        }
        AppEvent::ClipboardImage(image) => {
            tracing::debug!("[SLINT] Clipboard image popup {:?}", image);
            if let Err(e) = show_image_popup(state, &image) {
                tracing::error!("[SLINT] Failed to show image popup: {}", e);
            }
        }
        // Requests travel the other way
        AppEvent::Recognize
        | AppEvent::ExportHistory(_)
        | AppEvent::OpenHistoryEditor
        | AppEvent::ReplaceHistory(_)
        | AppEvent::ShowClipboardImage => {}
    }
}
