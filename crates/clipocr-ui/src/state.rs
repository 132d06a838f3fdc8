use std::cell::RefCell;

use clipocr_core::HistoryEditor;
use clipocr_types::AppEvent;
use kanal::AsyncSender;
use slint::ComponentHandle;

use crate::{HistoryWindow, ImagePopup};

/// UI-thread state. Lives in an `Rc`; window callbacks hold weak references.
pub struct UiState {
    pub ui_to_app_tx: AsyncSender<AppEvent>,
    pub editor: RefCell<Option<HistoryEditor<'static>>>,
    pub history_window: RefCell<Option<HistoryWindow>>,
    pub image_popup: RefCell<Option<ImagePopup>>,
}

impl UiState {
    pub fn new(ui_to_app_tx: AsyncSender<AppEvent>) -> Self {
        Self {
            ui_to_app_tx,
            editor: RefCell::new(None),
            history_window: RefCell::new(None),
            image_popup: RefCell::new(None),
        }
    }

    pub fn dispatch(&self, event: AppEvent) {
        dispatch(&self.ui_to_app_tx, event);
    }

    /// Drop the open editor without committing and hide the secondary
    /// windows, so none outlives the main window.
    pub fn close_secondary_windows(&self) -> anyhow::Result<()> {
        if let Some(editor) = self.editor.borrow_mut().take() {
            editor.close();
        }
        if let Some(window) = self.history_window.borrow_mut().take() {
            window.hide()?;
        }
        if let Some(popup) = self.image_popup.borrow_mut().take() {
            popup.hide()?;
        }
        Ok(())
    }
}

/// Queue an event for the backend without blocking the event loop
pub fn dispatch(tx: &AsyncSender<AppEvent>, event: AppEvent) {
    let tx = tx.clone();
    let spawned = slint::spawn_local(async move {
        if let Err(e) = tx.send(event).await {
            tracing::error!("Failed to send event to backend: {}", e);
        }
    });

    if let Err(e) = spawned {
        tracing::error!("Failed to schedule backend event: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_closing_main_window_discards_editor() {
        let (tx, _rx) = kanal::unbounded_async();
        let state = UiState::new(tx);

        let commits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&commits);
        let entries = vec!["A".to_string(), "B".to_string()];
        let mut editor = HistoryEditor::new(&entries, move |_| counter.set(counter.get() + 1));
        let first = editor.fields()[0].id;
        editor.edit_entry(first, "A'").unwrap();
        *state.editor.borrow_mut() = Some(editor);

        state.close_secondary_windows().unwrap();

        assert!(state.editor.borrow().is_none());
        assert!(state.history_window.borrow().is_none());
        assert!(state.image_popup.borrow().is_none());
        assert_eq!(commits.get(), 0);
    }
}
