use std::rc::Rc;

use clipocr_core::{EditorField, FieldId, HistoryEditor};
use clipocr_types::AppEvent;
use slint::{ComponentHandle, ModelRc, VecModel};

use crate::state::{UiState, dispatch};
use crate::{EditorRow, HistoryWindow};

pub fn editor_rows(fields: &[EditorField]) -> Vec<EditorRow> {
    fields
        .iter()
        .map(|f| EditorRow {
            id: f.id.raw() as i32,
            text: f.text.as_str().into(),
        })
        .collect()
}

fn rows_model(fields: &[EditorField]) -> ModelRc<EditorRow> {
    ModelRc::new(VecModel::from(editor_rows(fields)))
}

// Ids originate from `editor_rows`; anything else is rejected by the editor
fn field_id(id: i32) -> FieldId {
    FieldId::from_raw(id as u64)
}

/// Show an editor over `entries`. Deletes and saves travel back to the
/// backend as `ReplaceHistory`.
pub fn open_history_editor(state: &Rc<UiState>, entries: Vec<String>) -> anyhow::Result<()> {
    // Reopening replaces the previous editor without committing it
    if let Some(previous) = state.editor.borrow_mut().take() {
        previous.close();
    }
    if let Some(previous) = state.history_window.borrow_mut().take() {
        previous.hide()?;
    }

    let tx = state.ui_to_app_tx.clone();
    let editor = HistoryEditor::new(&entries, move |entries| {
        dispatch(&tx, AppEvent::ReplaceHistory(entries));
    });

    let window = HistoryWindow::new()?;
    window.set_rows(rows_model(editor.fields()));

    {
        let weak_state = Rc::downgrade(state);
        window.on_edited(move |id, text| {
            let Some(state) = weak_state.upgrade() else {
                return;
            };
            let mut guard = state.editor.borrow_mut();
            if let Some(editor) = guard.as_mut()
                && let Err(e) = editor.edit_entry(field_id(id), text.as_str())
            {
                tracing::warn!("[SLINT] Edit ignored: {}", e);
            }
        });
    }

    {
        let weak_state = Rc::downgrade(state);
        let weak_window = window.as_weak();
        window.on_delete_entry(move |id| {
            let Some(state) = weak_state.upgrade() else {
                return;
            };

            let rows = {
                let mut guard = state.editor.borrow_mut();
                let Some(editor) = guard.as_mut() else {
                    return;
                };
                if let Err(e) = editor.delete_entry(field_id(id)) {
                    tracing::warn!("[SLINT] Delete ignored: {}", e);
                    return;
                }
                rows_model(editor.fields())
            };

            if let Some(w) = weak_window.upgrade() {
                w.set_rows(rows);
            }
        });
    }

    {
        let weak_state = Rc::downgrade(state);
        let weak_window = window.as_weak();
        window.on_save(move || {
            let Some(state) = weak_state.upgrade() else {
                return;
            };

            let editor = state.editor.borrow_mut().take();
            if let Some(editor) = editor {
                editor.save();
            }

            if let Some(w) = weak_window.upgrade()
                && let Err(e) = w.hide()
            {
                tracing::error!("[SLINT] Failed to hide history window: {}", e);
            }
        });
    }

    {
        let weak_state = Rc::downgrade(state);
        window.window().on_close_requested(move || {
            if let Some(state) = weak_state.upgrade() {
                let editor = state.editor.borrow_mut().take();
                if let Some(editor) = editor {
                    editor.close();
                }
            }
            slint::CloseRequestResponse::HideWindow
        });
    }

    window.show()?;
    tracing::debug!("[SLINT] History editor opened with {} entries", editor.len());

    *state.editor.borrow_mut() = Some(editor);
    *state.history_window.borrow_mut() = Some(window);
    Ok(())
}
