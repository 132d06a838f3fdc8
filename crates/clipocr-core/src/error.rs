use clipocr_io::{ClipboardError, ExportError};
use clipocr_ocr::OcrError;
use clipocr_types::Notice;

use crate::editor::FieldId;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No image on the clipboard")]
    NoClipboardImage,

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("Recognition failed: {0}")]
    Recognition(#[from] OcrError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

impl SessionError {
    /// A missing image is the user's to fix; everything else is an error
    pub fn notice(&self) -> Notice {
        match self {
            SessionError::NoClipboardImage => {
                Notice::warning("Warning", "There is no image on the clipboard")
            }
            SessionError::Clipboard(e) => Notice::error("Clipboard error", e.to_string()),
            SessionError::Recognition(_) => Notice::error("Error", self.to_string()),
            SessionError::Export(e) => Notice::error("Export failed", e.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("No history field with id {0}")]
    UnknownField(FieldId),
}
