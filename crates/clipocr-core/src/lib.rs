pub mod editor;
pub mod error;
pub mod pipeline;
pub mod session;

pub use editor::{EditorField, FieldId, HistoryEditor};
pub use error::{EditorError, SessionError};
pub use pipeline::{
    RecognizeOptions, Recognition, clipboard_image, normalize_recognized, recognize_clipboard,
};
pub use session::{ExportOutcome, Session};
