pub mod clipboard;
pub mod export;

pub use clipboard::{ArboardClipboard, ClipboardError, ClipboardSource};
pub use export::{ExportError, export_history, history_csv, with_csv_extension};
