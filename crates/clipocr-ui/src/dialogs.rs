use std::path::PathBuf;

use clipocr_config::export::ExportConfig;
use clipocr_types::{Notice, NoticeLevel};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

/// Modal message box; returns once the user dismissed it
pub fn show_notice(notice: &Notice) {
    let level = match notice.level {
        NoticeLevel::Info => MessageLevel::Info,
        NoticeLevel::Warning => MessageLevel::Warning,
        NoticeLevel::Error => MessageLevel::Error,
    };

    let _ = MessageDialog::new()
        .set_level(level)
        .set_title(notice.title.as_str())
        .set_description(notice.message.as_str())
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// `None` when the user cancels
pub fn pick_export_path(export: &ExportConfig) -> Option<PathBuf> {
    FileDialog::new()
        .add_filter("CSV files", &["csv"])
        .set_file_name(export.default_file_name.as_str())
        .save_file()
}
