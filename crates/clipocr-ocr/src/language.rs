use std::path::PathBuf;

use clipocr_config::ocr::OcrConfig;

use crate::error::OcrError;

/// Verify the trained data for the configured language is installed.
///
/// Runs once at startup; a missing file is a fatal configuration error.
pub fn check_language_data(config: &OcrConfig) -> Result<PathBuf, OcrError> {
    let path = config.language_data_path();

    if path.is_file() {
        tracing::debug!("Language data found at {}", path.display());
        return Ok(path);
    }

    Err(OcrError::MissingLanguageData {
        file_name: format!("{}.traineddata", config.language),
        dir: config.tessdata_dir.clone(),
        url: config.language_data_url(),
        path,
    })
}
