use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::OcrError;

/// Temporary PNG handed to the OCR executable.
///
/// The file is removed when the guard is dropped, on success, error or panic.
pub struct ScratchImage {
    file: NamedTempFile,
}

impl ScratchImage {
    pub fn write(png: &[u8]) -> Result<Self, OcrError> {
        let mut file = tempfile::Builder::new()
            .prefix("clipocr-")
            .suffix(".png")
            .tempfile()
            .map_err(OcrError::Scratch)?;

        file.write_all(png).map_err(OcrError::Scratch)?;
        file.flush().map_err(OcrError::Scratch)?;

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
