use std::path::PathBuf;
use std::process::{Command, Stdio};

use clipocr_config::ocr::OcrConfig;

use crate::error::OcrError;
use crate::scratch::ScratchImage;

/// Turns an encoded image into text.
///
/// Implementations block; callers move them off the UI thread.
pub trait Recognizer: Send + Sync {
    fn recognize(&self, png: &[u8], language: &str) -> Result<String, OcrError>;
}

/// Runs the `tesseract` executable against a scratch PNG
pub struct TesseractCli {
    bin: PathBuf,
    tessdata_dir: PathBuf,
}

impl TesseractCli {
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            bin: config.tesseract_bin.clone(),
            tessdata_dir: config.tessdata_dir.clone(),
        }
    }
}

impl Recognizer for TesseractCli {
    fn recognize(&self, png: &[u8], language: &str) -> Result<String, OcrError> {
        let scratch = ScratchImage::write(png)?;

        tracing::debug!(
            "Running {} on {} ({} bytes, lang {})",
            self.bin.display(),
            scratch.path().display(),
            png.len(),
            language
        );

        let output = Command::new(&self.bin)
            .arg(scratch.path())
            .arg("stdout")
            .arg("--tessdata-dir")
            .arg(&self.tessdata_dir)
            .arg("-l")
            .arg(language)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| OcrError::Launch {
                bin: self.bin.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(OcrError::Engine {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}
