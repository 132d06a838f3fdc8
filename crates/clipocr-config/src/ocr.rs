use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where trained language files are published
pub const TESSDATA_DOWNLOAD_BASE: &str = "https://github.com/tesseract-ocr/tessdata/raw/main";

fn default_tesseract_bin() -> PathBuf {
    PathBuf::from("tesseract")
}

fn default_tessdata_dir() -> PathBuf {
    PathBuf::from("/opt/homebrew/share/tessdata")
}

fn default_language() -> String {
    "chi_sim".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OcrConfig {
    /// Tesseract executable, looked up on PATH when relative
    #[serde(default = "default_tesseract_bin")]
    pub tesseract_bin: PathBuf,
    /// Directory holding `<language>.traineddata`
    #[serde(default = "default_tessdata_dir")]
    pub tessdata_dir: PathBuf,
    #[serde(default = "default_language")]
    pub language: String,
}

impl OcrConfig {
    pub fn language_data_path(&self) -> PathBuf {
        self.tessdata_dir
            .join(format!("{}.traineddata", self.language))
    }

    pub fn language_data_url(&self) -> String {
        format!("{TESSDATA_DOWNLOAD_BASE}/{}.traineddata", self.language)
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract_bin: default_tesseract_bin(),
            tessdata_dir: default_tessdata_dir(),
            language: default_language(),
        }
    }
}
