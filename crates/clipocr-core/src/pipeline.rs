use clipocr_config::Config;
use clipocr_io::ClipboardSource;
use clipocr_ocr::Recognizer;
use clipocr_types::RawImage;

use crate::error::SessionError;

/// Fixed parameters of every recognition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizeOptions {
    pub language: String,
    pub thumbnail_width: u32,
}

impl From<&Config> for RecognizeOptions {
    fn from(config: &Config) -> Self {
        Self {
            language: config.ocr.language.clone(),
            thumbnail_width: config.ui.thumbnail_width,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Recognition {
    pub text: String,
    pub thumbnail: RawImage,
}

/// Tesseract separates CJK glyphs with spaces; drop them all, then trim
pub fn normalize_recognized(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != ' ' && *c != '\u{3000}')
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn recognize_image(
    image: &RawImage,
    recognizer: &dyn Recognizer,
    options: &RecognizeOptions,
) -> Result<Recognition, SessionError> {
    let canonical = clipocr_ocr::canonicalize(image)?;
    let png = clipocr_ocr::encode_png(&canonical)?;

    let raw = recognizer.recognize(&png, &options.language)?;
    let text = normalize_recognized(&raw);
    tracing::debug!("Recognized {} chars", text.chars().count());

    Ok(Recognition {
        text,
        thumbnail: clipocr_ocr::thumbnail(&canonical, options.thumbnail_width),
    })
}

/// Current clipboard image, or `NoClipboardImage`
pub fn clipboard_image(clipboard: &dyn ClipboardSource) -> Result<RawImage, SessionError> {
    clipboard.image()?.ok_or(SessionError::NoClipboardImage)
}

/// Read the clipboard and recognize it. Touches no session state.
pub fn recognize_clipboard(
    clipboard: &dyn ClipboardSource,
    recognizer: &dyn Recognizer,
    options: &RecognizeOptions,
) -> Result<Recognition, SessionError> {
    let image = clipboard_image(clipboard)?;
    recognize_image(&image, recognizer, options)
}
