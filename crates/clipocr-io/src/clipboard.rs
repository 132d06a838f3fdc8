use arboard::Clipboard;
use clipocr_types::RawImage;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard access failed: {0}")]
    Access(#[from] arboard::Error),
}

/// Anything that can hand over the image currently on the clipboard
pub trait ClipboardSource: Send + Sync {
    /// `Ok(None)` when the clipboard holds no image
    fn image(&self) -> Result<Option<RawImage>, ClipboardError>;
}

/// System clipboard; a fresh handle is opened for every read
#[derive(Debug, Default, Clone, Copy)]
pub struct ArboardClipboard;

impl ClipboardSource for ArboardClipboard {
    fn image(&self) -> Result<Option<RawImage>, ClipboardError> {
        let mut clipboard = Clipboard::new()?;

        match clipboard.get_image() {
            Ok(image) => {
                tracing::debug!("Clipboard image {}x{}", image.width, image.height);
                Ok(Some(RawImage::new(
                    image.width as u32,
                    image.height as u32,
                    image.bytes.into_owned(),
                )))
            }
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
