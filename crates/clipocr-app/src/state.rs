use std::sync::Arc;

use clipocr_config::Config;
use clipocr_core::RecognizeOptions;
use clipocr_io::{ArboardClipboard, ClipboardSource};
use clipocr_ocr::{Recognizer, TesseractCli};

pub struct AppState {
    pub config: Arc<Config>,
    pub recognizer: Arc<dyn Recognizer>,
    pub clipboard: Arc<dyn ClipboardSource>,
}

impl AppState {
    /// Tesseract on the system clipboard
    pub fn new(config: Config) -> Self {
        let recognizer = Arc::new(TesseractCli::new(&config.ocr));
        Self::with_backends(config, recognizer, Arc::new(ArboardClipboard))
    }

    pub fn with_backends(
        config: Config,
        recognizer: Arc<dyn Recognizer>,
        clipboard: Arc<dyn ClipboardSource>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            recognizer,
            clipboard,
        }
    }

    pub fn recognize_options(&self) -> RecognizeOptions {
        RecognizeOptions::from(self.config.as_ref())
    }
}
