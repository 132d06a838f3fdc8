use serde::{Deserialize, Serialize};

fn default_title() -> String {
    "Clipboard OCR".to_string()
}

fn default_thumbnail_width() -> u32 {
    300
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Thumbnail width in pixels, height follows the aspect ratio
    #[serde(default = "default_thumbnail_width")]
    pub thumbnail_width: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            thumbnail_width: default_thumbnail_width(),
        }
    }
}
