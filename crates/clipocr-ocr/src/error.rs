use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error(
        "Language data not found: {path}\nPlace '{file_name}' in {dir}.\nIt can be downloaded from: {url}"
    )]
    MissingLanguageData {
        path: PathBuf,
        dir: PathBuf,
        file_name: String,
        url: String,
    },

    #[error("Malformed image: {width}x{height} with {len} bytes of RGBA data")]
    MalformedImage { width: u32, height: u32, len: usize },

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write scratch image: {0}")]
    Scratch(#[source] std::io::Error),

    #[error("Failed to launch {bin}: {source}")]
    Launch {
        bin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Tesseract failed ({status}): {stderr}")]
    Engine { status: String, stderr: String },

    #[error("Tesseract output is not valid UTF-8")]
    InvalidOutput(#[from] std::string::FromUtf8Error),
}
