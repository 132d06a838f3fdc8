mod error;
mod language;
mod ocr;
mod prepare;
mod scratch;

pub use error::OcrError;
pub use language::check_language_data;
pub use ocr::{Recognizer, TesseractCli};
pub use prepare::{canonicalize, encode_png, thumbnail, thumbnail_height};
pub use scratch::ScratchImage;
