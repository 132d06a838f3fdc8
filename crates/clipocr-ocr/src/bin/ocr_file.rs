//! Run the recognizer on a PNG file - run with: cargo run -p clipocr-ocr --bin ocr_file -- <image.png>

use anyhow::{Context, Result};
use clipocr_config::Config;
use clipocr_ocr::{Recognizer, TesseractCli};
use clipocr_types::RawImage;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("usage: ocr_file <image.png>")?;

    let config = Config::load(None)?;
    let data = clipocr_ocr::check_language_data(&config.ocr)?;
    println!("Language data: {}", data.display());

    let decoded = image::open(&path)
        .with_context(|| format!("Failed to open {path}"))?
        .to_rgba8();
    let raw = RawImage::new(decoded.width(), decoded.height(), decoded.into_raw());

    let start = std::time::Instant::now();
    let canonical = clipocr_ocr::canonicalize(&raw)?;
    let png = clipocr_ocr::encode_png(&canonical)?;
    let text = TesseractCli::new(&config.ocr).recognize(&png, &config.ocr.language)?;

    println!("{:?} - {} chars", start.elapsed(), text.chars().count());
    for line in text.lines().take(5) {
        println!("> {line}");
    }

    Ok(())
}
