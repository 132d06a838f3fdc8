use clipocr_types::RawImage;
use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ExtendedColorType, ImageEncoder, RgbImage, RgbaImage};

use crate::error::OcrError;

/// Convert clipboard pixels to the RGB8 layout the engine is fed with.
/// Alpha is dropped, not composited.
pub fn canonicalize(image: &RawImage) -> Result<RgbImage, OcrError> {
    let malformed = || OcrError::MalformedImage {
        width: image.width,
        height: image.height,
        len: image.rgba.len(),
    };

    if !image.is_well_formed() {
        return Err(malformed());
    }

    let rgba = RgbaImage::from_raw(image.width, image.height, image.rgba.clone())
        .ok_or_else(malformed)?;

    Ok(DynamicImage::ImageRgba8(rgba).to_rgb8())
}

pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, OcrError> {
    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(buffer)
}

/// Height of a `target_width` wide thumbnail, truncated, at least one pixel
pub fn thumbnail_height(width: u32, height: u32, target_width: u32) -> u32 {
    if width == 0 {
        return 1;
    }
    let scaled = u64::from(height) * u64::from(target_width) / u64::from(width);
    scaled.clamp(1, u64::from(u32::MAX)) as u32
}

/// Fixed-width preview preserving the aspect ratio
pub fn thumbnail(image: &RgbImage, target_width: u32) -> RawImage {
    let target_width = target_width.max(1);
    let target_height = thumbnail_height(image.width(), image.height(), target_width);

    let resized = imageops::resize(image, target_width, target_height, FilterType::Lanczos3);
    let rgba = DynamicImage::ImageRgb8(resized).to_rgba8();

    RawImage::new(rgba.width(), rgba.height(), rgba.into_raw())
}
